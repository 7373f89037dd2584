use crate::Result;

/// An object whose methods can be bound to a slot by name.
///
/// Register a bound method with [`Callback::method`](crate::Callback::method).
/// On every change the registry calls `call_method` with the method name
/// stored in the descriptor; the implementation routes it to the right
/// method. Unknown names should return [`Error::MethodNotFound`].
///
/// Usually generated with the `#[observer]` attribute rather than written
/// by hand.
///
/// [`Error::MethodNotFound`]: crate::Error::MethodNotFound
pub trait Observer<V>: Send + Sync {
    fn call_method(&self, method: &str, previous: Option<&V>, current: &V) -> Result<()>;
}

/// A type whose associated functions can be bound to a slot by name.
///
/// The static counterpart of [`Observer`]: no instance is involved, the
/// call is resolved on the type itself. See
/// [`Callback::static_method`](crate::Callback::static_method).
pub trait StaticObserver<V> {
    fn call_static(method: &str, previous: Option<&V>, current: &V) -> Result<()>;
}
