use std::{borrow::Cow, fmt, sync::Arc};

use crate::{Element, Error, Label, Observer, Result, StaticObserver, TypeRef};

/// A free function bound to a slot, carrying its name for diagnostics.
///
/// The function may return `()` or `Result<()>`, like closures.
pub struct FunctionRef<V> {
    name: Arc<str>,
    func: Handler<V>,
}

impl<V: 'static> FunctionRef<V> {
    pub fn new<R>(name: impl Into<Arc<str>>, func: fn(Option<&V>, &V) -> R) -> Self
    where
        R: CallbackOutput + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(move |previous: Option<&V>, current: &V| {
                func(previous, current).into_result()
            }),
        }
    }
}

impl<V> FunctionRef<V> {
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A closure bound to a slot.
pub type Handler<V> = Arc<dyn Fn(Option<&V>, &V) -> Result<()> + Send + Sync>;

/// Return types accepted from closures and `#[observer]` methods.
pub trait CallbackOutput {
    fn into_result(self) -> Result<()>;
}

impl CallbackOutput for () {
    fn into_result(self) -> Result<()> {
        Ok(())
    }
}

impl CallbackOutput for Result<()> {
    fn into_result(self) -> Result<()> {
        self
    }
}

/// Describes what to call when a slot changes.
///
/// Every form is invoked with two arguments: the previous value (`None` if
/// the slot was never set since registration) and the new value. Nothing is
/// validated when the descriptor is created or registered; a malformed
/// [`Callback::Pair`] is reported by the `set` that first tries to call it.
pub enum Callback<V> {
    /// A named free function.
    Function(FunctionRef<V>),
    /// A structured descriptor: `(type, method)` for a static call or
    /// `(instance, method)` for a bound call.
    Pair(Element<V>, Element<V>),
    /// A captured closure.
    Closure(Handler<V>),
}

impl<V> Callback<V> {
    pub fn function<R>(name: impl Into<Arc<str>>, func: fn(Option<&V>, &V) -> R) -> Self
    where
        R: CallbackOutput + 'static,
        V: 'static,
    {
        Callback::Function(FunctionRef::new(name, func))
    }

    /// Static call of `method` on the type `T`.
    pub fn static_method<T: StaticObserver<V>>(method: impl Into<Arc<str>>) -> Self {
        Callback::Pair(Element::Type(TypeRef::of::<T>()), Element::Name(method.into()))
    }

    /// Call of `method` on `instance`.
    pub fn method<O>(instance: Arc<O>, method: impl Into<Arc<str>>) -> Self
    where
        O: Observer<V> + 'static,
    {
        Callback::Pair(Element::Instance(instance), Element::Name(method.into()))
    }

    pub fn closure<F, R>(f: F) -> Self
    where
        F: Fn(Option<&V>, &V) -> R + Send + Sync + 'static,
        R: CallbackOutput,
        V: 'static,
    {
        Callback::Closure(Arc::new(move |previous: Option<&V>, current: &V| {
            f(previous, current).into_result()
        }))
    }

    /// Raw structured descriptor. Not checked until dispatch.
    pub fn pair(first: Element<V>, second: Element<V>) -> Self {
        Callback::Pair(first, second)
    }

    pub(crate) fn dispatch(&self, previous: Option<&V>, current: &V) -> Result<()> {
        match self {
            Callback::Function(f) => (f.func)(previous, current),
            Callback::Pair(target, method) => dispatch_pair(target, method, previous, current),
            Callback::Closure(f) => f(previous, current),
        }
    }
}

fn dispatch_pair<V>(
    target: &Element<V>,
    method: &Element<V>,
    previous: Option<&V>,
    current: &V,
) -> Result<()> {
    let Element::Name(method) = method else {
        return Err(Error::TypeMismatch {
            actual: method.label(),
            expected: vec!["name"],
        });
    };

    match target {
        Element::Type(ty) => ty.call(method, previous, current),
        Element::Instance(instance) => instance.call_method(method, previous, current),
        other => Err(Error::TypeMismatch {
            actual: other.label(),
            expected: vec!["type", "instance"],
        }),
    }
}

impl<V> Label for Callback<V> {
    fn label(&self) -> Cow<'static, str> {
        match self {
            Callback::Function(f) => Cow::Owned(format!("function {}", f.name())),
            Callback::Pair(Element::Type(t), Element::Name(m)) => {
                Cow::Owned(format!("{}::{m}", t.name()))
            }
            Callback::Pair(Element::Instance(_), Element::Name(m)) => {
                Cow::Owned(format!("instance.{m}"))
            }
            Callback::Pair(a, b) => Cow::Owned(format!("pair({}, {})", a.label(), b.label())),
            Callback::Closure(_) => Cow::Borrowed("closure"),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Callback<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Function(func) => f.debug_tuple("Function").field(&func.name()).finish(),
            Callback::Pair(a, b) => f.debug_tuple("Pair").field(a).field(b).finish(),
            Callback::Closure(_) => f.write_str("Closure(..)"),
        }
    }
}
