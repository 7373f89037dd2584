use std::{borrow::Cow, fmt, sync::Arc};

use crate::{Label, Observer, Result, StaticObserver};

/// Identifies a type implementing [`StaticObserver`].
///
/// Holds the type's name (for diagnostics) and its static dispatcher.
pub struct TypeRef<V> {
    name: &'static str,
    dispatch: fn(&str, Option<&V>, &V) -> Result<()>,
}

impl<V> TypeRef<V> {
    pub fn of<T: StaticObserver<V>>() -> Self {
        Self {
            name: std::any::type_name::<T>(),
            dispatch: T::call_static,
        }
    }

    /// Fully qualified name of the referenced type.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub(crate) fn call(&self, method: &str, previous: Option<&V>, current: &V) -> Result<()> {
        (self.dispatch)(method, previous, current)
    }
}

impl<V> Clone for TypeRef<V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for TypeRef<V> {}

impl<V> fmt::Debug for TypeRef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeRef").field(&self.name).finish()
    }
}

/// One half of a structured callback descriptor.
///
/// A well-formed pair is `(Type | Instance, Name)`. Any other combination
/// can be stored and is only rejected when the slot is set.
pub enum Element<V> {
    /// A type identifier; the call is made on the type itself.
    Type(TypeRef<V>),
    /// An object instance; the call is made on it.
    Instance(Arc<dyn Observer<V>>),
    /// A method name.
    Name(Arc<str>),
    /// Any plain value.
    Value(V),
}

impl<V> Element<V> {
    pub fn name(name: impl Into<Arc<str>>) -> Self {
        Element::Name(name.into())
    }

    pub fn instance<O: Observer<V> + 'static>(instance: Arc<O>) -> Self {
        Element::Instance(instance)
    }

    pub fn of_type<T: StaticObserver<V>>() -> Self {
        Element::Type(TypeRef::of::<T>())
    }
}

impl<V> Label for Element<V> {
    fn label(&self) -> Cow<'static, str> {
        Cow::Borrowed(match self {
            Element::Type(_) => "type",
            Element::Instance(_) => "instance",
            Element::Name(_) => "name",
            Element::Value(_) => "value",
        })
    }
}

impl<V: fmt::Debug> fmt::Debug for Element<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Type(t) => f.debug_tuple("Type").field(&t.name()).finish(),
            Element::Instance(_) => f.write_str("Instance(..)"),
            Element::Name(n) => f.debug_tuple("Name").field(n).finish(),
            Element::Value(v) => f.debug_tuple("Value").field(v).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Nop;

    impl StaticObserver<i32> for Nop {
        fn call_static(_method: &str, _previous: Option<&i32>, _current: &i32) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_type_ref_name() {
        let t = TypeRef::<i32>::of::<Nop>();
        assert!(t.name().ends_with("Nop"));
        assert!(t.call("anything", None, &1).is_ok());
    }

    #[test]
    fn test_element_labels() {
        assert_eq!(Element::<i32>::of_type::<Nop>().label(), "type");
        assert_eq!(Element::<i32>::name("m").label(), "name");
        assert_eq!(Element::Value(5).label(), "value");
    }
}
