use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Callback, Config, Label, ObservableRegistry, Result, Value, registry::log_dispatch_error};

/// A cloneable, thread-safe handle to an [`ObservableRegistry`].
///
/// One mutex guards the whole registry. `set` holds it only while the
/// value is committed and releases it before the callback runs, so a
/// callback may call `set`, `get` or `register` on the same registry.
///
/// Clones share the same slots.
///
/// # Example
///
/// ```rust
/// use slotwatch::{Callback, SharedRegistry, Value};
///
/// let registry = SharedRegistry::<Value>::default();
/// let mirror = registry.clone();
/// registry.register("celsius", Callback::closure(move |_: Option<&Value>, c: &Value| {
///     let f = c.as_float().unwrap_or_default() * 9.0 / 5.0 + 32.0;
///     mirror.set("fahrenheit", Value::from(f))
/// }))?;
/// registry.register("fahrenheit", Callback::closure(|_: Option<&Value>, _: &Value| ()))?;
///
/// registry.set("celsius", Value::from(100.0))?;
/// assert_eq!(registry.get("fahrenheit")?, Some(Value::Float(212.0)));
/// # Ok::<(), slotwatch::Error>(())
/// ```
pub struct SharedRegistry<V = Value> {
    inner: Arc<Mutex<ObservableRegistry<V>>>,
}

impl<V> SharedRegistry<V> {
    pub fn new(config: Config) -> Self {
        Self::from(ObservableRegistry::new(config))
    }

    pub fn register(&self, name: &str, callback: Callback<V>) -> Result<()> {
        self.lock().register(name, callback)
    }

    pub fn unregister(&self, name: &str) -> Result<()> {
        self.lock().unregister(name)
    }

    /// Store `value` and notify the slot's callback after the lock is released.
    pub fn set(&self, name: &str, value: V) -> Result<()>
    where
        V: Clone,
    {
        let current = value.clone();
        let (callback, previous) = self.lock().commit(name, value)?;

        tracing::trace!(observable = %name, callback = %callback.label(), "Dispatching change");
        callback
            .dispatch(previous.as_ref(), &current)
            .inspect_err(|err| log_dispatch_error(name, err))
    }

    pub fn has_observable(&self, name: &str) -> bool {
        self.lock().has_observable(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.lock().names().map(str::to_owned).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, ObservableRegistry<V>> {
        // Every registry operation mutates in a single step, a poisoned
        // lock still guards consistent slots.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone> SharedRegistry<V> {
    /// Current value of the slot, `None` if it was not set since registration.
    pub fn get(&self, name: &str) -> Result<Option<V>> {
        self.lock().get(name).map(|value| value.cloned())
    }
}

impl<V> Clone for SharedRegistry<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedRegistry<V> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<V> From<ObservableRegistry<V>> for SharedRegistry<V> {
    fn from(registry: ObservableRegistry<V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
