use std::{fmt, sync::Arc};

use indexmap::IndexMap;

use crate::{Callback, Config, Error, Label, Result, Value};

struct Slot<V> {
    callback: Arc<Callback<V>>,
    value: Option<V>,
}

/// Named observable slots, each with a current value and a callback.
///
/// - `register(name, callback)` creates (or replaces) a slot; its value
///   starts unset.
/// - `set(name, value)` commits the value, then calls the callback with
///   the previous and the new value before returning.
/// - `get(name)` reads the current value, `None` while unset.
/// - `unregister(name)` removes the slot.
///
/// Slots are kept in registration order. Callback and value live in the
/// same entry, so they are always added and removed together.
///
/// The registry is single-threaded: `set` needs `&mut self` and a callback
/// cannot reach back into it. Use [`SharedRegistry`](crate::SharedRegistry)
/// to share a registry between threads or to set slots from callbacks.
pub struct ObservableRegistry<V = Value> {
    slots: IndexMap<Arc<str>, Slot<V>>,
    config: Config,
}

impl<V> ObservableRegistry<V> {
    pub fn new(config: Config) -> Self {
        Self {
            slots: IndexMap::with_capacity(config.initial_capacity),
            config,
        }
    }

    /// Register `callback` under `name`.
    ///
    /// Registering a name again replaces its callback. Whether the value is
    /// reset depends on [`Config::reregister`]. The callback is not inspected
    /// here; malformed descriptors fail on `set`.
    pub fn register(&mut self, name: &str, callback: Callback<V>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        let callback = Arc::new(callback);
        match self.slots.get_mut(name) {
            Some(slot) => {
                if self.config.reregister.is_reset() {
                    slot.value = None;
                }
                tracing::debug!(
                    observable = %name,
                    callback = %callback.label(),
                    policy = %self.config.reregister,
                    "Observable re-registered"
                );
                slot.callback = callback;
            }
            None => {
                tracing::debug!(observable = %name, callback = %callback.label(), "Observable registered");
                self.slots.insert(Arc::from(name), Slot {
                    callback,
                    value: None,
                });
            }
        }
        Ok(())
    }

    /// Remove the slot, its callback and its value.
    pub fn unregister(&mut self, name: &str) -> Result<()> {
        if self.slots.shift_remove(name).is_none() {
            return Err(self.not_found(name));
        }
        tracing::debug!(observable = %name, "Observable unregistered");
        Ok(())
    }

    /// Current value of the slot, `None` if it was not set since registration.
    pub fn get(&self, name: &str) -> Result<Option<&V>> {
        self.slots
            .get(name)
            .map(|slot| slot.value.as_ref())
            .ok_or_else(|| self.not_found(name))
    }

    /// Store `value` and notify the slot's callback.
    ///
    /// The value is committed before the callback runs and stays committed
    /// if the callback fails. Errors returned by the callback are returned
    /// as they are.
    pub fn set(&mut self, name: &str, value: V) -> Result<()> {
        let Some(slot) = self.slots.get_mut(name) else {
            return Err(self.not_found(name));
        };
        let previous = slot.value.take();
        let current = &*slot.value.insert(value);

        tracing::trace!(observable = %name, callback = %slot.callback.label(), "Dispatching change");
        slot.callback
            .dispatch(previous.as_ref(), current)
            .inspect_err(|err| log_dispatch_error(name, err))
    }

    #[inline]
    pub fn has_observable(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots.keys().map(|name| name.as_ref())
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Commit `value` and hand back what is needed to notify outside of
    /// any borrow of the registry.
    pub(crate) fn commit(&mut self, name: &str, value: V) -> Result<(Arc<Callback<V>>, Option<V>)> {
        let Some(slot) = self.slots.get_mut(name) else {
            return Err(self.not_found(name));
        };
        let previous = slot.value.replace(value);
        Ok((Arc::clone(&slot.callback), previous))
    }

    pub(crate) fn not_found(&self, name: &str) -> Error {
        Error::NotFound {
            name: name.into(),
            registered: self.slots.keys().cloned().collect(),
        }
    }
}

pub(crate) fn log_dispatch_error(name: &str, err: &Error) {
    match err {
        Error::TypeMismatch { .. } | Error::MethodNotFound { .. } => {
            tracing::debug!(observable = %name, error = %err, "Invalid callback descriptor")
        }
        _ => tracing::trace!(observable = %name, error = %err, "Callback failed"),
    }
}

impl<V> Default for ObservableRegistry<V> {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl<V: fmt::Debug> fmt::Debug for ObservableRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.slots.iter().map(|(name, slot)| (name, &slot.value)))
            .finish()
    }
}
