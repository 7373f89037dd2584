use crate::ReregisterPolicy;

/// Registry configuration.
///
/// Use the builder methods to customize, or [`Default`] for the standard
/// behavior.
///
/// # Examples
///
/// ```rust
/// use slotwatch::{Config, ObservableRegistry, ReregisterPolicy, Value};
///
/// let config = Config::default()
///     .with_initial_capacity(64)
///     .with_reregister(ReregisterPolicy::Preserve);
/// let registry = ObservableRegistry::<Value>::new(config);
/// assert!(registry.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of slots preallocated by the registry.
    /// Default: 16
    pub initial_capacity: usize,

    /// Value handling when an already registered name is registered again.
    /// Default: [`ReregisterPolicy::Reset`]
    pub reregister: ReregisterPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 16,
            reregister: ReregisterPolicy::default(),
        }
    }
}

impl Config {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Set what re-registering a name does to its current value.
    ///
    /// With [`ReregisterPolicy::Reset`] the slot reads as unset afterwards,
    /// with [`ReregisterPolicy::Preserve`] the previous value survives and is
    /// passed as `previous` to the new callback on the next change.
    pub fn with_reregister(mut self, policy: ReregisterPolicy) -> Self {
        self.reregister = policy;
        self
    }
}
