use std::fmt;

/// What happens to a slot's value when its name is registered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReregisterPolicy {
    /// The value goes back to unset; the next callback sees no previous value.
    #[default]
    Reset,
    /// The value is kept; only the callback is replaced.
    Preserve,
}

impl ReregisterPolicy {
    pub fn is_reset(&self) -> bool {
        matches!(self, ReregisterPolicy::Reset)
    }
}

impl fmt::Display for ReregisterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReregisterPolicy::Reset => write!(f, "Reset"),
            ReregisterPolicy::Preserve => write!(f, "Preserve"),
        }
    }
}
