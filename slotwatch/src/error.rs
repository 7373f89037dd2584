use std::{borrow::Cow, sync::Arc};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Observable '{name}' is not registered. Registered: [{}]", .registered.join(", "))]
    NotFound {
        name: Arc<str>,
        registered: Vec<Arc<str>>,
    },

    #[error("Invalid callback type '{actual}'. Accepted: {}", .expected.join(", "))]
    TypeMismatch {
        actual: Cow<'static, str>,
        expected: Vec<&'static str>,
    },

    #[error("Method '{method}' is not defined on '{target}'")]
    MethodNotFound { target: Arc<str>, method: Arc<str> },

    #[error("Observable name must not be empty")]
    EmptyName,

    #[error("Error external to slotwatch occurred: {0}")]
    External(Arc<str>),

    #[error("Callback failed: {0}")]
    Callback(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary error raised inside a callback.
    pub fn callback<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Callback(Box::new(err))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_lists_registered_names() {
        let err = Error::NotFound {
            name: "missing".into(),
            registered: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            err.to_string(),
            "Observable 'missing' is not registered. Registered: [a, b]"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_type_mismatch_lists_accepted_kinds() {
        let err = Error::TypeMismatch {
            actual: Cow::Borrowed("value"),
            expected: vec!["type", "instance"],
        };
        assert_eq!(
            err.to_string(),
            "Invalid callback type 'value'. Accepted: type, instance"
        );
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_callback_error_keeps_source() {
        use std::error::Error as _;
        let io = std::io::Error::other("disk on fire");
        let err = Error::callback(io);
        assert_eq!(err.source().map(|s| s.to_string()).as_deref(), Some("disk on fire"));
    }
}
