use std::borrow::Cow;

pub trait Label {
    /// Returns a human-readable label for this item.
    /// This is used for logging and error reporting.
    fn label(&self) -> Cow<'static, str>;
}
