/// Arguments of a single callback invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall<V> {
    pub previous: Option<V>,
    pub current: V,
}

impl<V> RecordedCall<V> {
    pub fn new(previous: Option<V>, current: V) -> Self {
        Self { previous, current }
    }

    /// True for the first change after registration.
    pub fn is_initial(&self) -> bool {
        self.previous.is_none()
    }
}
