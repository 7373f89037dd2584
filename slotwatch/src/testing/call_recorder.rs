use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{Callback, testing::RecordedCall};

/// A spy callback recording every `(previous, current)` pair it receives.
///
/// Clones share the same record, so the recorder can stay in the test
/// while callbacks produced by [`CallRecorder::callback`] live in a registry.
pub struct CallRecorder<V> {
    calls: Arc<Mutex<Vec<RecordedCall<V>>>>,
}

impl<V: Clone + Send + 'static> CallRecorder<V> {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A closure callback appending to this recorder.
    pub fn callback(&self) -> Callback<V> {
        let calls = self.calls.clone();
        Callback::closure(move |previous: Option<&V>, current: &V| {
            calls
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(RecordedCall::new(previous.cloned(), current.clone()));
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall<V>> {
        self.records().clone()
    }

    pub fn count(&self) -> usize {
        self.records().len()
    }

    pub fn last(&self) -> Option<RecordedCall<V>> {
        self.records().last().cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.records().is_empty()
    }

    pub fn clear(&self) {
        self.records().clear();
    }

    fn records(&self) -> MutexGuard<'_, Vec<RecordedCall<V>>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<V: Clone + Send + 'static> Default for CallRecorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Clone for CallRecorder<V> {
    fn clone(&self) -> Self {
        Self {
            calls: Arc::clone(&self.calls),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ObservableRegistry;

    #[test]
    fn test_records_in_order() {
        let recorder = CallRecorder::<i32>::new();
        let mut reg = ObservableRegistry::<i32>::default();
        reg.register("x", recorder.callback()).unwrap();

        reg.set("x", 1).unwrap();
        reg.set("x", 2).unwrap();

        assert_eq!(
            recorder.calls(),
            vec![RecordedCall::new(None, 1), RecordedCall::new(Some(1), 2)]
        );
        assert!(recorder.calls()[0].is_initial());

        recorder.clear();
        assert!(recorder.is_empty());
    }
}
