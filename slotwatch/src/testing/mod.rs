//! Helpers for asserting on callback activity.
//!
//! Enable with the `test-harness` feature:
//!
//! ```toml
//! [dev-dependencies]
//! slotwatch = { version = "0.1", features = ["test-harness"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! let recorder = CallRecorder::<Value>::new();
//! registry.register("speed", recorder.callback())?;
//!
//! registry.set("speed", Value::from(30))?;
//! registry.set("speed", Value::from(50))?;
//!
//! assert_eq!(recorder.count(), 2);
//! assert_eq!(recorder.last(), Some(RecordedCall::new(Some(Value::from(30)), Value::from(50))));
//! ```

mod call_recorder;
mod recorded_call;

pub use call_recorder::CallRecorder;
pub use recorded_call::RecordedCall;
