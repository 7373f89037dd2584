//! Slotwatch - observable variable registry
//!
//! A registry of named slots. Every slot owns a current value and a
//! callback; each [`ObservableRegistry::set`] commits the new value and then
//! synchronously calls the callback with the previous and the new value.
//!
//! ```rust
//! use slotwatch::{Callback, ObservableRegistry, Value};
//!
//! let mut registry = ObservableRegistry::<Value>::default();
//! registry.register("temperature", Callback::closure(|previous: Option<&Value>, current: &Value| {
//!     println!("temperature changed: {previous:?} -> {current}");
//! }))?;
//!
//! assert_eq!(registry.get("temperature")?, None);
//! registry.set("temperature", Value::from(21.5))?;
//! assert_eq!(registry.get("temperature")?, Some(&Value::Float(21.5)));
//! # Ok::<(), slotwatch::Error>(())
//! ```
//!
//! Callbacks come in four shapes (see [`Callback`]): a named free function,
//! a static method on a type, a method bound to an instance, or a closure.

mod callback;
mod config;
mod element;
mod error;
mod label;
mod observer;
mod registry;
mod reregister_policy;
mod shared;
mod value;

#[cfg(feature = "test-harness")]
pub mod testing;

pub use callback::{Callback, CallbackOutput, FunctionRef, Handler};
pub use config::Config;
pub use element::{Element, TypeRef};
pub use error::Error;
pub use label::Label;
pub use observer::{Observer, StaticObserver};
pub use registry::ObservableRegistry;
pub use reregister_policy::ReregisterPolicy;
pub use shared::SharedRegistry;
pub use value::Value;

#[cfg(feature = "macros")]
pub use slotwatch_macros::observer;

pub type Result<T = ()> = std::result::Result<T, Error>;
