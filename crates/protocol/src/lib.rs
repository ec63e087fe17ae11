//! Shared protocol types for motor-panel
//!
//! Defines the settings record, the device's HTTP endpoints and the
//! transport-agnostic client used by both the browser panel and `motorctl`.

pub mod client;
pub mod command;
pub mod error;
pub mod settings;

#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use client::*;
pub use command::*;
pub use error::*;
pub use settings::*;
