//! Structured logging facility
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Conversions at the wire boundary (envelope decode, snapshot and saved
//! snapshot construction) own the start/end events. The query layer below
//! them only emits `tracing::debug!`.
//!
//! # Usage
//!
//! ```rust
//! use appconfig_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
