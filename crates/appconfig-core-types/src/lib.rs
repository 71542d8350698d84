//! Core types shared across appconfig facilities
//!
//! This crate holds the canonical schema constants used by both the error
//! facility and the logging facility:
//!
//! - **Field keys**: structured-logging field names (`op`, `easi_node`, ...)
//! - **Event names**: `start`, `end`, `end_error`

pub mod schema;
