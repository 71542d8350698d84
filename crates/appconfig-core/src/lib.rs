//! appconfig core - in-memory query layer over host configuration snapshots
//!
//! This crate provides:
//! - Typed configuration records and their kinds
//! - An order-preserving record collection with filters and projections
//! - Snapshots with application-domain derivation
//! - The message-stream envelope and its conversions
//! - Saved snapshots and fleet-wide aggregation
//! - Identity and record digests
//! - Error and logging facilities

pub mod collection;
pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod message;
pub mod model;
pub mod saved_state;
pub mod snapshot;

// Re-export commonly used types
pub use collection::RecordCollection;
pub use errors::{AppConfigError, ExError, ExErrorKind, Result};
pub use message::IngestedMessage;
pub use model::{Record, RecordKind};
pub use saved_state::{SavedSnapshot, SavedStateSet, StateSummary};
pub use snapshot::Snapshot;

#[doc(hidden)]
pub use appconfig_core_types::schema as __schema;
