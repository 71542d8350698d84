//! Configuration-state snapshots.
//!
//! A snapshot is the record collection one host reported at one moment.
//! Building a snapshot always runs application-domain derivation, so every
//! snapshot handed to callers is already in its queryable form.
//!
//! ## Wire Shape
//!
//! ```text
//! {"dttm": 1571950979.575358, "data": [RecordJSON, ...]}
//! ```
//!
//! Missing or `null` `dttm` and `data` decode as `0.0` and an empty list.

pub mod domain;

pub use domain::{default_application_domain, DOMAIN_KEY, MULTIPLE, NOT_APPLICABLE};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::collection::RecordCollection;
use crate::errors::{AppConfigError, Result};
use crate::model::null_as_default;

/// A record collection plus the time it was captured
///
/// Deserialization goes through [`Snapshot::new`], so a decoded snapshot
/// always carries derived application domains.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SnapshotDocument")]
pub struct Snapshot {
    /// Seconds since the Unix epoch, with sub-second precision
    #[serde(rename = "dttm")]
    timestamp: f64,

    #[serde(rename = "data")]
    records: RecordCollection,
}

/// Snapshot document as it appears on the wire, before derivation
#[derive(Deserialize)]
struct SnapshotDocument {
    #[serde(default, deserialize_with = "null_as_default")]
    dttm: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    data: RecordCollection,
}

impl From<SnapshotDocument> for Snapshot {
    fn from(document: SnapshotDocument) -> Self {
        Snapshot::new(document.dttm, document.data)
    }
}

impl Snapshot {
    /// Build a snapshot and derive application domains for its records.
    pub fn new(timestamp: f64, records: RecordCollection) -> Self {
        let mut snapshot = Self { timestamp, records };
        snapshot.assign_derived_domains();
        snapshot
    }

    /// Decode a snapshot document and derive application domains.
    ///
    /// # Errors
    ///
    /// Returns `AppConfigError::Decode` when the document is not valid JSON
    /// or a field has the wrong type (e.g. a non-numeric `dttm`).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| AppConfigError::decode("snapshot", e))
    }

    pub fn timestamp(&self) -> f64 {
        self.timestamp
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn into_records(self) -> RecordCollection {
        self.records
    }

    /// The capture time as a UTC timestamp.
    ///
    /// The float is split into whole seconds and a nanosecond remainder.
    /// Returns `None` for non-finite or out-of-range timestamps.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        if !self.timestamp.is_finite() {
            return None;
        }
        let secs = self.timestamp.floor();
        let nanos = ((self.timestamp - secs) * 1e9) as u32;
        DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
    }

    /// The default domain this snapshot's simple records vote for.
    pub fn derive_default_application_domain(&self) -> String {
        default_application_domain(&self.records)
    }

    fn assign_derived_domains(&mut self) {
        let default = self.derive_default_application_domain();
        tracing::debug!(
            default_domain = %default,
            record_count = self.records.len(),
            "derived default application domain"
        );
        self.records.assign_application_domains_or(&default);
    }
}

impl Deref for Snapshot {
    type Target = RecordCollection;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}
