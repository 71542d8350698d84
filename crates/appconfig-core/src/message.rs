//! Message-stream envelope carrying one host's snapshot.
//!
//! ## Logging Ownership
//!
//! Conversions in this module are the wire boundary and own lifecycle
//! logging:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! The snapshot and collection layers below only use `tracing::debug!()`.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::digest::identity_digest;
use crate::errors::{AppConfigError, Result};
use crate::model::null_as_default;
use crate::saved_state::SavedSnapshot;
use crate::snapshot::Snapshot;
use crate::{log_op_end, log_op_error, log_op_start};

/// The envelope a host's snapshot arrives in
///
/// Only the identity fields and the embedded document are kept; any other
/// keys the shipper adds to the envelope are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestedMessage {
    #[serde(rename = "env", deserialize_with = "null_as_default")]
    environment: String,

    #[serde(deserialize_with = "null_as_default")]
    asi: String,

    #[serde(deserialize_with = "null_as_default")]
    easi: String,

    #[serde(deserialize_with = "null_as_default")]
    node: String,

    /// The snapshot document, JSON-encoded inside a JSON string
    #[serde(rename = "message", deserialize_with = "null_as_default")]
    embedded_json: String,
}

impl IngestedMessage {
    pub fn new(
        environment: impl Into<String>,
        asi: impl Into<String>,
        easi: impl Into<String>,
        node: impl Into<String>,
        embedded_json: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            asi: asi.into(),
            easi: easi.into(),
            node: node.into(),
            embedded_json: embedded_json.into(),
        }
    }

    /// Decode an envelope as read off the stream.
    ///
    /// # Errors
    ///
    /// Returns `AppConfigError::Decode` if the envelope is not a JSON object
    /// or an identity field is not a string.
    pub fn from_json(json: &str) -> Result<Self> {
        log_op_start!("decode_envelope");
        let start = Instant::now();

        let result: Result<Self> =
            serde_json::from_str(json).map_err(|e| AppConfigError::decode("envelope", e));

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(message) => log_op_end!(
                "decode_envelope",
                duration_ms = elapsed,
                easi_node = %message.easi_node()
            ),
            Err(e) => log_op_error!("decode_envelope", e.clone(), duration_ms = elapsed),
        }
        result
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn asi(&self) -> &str {
        &self.asi
    }

    pub fn easi(&self) -> &str {
        &self.easi
    }

    pub fn node(&self) -> &str {
        &self.node
    }

    pub fn embedded_json(&self) -> &str {
        &self.embedded_json
    }

    /// Composite host identity `easi:node`
    pub fn easi_node(&self) -> String {
        format!("{}:{}", self.easi, self.node)
    }

    /// Identity digest of `easi:node`; independent of the embedded snapshot.
    pub fn fingerprint(&self) -> String {
        identity_digest(&self.easi, &self.node)
    }

    /// Decode the embedded snapshot and derive its application domains.
    ///
    /// # Errors
    ///
    /// Returns `AppConfigError::Decode` when the embedded document is
    /// malformed.
    pub fn to_snapshot(&self) -> Result<Snapshot> {
        let easi_node = self.easi_node();
        log_op_start!("to_snapshot", easi_node = easi_node.as_str());
        let start = Instant::now();

        let result = Snapshot::from_json(&self.embedded_json);

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(snapshot) => log_op_end!(
                "to_snapshot",
                duration_ms = elapsed,
                easi_node = easi_node.as_str(),
                record_count = snapshot.len()
            ),
            Err(e) => log_op_error!(
                "to_snapshot",
                e.clone(),
                duration_ms = elapsed,
                easi_node = easi_node.as_str()
            ),
        }
        result
    }

    /// Decode the embedded snapshot and attach the envelope identity.
    ///
    /// # Errors
    ///
    /// Same as [`IngestedMessage::to_snapshot`].
    pub fn to_saved_snapshot(&self) -> Result<SavedSnapshot> {
        let easi_node = self.easi_node();
        log_op_start!("to_saved_snapshot", easi_node = easi_node.as_str());
        let start = Instant::now();

        let result = Snapshot::from_json(&self.embedded_json).map(|snapshot| {
            SavedSnapshot::new(
                self.environment.clone(),
                self.asi.clone(),
                self.easi.clone(),
                self.node.clone(),
                snapshot,
            )
        });

        let elapsed = start.elapsed().as_millis() as u64;
        match &result {
            Ok(saved) => log_op_end!(
                "to_saved_snapshot",
                duration_ms = elapsed,
                easi_node = easi_node.as_str(),
                record_count = saved.collection().len()
            ),
            Err(e) => log_op_error!(
                "to_saved_snapshot",
                e.clone(),
                duration_ms = elapsed,
                easi_node = easi_node.as_str()
            ),
        }
        result
    }
}
