//! Saved snapshots and multi-host aggregation.
//!
//! A [`SavedSnapshot`] is a snapshot tagged with the envelope identity it
//! arrived with. A [`SavedStateSet`] groups many of them so queries can run
//! across a fleet.

use serde::{Deserialize, Serialize};

use crate::collection::{first_seen, RecordCollection};
use crate::digest::identity_digest;
use crate::model::null_as_default;
use crate::snapshot::Snapshot;

/// A snapshot together with the identity of the host that produced it
///
/// `easin` is always recomputed from `easi` and `node` when decoding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "SavedSnapshotDocument")]
pub struct SavedSnapshot {
    #[serde(rename = "env")]
    environment: String,
    asi: String,
    easi: String,
    node: String,
    #[serde(rename = "easin")]
    easi_node: String,
    #[serde(rename = "statefile")]
    snapshot: Snapshot,
}

/// Saved snapshot as it appears on the wire. A stored `easin` is ignored.
#[derive(Default, Deserialize)]
#[serde(default)]
struct SavedSnapshotDocument {
    #[serde(deserialize_with = "null_as_default")]
    env: String,
    #[serde(deserialize_with = "null_as_default")]
    asi: String,
    #[serde(deserialize_with = "null_as_default")]
    easi: String,
    #[serde(deserialize_with = "null_as_default")]
    node: String,
    #[serde(deserialize_with = "null_as_default")]
    statefile: Snapshot,
}

impl From<SavedSnapshotDocument> for SavedSnapshot {
    fn from(document: SavedSnapshotDocument) -> Self {
        SavedSnapshot::new(
            document.env,
            document.asi,
            document.easi,
            document.node,
            document.statefile,
        )
    }
}

impl SavedSnapshot {
    pub fn new(
        environment: impl Into<String>,
        asi: impl Into<String>,
        easi: impl Into<String>,
        node: impl Into<String>,
        snapshot: Snapshot,
    ) -> Self {
        let easi = easi.into();
        let node = node.into();
        Self {
            environment: environment.into(),
            asi: asi.into(),
            easi_node: format!("{}:{}", easi, node),
            easi,
            node,
            snapshot,
        }
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

    pub fn easi_node(&self) -> &str {
        &self.easi_node
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn collection(&self) -> &RecordCollection {
        self.snapshot.records()
    }

    pub fn has_environment(&self, environment: &str) -> bool {
        self.environment == environment
    }

    pub fn has_asi(&self, asi: &str) -> bool {
        self.asi == asi
    }

    pub fn has_easi(&self, easi: &str) -> bool {
        self.easi == easi
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.node == node
    }

    pub fn has_easi_node(&self, easi_node: &str) -> bool {
        self.easi_node == easi_node
    }

    /// Identity digest of `easi:node`.
    ///
    /// Two saved snapshots from the same host always share a fingerprint,
    /// whatever their configuration content.
    pub fn fingerprint(&self) -> String {
        identity_digest(&self.easi, &self.node)
    }
}

/// Distinct identity values across a saved-state set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSummary<'a> {
    pub environments: Vec<&'a str>,
    pub asis: Vec<&'a str>,
    pub easis: Vec<&'a str>,
    pub easi_nodes: Vec<&'a str>,
    pub nodes: Vec<&'a str>,
}

/// An ordered group of saved snapshots
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedStateSet {
    members: Vec<SavedSnapshot>,
}

impl SavedStateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, member: SavedSnapshot) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedSnapshot> {
        self.members.iter()
    }

    /// Every member's records, member order first, then record order.
    pub fn collection(&self) -> RecordCollection {
        self.iter()
            .flat_map(|member| member.collection().iter().cloned())
            .collect()
    }

    pub fn environments(&self) -> Vec<&str> {
        first_seen(self.iter().map(SavedSnapshot::environment))
    }

    pub fn asis(&self) -> Vec<&str> {
        first_seen(self.iter().map(SavedSnapshot::asi))
    }

    pub fn easis(&self) -> Vec<&str> {
        first_seen(self.iter().map(SavedSnapshot::easi))
    }

    pub fn easi_nodes(&self) -> Vec<&str> {
        first_seen(self.iter().map(SavedSnapshot::easi_node))
    }

    pub fn nodes(&self) -> Vec<&str> {
        first_seen(self.iter().map(SavedSnapshot::node))
    }

    /// All five identity projections at once.
    ///
    /// Each projection reads the members independently, so they are computed
    /// one after another.
    pub fn summarize(&self) -> StateSummary<'_> {
        tracing::debug!(member_count = self.members.len(), "summarizing saved state");
        StateSummary {
            environments: self.environments(),
            asis: self.asis(),
            easis: self.easis(),
            easi_nodes: self.easi_nodes(),
            nodes: self.nodes(),
        }
    }
}

impl From<Vec<SavedSnapshot>> for SavedStateSet {
    fn from(members: Vec<SavedSnapshot>) -> Self {
        Self { members }
    }
}

impl FromIterator<SavedSnapshot> for SavedStateSet {
    fn from_iter<I: IntoIterator<Item = SavedSnapshot>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SavedStateSet {
    type Item = &'a SavedSnapshot;
    type IntoIter = std::slice::Iter<'a, SavedSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
