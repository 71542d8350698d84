//! Read-only query surface over an ordered list of records
//!
//! Key principles:
//! - Input order is preserved by every filter and projection
//! - Projections deduplicate, keeping the first occurrence
//! - No operation fails: an absent match is an empty result
//!
//! The only mutation is the application-domain assignment pass a snapshot
//! runs once while it is being built.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

use crate::model::{Record, RecordKind};

/// An ordered sequence of records
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordCollection {
    records: Vec<Record>,
}

impl RecordCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Assign application domains using an empty default.
    pub fn assign_application_domains(&mut self) {
        self.assign_application_domains_or("");
    }

    /// Assign application domains to every record with the same default.
    ///
    /// See [`Record::assign_application_domain_or`] for the per-record rule.
    pub fn assign_application_domains_or(&mut self, default: &str) {
        tracing::debug!(
            default_domain = default,
            record_count = self.records.len(),
            "assigning application domains"
        );
        for record in &mut self.records {
            record.assign_application_domain_or(default);
        }
    }

    pub fn keys(&self) -> Vec<&str> {
        first_seen(self.iter().map(Record::key))
    }

    pub fn values(&self) -> Vec<&str> {
        first_seen(self.iter().map(Record::value))
    }

    pub fn packages(&self) -> Vec<&str> {
        first_seen(self.iter().map(Record::package))
    }

    pub fn application_domains(&self) -> Vec<&str> {
        first_seen(self.iter().map(Record::application_domain))
    }

    /// Distinct kinds. Unknown type names all collapse into `Invalid`.
    pub fn kinds(&self) -> Vec<RecordKind> {
        first_seen(self.iter().map(Record::kind))
    }

    /// Distinct raw type names as reported on the wire
    pub fn type_names(&self) -> Vec<&str> {
        first_seen(self.iter().map(Record::type_name))
    }

    pub fn has_kind(&self, kind: RecordKind) -> bool {
        self.iter().any(|record| record.kind() == kind)
    }

    pub fn filter_by_kind(&self, kind: RecordKind) -> RecordCollection {
        self.select(|record| record.kind() == kind)
    }

    pub fn filter_by_package(&self, package: &str) -> RecordCollection {
        self.select(|record| record.has_package(package))
    }

    /// Records whose package matches `pattern` anywhere (unanchored).
    pub fn filter_by_package_pattern(&self, pattern: &Regex) -> RecordCollection {
        self.select(|record| pattern.is_match(record.package()))
    }

    pub fn filter_by_key(&self, key: &str) -> RecordCollection {
        self.select(|record| record.has_key(key))
    }

    pub fn filter_by_key_pattern(&self, pattern: &Regex) -> RecordCollection {
        self.select(|record| pattern.is_match(record.key()))
    }

    pub fn filter_by_application_domain(&self, domain: &str) -> RecordCollection {
        self.select(|record| record.has_application_domain(domain))
    }

    pub fn filter_by_application_domain_pattern(&self, pattern: &Regex) -> RecordCollection {
        self.select(|record| pattern.is_match(record.application_domain()))
    }

    /// Values of every record with `key`, in collection order, duplicates kept.
    pub fn values_for_key(&self, key: &str) -> Vec<&str> {
        self.iter()
            .filter(|record| record.has_key(key))
            .map(Record::value)
            .collect()
    }

    pub fn values_for_package_and_key(&self, package: &str, key: &str) -> Vec<&str> {
        self.iter()
            .filter(|record| record.has_package(package) && record.has_key(key))
            .map(Record::value)
            .collect()
    }

    fn select<F>(&self, predicate: F) -> RecordCollection
    where
        F: Fn(&Record) -> bool,
    {
        self.iter().filter(|&record| predicate(record)).cloned().collect()
    }
}

/// Deduplicate while keeping first-occurrence order.
pub(crate) fn first_seen<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Copy,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}

impl From<Vec<Record>> for RecordCollection {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl From<RecordCollection> for Vec<Record> {
    fn from(collection: RecordCollection) -> Self {
        collection.records
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<Record> for RecordCollection {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for RecordCollection {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordCollection {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
