//! Inspect command
//!
//! Usage: appconfig inspect <FILE> [--key K] [--package P] [--kind KIND] ...

use appconfig_core::errors::ExError;
use appconfig_core::{RecordCollection, RecordKind};
use clap::Args;
use regex::Regex;
use serde_json::json;
use std::path::PathBuf;

use super::{read_envelope, render, write_output};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Envelope file as read off the stream
    pub file: PathBuf,

    /// Keep records with exactly this key and list its values
    #[arg(long)]
    pub key: Option<String>,

    /// Keep records from exactly this package
    #[arg(long)]
    pub package: Option<String>,

    /// Keep records whose key matches this regular expression
    #[arg(long)]
    pub key_pattern: Option<String>,

    /// Keep records whose package matches this regular expression
    #[arg(long)]
    pub package_pattern: Option<String>,

    /// Keep records in exactly this application domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Keep records whose application domain matches this regular expression
    #[arg(long)]
    pub domain_pattern: Option<String>,

    /// Keep records of this kind (invalid, simple, parameter, endpoint)
    #[arg(long)]
    pub kind: Option<RecordKind>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute inspect command
pub fn execute(args: InspectArgs) -> Result<(), ExError> {
    let message = read_envelope(&args.file)?;
    let snapshot = message
        .to_snapshot()
        .map_err(|e| ExError::from(e).with_easi_node(message.easi_node()))?;

    let records = apply_filters(snapshot.records().clone(), &args)?;
    tracing::debug!(
        matched = records.len(),
        total = snapshot.len(),
        "applied inspect filters"
    );

    let mut report = json!({
        "easi_node": message.easi_node(),
        "fingerprint": message.fingerprint(),
        "timestamp": snapshot.timestamp(),
        "time": snapshot.time().map(|t| t.to_rfc3339()),
        "default_domain": snapshot.derive_default_application_domain(),
        "record_count": records.len(),
        "keys": records.keys(),
        "values": records.values(),
        "packages": records.packages(),
        "kinds": records.kinds(),
        "application_domains": records.application_domains(),
    });
    if let Some(key) = &args.key {
        report["values_for_key"] = json!(records.values_for_key(key));
    }

    write_output(args.output.as_deref(), &render(&report)?)
}

fn compile(pattern: &str) -> Result<Regex, ExError> {
    Regex::new(pattern).map_err(|e| ExError::from(e).with_op("compile_pattern"))
}

fn apply_filters(
    mut records: RecordCollection,
    args: &InspectArgs,
) -> Result<RecordCollection, ExError> {
    if let Some(kind) = args.kind {
        records = records.filter_by_kind(kind);
    }
    if let Some(package) = &args.package {
        records = records.filter_by_package(package);
    }
    if let Some(pattern) = &args.package_pattern {
        records = records.filter_by_package_pattern(&compile(pattern)?);
    }
    if let Some(key) = &args.key {
        records = records.filter_by_key(key);
    }
    if let Some(pattern) = &args.key_pattern {
        records = records.filter_by_key_pattern(&compile(pattern)?);
    }
    if let Some(domain) = &args.domain {
        records = records.filter_by_application_domain(domain);
    }
    if let Some(pattern) = &args.domain_pattern {
        records = records.filter_by_application_domain_pattern(&compile(pattern)?);
    }
    Ok(records)
}
