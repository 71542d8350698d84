//! Summarize command
//!
//! Usage: appconfig summarize <FILE>... [--output <FILE>]

use appconfig_core::errors::ExError;
use appconfig_core::SavedStateSet;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;

use super::{read_envelope, render, write_output};

#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Envelope files, one saved snapshot each
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute summarize command
pub fn execute(args: SummarizeArgs) -> Result<(), ExError> {
    let mut set = SavedStateSet::new();
    for file in &args.files {
        let message = read_envelope(file)?;
        let member = message
            .to_saved_snapshot()
            .map_err(|e| ExError::from(e).with_easi_node(message.easi_node()))?;
        set.push(member);
    }

    let members: Vec<_> = set
        .iter()
        .map(|member| {
            json!({
                "easi_node": member.easi_node(),
                "fingerprint": member.fingerprint(),
                "record_count": member.collection().len(),
            })
        })
        .collect();

    let report = json!({
        "member_count": set.len(),
        "summary": set.summarize(),
        "members": members,
    });

    write_output(args.output.as_deref(), &render(&report)?)
}
