pub mod inspect;
pub mod summarize;

use appconfig_core::errors::{ExError, ExErrorKind};
use appconfig_core::IngestedMessage;
use std::path::Path;

/// Read and decode one envelope file.
fn read_envelope(path: &Path) -> Result<IngestedMessage, ExError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read_envelope")
            .with_message(format!("Failed to read {}: {}", path.display(), e))
    })?;
    Ok(IngestedMessage::from_json(&raw)?)
}

fn render(report: &serde_json::Value) -> Result<String, ExError> {
    serde_json::to_string_pretty(report).map_err(|e| {
        ExError::new(ExErrorKind::Internal)
            .with_op("render_report")
            .with_message(e.to_string())
    })
}

/// Write a report to `output`, or stdout when no path is given.
fn write_output(output: Option<&Path>, report: &str) -> Result<(), ExError> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", report))
                .map_err(|e| ExError::from(e).with_op("write_report"))?;
            println!("✓ Wrote report to {}", path.display());
        }
        None => println!("{}", report),
    }
    Ok(())
}
