//! Artifact rendering and run-summary printing.

use crate::domain::models::{BehaviorModel, JsonOut};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Render the model as pretty-printed JSON (2-space indent) with a
/// trailing newline, byte-stable across runs on unchanged input.
pub fn render_model(model: &BehaviorModel) -> anyhow::Result<String> {
    Ok(format!("{}\n", serde_json::to_string_pretty(model)?))
}

pub fn write_model(path: &Path, model: &BehaviorModel) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, render_model(model)?)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct Summary {
    pub output: String,
    pub operations: usize,
    pub readonly: usize,
    pub paginated: usize,
    pub redacted_structures: usize,
    pub sensitive_types: usize,
}

impl Summary {
    pub fn of(path: &Path, model: &BehaviorModel) -> Self {
        Self {
            output: path.display().to_string(),
            operations: model.operations.len(),
            readonly: model
                .operations
                .values()
                .filter(|op| op.readonly == Some(true))
                .count(),
            paginated: model
                .operations
                .values()
                .filter(|op| op.pagination.is_some())
                .count(),
            redacted_structures: model.redaction.len(),
            sensitive_types: model.sensitive_types.len(),
        }
    }
}

pub fn print_summary(json: bool, summary: &Summary) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: summary
            })?
        );
    } else {
        println!("Generated {}", summary.output);
        println!(
            "  Operations: {} ({} readonly, {} paginated)",
            summary.operations, summary.readonly, summary.paginated
        );
        println!("  Redaction rules: {} structures", summary.redacted_structures);
        println!("  Sensitive types: {}", summary.sensitive_types);
    }
    Ok(())
}
