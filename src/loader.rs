//! Spec directory loading: finds the primary document and the
//! behavioral overlay documents. Thin I/O only; no extraction logic.

use crate::domain::constants::{OVERLAY_DIR, OVERLAY_EXT, PRIMARY_DOC, RESERVED_OVERLAYS};
use crate::domain::models::{OverlayDoc, SpecDocs};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("spec directory not found: {}", .0.display())]
    DirNotFound(PathBuf),
    #[error("primary document not found: {}", .0.display())]
    PrimaryNotFound(PathBuf),
}

/// Read the primary document and every overlay document from a spec
/// directory. Overlays are ordered by filename so a run is
/// deterministic regardless of directory-listing order; the reserved
/// non-behavioral overlays are skipped.
pub fn load_spec_dir(dir: &Path) -> anyhow::Result<SpecDocs> {
    if !dir.is_dir() {
        return Err(SpecError::DirNotFound(dir.to_path_buf()).into());
    }

    let primary_path = dir.join(PRIMARY_DOC);
    if !primary_path.is_file() {
        return Err(SpecError::PrimaryNotFound(primary_path).into());
    }
    let primary = fs::read_to_string(&primary_path)?;

    let mut overlays = Vec::new();
    let overlay_dir = dir.join(OVERLAY_DIR);
    if overlay_dir.is_dir() {
        let mut paths: Vec<PathBuf> = fs::read_dir(&overlay_dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().map(|ext| ext == OVERLAY_EXT).unwrap_or(false))
            .collect();
        paths.sort();

        for path in paths {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            if RESERVED_OVERLAYS.contains(&name.as_str()) {
                continue;
            }
            let text = fs::read_to_string(&path)?;
            overlays.push(OverlayDoc { name, text });
        }
    }

    Ok(SpecDocs { primary, overlays })
}
