//! Rewrites texture references inside the pack's JSON documents.
//!
//! Documents are treated as plain text. Only quoted occurrences of an old
//! logical path are replaced, so `"textures/entity/foo"` is rewritten while
//! `"textures/entity/foo_glow"` and `textures/entity/foo` (unquoted) are not.
//! A quoted path used as an object key or an unrelated string value is still
//! rewritten.

use crate::JSON_EXTENSION;
use crate::mapping::PathMapping;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document that could not be read and was left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedDocument {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Documents whose contents changed, in scan order.
    pub updated: Vec<PathBuf>,
    pub skipped: Vec<SkippedDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentUpdate {
    Updated,
    Unchanged,
    Skipped(String),
}

/// All `.json` files under `pack_root`, in deterministic order.
///
/// Unreadable directories are logged and left out of the scan.
pub fn find_json_documents(pack_root: &Path) -> Vec<PathBuf> {
    let mut documents = Vec::new();
    for entry in WalkDir::new(pack_root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("skipping part of {}: {err}", pack_root.display());
                continue;
            }
        };
        let path = entry.path();
        let is_json = path.extension().and_then(|ext| ext.to_str()) == Some(JSON_EXTENSION);
        if is_json && path.is_file() {
            documents.push(path.to_path_buf());
        }
    }
    documents
}

/// Apply every mapping entry to `content` as quoted-literal substitution.
pub fn rewrite_references(content: &str, mapping: &PathMapping) -> String {
    let mut rewritten = content.to_string();
    for (old, new) in mapping.iter() {
        let quoted_old = format!("\"{old}\"");
        if rewritten.contains(&quoted_old) {
            rewritten = rewritten.replace(&quoted_old, &format!("\"{new}\""));
        }
    }
    rewritten
}

/// Rewrite one document in place.
///
/// Read failures are reported as [`DocumentUpdate::Skipped`]; write failures
/// are returned as errors. Unchanged documents are never written.
pub fn update_document(path: &Path, mapping: &PathMapping) -> Result<DocumentUpdate> {
    let original = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => return Ok(DocumentUpdate::Skipped(err.to_string())),
    };

    let rewritten = rewrite_references(&original, mapping);
    if rewritten == original {
        return Ok(DocumentUpdate::Unchanged);
    }

    fs::write(path, rewritten).with_context(|| format!("writing {}", path.display()))?;
    Ok(DocumentUpdate::Updated)
}

/// Rewrite every JSON document under `pack_root`.
pub fn update_json_documents(pack_root: &Path, mapping: &PathMapping) -> Result<RewriteSummary> {
    let mut summary = RewriteSummary::default();
    for path in find_json_documents(pack_root) {
        match update_document(&path, mapping)? {
            DocumentUpdate::Updated => {
                debug!("rewrote references in {}", path.display());
                summary.updated.push(path);
            }
            DocumentUpdate::Unchanged => {}
            DocumentUpdate::Skipped(reason) => {
                debug!("could not read {}: {reason}", path.display());
                summary.skipped.push(SkippedDocument { path, reason });
            }
        }
    }
    Ok(summary)
}
