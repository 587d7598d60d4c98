//! Old-to-new logical texture paths.
//!
//! A logical path is how JSON documents refer to a texture: rooted at
//! `textures/`, `/`-separated, without the file extension. The builder scans
//! the configured category directories and pairs every image's current logical
//! path with its namespaced one.

use crate::{IMAGE_EXTENSIONS, TEXTURES_DIR};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Deterministic map from old logical path to namespaced logical path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMapping {
    entries: BTreeMap<String, String>,
}

impl PathMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry unless the key is already mapped.
    ///
    /// Returns `false` when the key was already present; the existing value is
    /// kept.
    pub fn insert(&mut self, old: String, new: String) -> bool {
        if self.entries.contains_key(&old) {
            return false;
        }
        self.entries.insert(old, new);
        true
    }

    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(old, new)` pairs in stable key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }
}

/// Scan `textures_dir/<category>` for each configured category and build the
/// mapping.
///
/// Missing categories are skipped. Only files with an exactly matching image
/// extension contribute entries.
pub fn build_path_mapping(
    textures_dir: &Path,
    studio: &str,
    project: &str,
    categories: &[String],
) -> Result<PathMapping> {
    let mut mapping = PathMapping::new();
    for category in categories {
        let category_dir = textures_dir.join(category);
        if !category_dir.is_dir() {
            debug!("category {} not present; skipping", category_dir.display());
            continue;
        }

        for entry in WalkDir::new(&category_dir).sort_by_file_name() {
            let entry = entry
                .with_context(|| format!("scanning {}", category_dir.display()))?;
            let path = entry.path();
            if !path.is_file() || !has_image_extension(path) {
                continue;
            }
            let relative = path.strip_prefix(textures_dir).with_context(|| {
                format!(
                    "{} is not under {}",
                    path.display(),
                    textures_dir.display()
                )
            })?;
            let logical = logical_path(&relative.with_extension(""));
            let old = format!("{TEXTURES_DIR}/{logical}");
            let new = format!("{TEXTURES_DIR}/{studio}/{project}/{logical}");
            if !mapping.insert(old, new) {
                warn!(
                    "{} maps to an already mapped texture path; keeping the first entry",
                    path.display()
                );
            }
        }
    }
    Ok(mapping)
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}

// Logical paths use `/` on every host.
fn logical_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
