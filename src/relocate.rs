//! Physical move of category directories into the namespace.
//!
//! Each category is copied into `textures/<studio>/<project>/<category>/`,
//! merging over whatever is already there, and the source tree is removed
//! before the next category starts. Nothing is rolled back if a copy or
//! removal fails part way.

use anyhow::{Context, Result};
use fs_extra::dir::{self, CopyOptions};
use log::debug;
use std::fs;
use std::path::Path;

/// Move every existing category directory under `textures_dir/<studio>/<project>/`.
///
/// Returns the categories actually moved, in configured order.
pub fn move_texture_dirs(
    textures_dir: &Path,
    studio: &str,
    project: &str,
    categories: &[String],
) -> Result<Vec<String>> {
    let namespace_dir = textures_dir.join(studio).join(project);
    fs::create_dir_all(&namespace_dir)
        .with_context(|| format!("creating {}", namespace_dir.display()))?;

    let mut moved = Vec::new();
    for category in categories {
        let source = textures_dir.join(category);
        if !source.is_dir() {
            continue;
        }
        let destination = namespace_dir.join(category);
        move_dir(&source, &destination)?;
        debug!("moved {} -> {}", source.display(), destination.display());
        moved.push(category.clone());
    }
    Ok(moved)
}

fn move_dir(source: &Path, destination: &Path) -> Result<()> {
    fs::create_dir_all(destination)
        .with_context(|| format!("creating {}", destination.display()))?;

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;
    options.copy_inside = true;
    dir::copy(source, destination, &options).with_context(|| {
        format!(
            "copying {} to {}",
            source.display(),
            destination.display()
        )
    })?;

    fs::remove_dir_all(source).with_context(|| format!("removing {}", source.display()))
}
