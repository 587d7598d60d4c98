//! Namespaces the textures of a resource pack.
//!
//! A run builds the old-to-new logical path mapping from the configured
//! category directories, rewrites quoted references in every JSON document of
//! the pack, then moves the category directories under
//! `textures/<studio>/<project>/`. The stages run in that order exactly once.

pub mod mapping;
pub mod relocate;
pub mod report;
pub mod rewrite;
pub mod settings;

pub use mapping::{PathMapping, build_path_mapping};
pub use relocate::move_texture_dirs;
pub use rewrite::{
    DocumentUpdate, RewriteSummary, SkippedDocument, find_json_documents, rewrite_references,
    update_document, update_json_documents,
};
pub use settings::Settings;

use anyhow::Result;
use log::debug;
use std::path::Path;

/// Directory under the pack root holding texture categories.
pub const TEXTURES_DIR: &str = "textures";
/// Pack root used when the pipeline does not override it.
pub const DEFAULT_PACK_ROOT: &str = "RP";
/// Image extensions that contribute mapping entries. Matched case-sensitively.
pub const IMAGE_EXTENSIONS: [&str; 2] = ["png", "tga"];
pub const JSON_EXTENSION: &str = "json";
/// Prefix of every status line printed by the filter.
pub const LOG_PREFIX: &str = "[texture_namespace]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// `<studio>/<project>`.
    pub namespace: String,
    pub mapping: PathMapping,
    pub rewrite: RewriteSummary,
    /// Categories moved, in configured order.
    pub moved: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The pack has no `textures/` directory; nothing was touched.
    TexturesMissing,
    /// No qualifying images were found; nothing was touched.
    NothingToDo,
    Completed(MigrationReport),
}

/// Run the full migration against `pack_root`, discarding status lines.
pub fn migrate_pack(pack_root: &Path, settings: &Settings) -> Result<MigrationOutcome> {
    migrate_pack_with_progress(pack_root, settings, |_| {})
}

/// Run the full migration against `pack_root`.
///
/// Each stage hands its status lines to `progress` as soon as it finishes, so
/// a failure during relocation still leaves the mapping and rewrite lines
/// behind. Errors only surface from failed writes, copies, or removals, in
/// which case the pack may be partially migrated.
pub fn migrate_pack_with_progress(
    pack_root: &Path,
    settings: &Settings,
    mut progress: impl FnMut(&str),
) -> Result<MigrationOutcome> {
    let mut emit = |lines: Vec<String>| {
        for line in &lines {
            progress(line.as_str());
        }
    };

    let textures_dir = pack_root.join(TEXTURES_DIR);
    if !textures_dir.is_dir() {
        emit(report::textures_missing(pack_root));
        return Ok(MigrationOutcome::TexturesMissing);
    }

    let mapping = build_path_mapping(
        &textures_dir,
        &settings.studio,
        &settings.project,
        &settings.texture_dirs,
    )?;
    if mapping.is_empty() {
        emit(report::nothing_to_do());
        return Ok(MigrationOutcome::NothingToDo);
    }
    let namespace = settings.namespace();
    debug!("built {} texture path mappings", mapping.len());
    emit(report::mapping_built(mapping.len(), &namespace));

    let rewrite = update_json_documents(pack_root, &mapping)?;
    emit(report::references_rewritten(&rewrite));

    let moved = move_texture_dirs(
        &textures_dir,
        &settings.studio,
        &settings.project,
        &settings.texture_dirs,
    )?;
    emit(report::categories_moved(&moved, &namespace));

    Ok(MigrationOutcome::Completed(MigrationReport {
        namespace,
        mapping,
        rewrite,
        moved,
    }))
}
