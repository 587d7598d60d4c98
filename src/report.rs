//! Human-readable status lines, one renderer per stage of a migration run.

use crate::rewrite::RewriteSummary;
use crate::{LOG_PREFIX, TEXTURES_DIR};
use std::path::Path;

pub fn textures_missing(pack_root: &Path) -> Vec<String> {
    vec![format!(
        "{LOG_PREFIX} {}/ not found - skipping.",
        pack_root.join(TEXTURES_DIR).display()
    )]
}

pub fn nothing_to_do() -> Vec<String> {
    vec![format!(
        "{LOG_PREFIX} No textures to reorganize - already namespaced or empty."
    )]
}

pub fn mapping_built(count: usize, namespace: &str) -> Vec<String> {
    vec![format!(
        "{LOG_PREFIX} {count} texture paths -> {TEXTURES_DIR}/{namespace}/"
    )]
}

/// Skipped-document warnings followed by the updated-document list.
pub fn references_rewritten(summary: &RewriteSummary) -> Vec<String> {
    let mut lines: Vec<String> = summary
        .skipped
        .iter()
        .map(|skipped| {
            format!(
                "{LOG_PREFIX} Warning: could not read {}: {}",
                skipped.path.display(),
                skipped.reason
            )
        })
        .collect();

    if summary.updated.is_empty() {
        lines.push(format!("{LOG_PREFIX} No JSON files needed path updates."));
    } else {
        lines.push(format!(
            "{LOG_PREFIX} Updated {} JSON file(s):",
            summary.updated.len()
        ));
        lines.extend(
            summary
                .updated
                .iter()
                .map(|path| format!("  {}", path.display())),
        );
    }
    lines
}

pub fn categories_moved(moved: &[String], namespace: &str) -> Vec<String> {
    moved
        .iter()
        .map(|category| {
            format!(
                "{LOG_PREFIX} Moved {TEXTURES_DIR}/{category}/ -> {TEXTURES_DIR}/{namespace}/{category}/"
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::SkippedDocument;
    use std::path::PathBuf;

    #[test]
    fn missing_textures_is_a_single_notice() {
        assert_eq!(
            textures_missing(Path::new("RP")),
            vec!["[texture_namespace] RP/textures/ not found - skipping."]
        );
    }

    #[test]
    fn rewrite_lists_warnings_then_documents() {
        let summary = RewriteSummary {
            updated: vec![PathBuf::from("RP/entity/a.json")],
            skipped: vec![SkippedDocument {
                path: PathBuf::from("RP/bad.json"),
                reason: "denied".to_string(),
            }],
        };

        assert_eq!(
            references_rewritten(&summary),
            vec![
                "[texture_namespace] Warning: could not read RP/bad.json: denied",
                "[texture_namespace] Updated 1 JSON file(s):",
                "  RP/entity/a.json",
            ]
        );
    }

    #[test]
    fn rewrite_without_updates_says_so() {
        assert_eq!(
            references_rewritten(&RewriteSummary::default()),
            vec!["[texture_namespace] No JSON files needed path updates."]
        );
    }

    #[test]
    fn mapping_and_moves_name_the_namespace() {
        assert_eq!(
            mapping_built(1, "s/p"),
            vec!["[texture_namespace] 1 texture paths -> textures/s/p/"]
        );
        assert_eq!(
            categories_moved(&["entity".to_string()], "s/p"),
            vec!["[texture_namespace] Moved textures/entity/ -> textures/s/p/entity/"]
        );
    }
}
