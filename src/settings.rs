//! Filter settings supplied by the build pipeline.
//!
//! The pipeline passes a single JSON object as the first argument. No field is
//! required and malformed input is never an error: anything that cannot be
//! read as a settings object falls back to the defaults.

use log::debug;
use serde::Deserialize;

const DEFAULT_STUDIO: &str = "studio";
const DEFAULT_PROJECT: &str = "project";
const DEFAULT_TEXTURE_DIRS: [&str; 3] = ["entity", "items", "particle"];

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub studio: String,
    pub project: String,
    /// Categories to namespace, in processing order.
    #[serde(alias = "categories")]
    pub texture_dirs: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            studio: DEFAULT_STUDIO.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            texture_dirs: DEFAULT_TEXTURE_DIRS
                .iter()
                .map(|dir| dir.to_string())
                .collect(),
        }
    }
}

impl Settings {
    /// Resolve settings from the raw pipeline argument.
    pub fn from_arg(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            debug!("no settings argument; using defaults");
            return Self::default();
        };
        match serde_json::from_str::<Settings>(raw) {
            Ok(settings) => settings,
            Err(err) => {
                debug!("ignoring unreadable settings ({err}); using defaults");
                Self::default()
            }
        }
    }

    /// `<studio>/<project>`, the prefix inserted after `textures/`.
    pub fn namespace(&self) -> String {
        format!("{}/{}", self.studio, self.project)
    }
}
