//! Settings file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, ToolboxError};

/// Settings file name, looked up in the working directory.
pub const SETTINGS_FILE: &str = ".toolbox.yml";

/// Archive `new` downloads when no template is configured.
pub const DEFAULT_TEMPLATE: &str = "https://github.com/qutheory/vapor-example/archive/master.tar.gz";

/// Buildpack `heroku init` offers when none is configured.
pub const DEFAULT_BUILDPACK: &str = "https://github.com/kylef/heroku-buildpack-swift";

/// Executable `run` starts when `--name` is not given.
pub const DEFAULT_EXECUTABLE: &str = "App";

/// Defaults for commands that need them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Project template archive (a `.tar.gz` URL).
    pub template: String,

    /// Heroku buildpack URL.
    pub buildpack: String,

    /// Name of the executable product built by `swift build`.
    pub executable: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: DEFAULT_TEMPLATE.to_string(),
            buildpack: DEFAULT_BUILDPACK.to_string(),
            executable: DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

impl Settings {
    /// Path of the settings file for `project_root`.
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(SETTINGS_FILE)
    }

    /// Load settings for `project_root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);
        if !path.exists() {
            debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content, &path)
    }

    /// Parse settings from YAML content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| ToolboxError::ConfigParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}
