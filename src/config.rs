//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgchart/orgchart.toml`
//! 3. Environment variables: `ORGCHART_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub roster: Option<PathBuf>,
    pub count_input: Option<PathBuf>,
    pub color: Option<bool>,
}

/// Unified configuration for orgchart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Roster used when no `--roster` is given
    pub roster: Option<PathBuf>,
    /// File read by `count` when no file is given (default: input1.txt)
    pub count_input: PathBuf,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            roster: None,
            count_input: PathBuf::from("input1.txt"),
            color: true,
        }
    }
}

/// Get the XDG config directory for orgchart.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgchart").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgchart.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Expand `~` and `$VAR`; leaves the path untouched if a variable is unset.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    match shellexpand::full(raw.as_ref()) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path.to_path_buf(),
    }
}

impl Settings {
    /// Load settings from defaults, the global config file and `ORGCHART_*`.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit global config file.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_from(global_path: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = global_path {
            if path.exists() {
                debug!("loading global config {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Scalar options: overlay wins if Some, otherwise keep base.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            roster: overlay.roster.clone().or_else(|| self.roster.clone()),
            count_input: overlay
                .count_input
                .clone()
                .unwrap_or_else(|| self.count_input.clone()),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    /// Apply ORGCHART_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGCHART")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("roster") {
            settings.roster = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("count_input") {
            settings.count_input = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("color") {
            settings.color = val;
        }

        Ok(settings)
    }

    fn expand_paths(&mut self) {
        self.roster = self.roster.as_deref().map(expand_path);
        self.count_input = expand_path(&self.count_input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_partial_overlay_when_merging_then_unset_fields_keep_base() {
        let base = Settings::default();
        let overlay = RawSettings {
            roster: Some(PathBuf::from("staff.toml")),
            count_input: None,
            color: Some(false),
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.roster, Some(PathBuf::from("staff.toml")));
        assert_eq!(merged.count_input, PathBuf::from("input1.txt"));
        assert!(!merged.color);
    }

    #[test]
    fn given_unset_variable_when_expanding_then_path_unchanged() {
        let path = Path::new("$ORGCHART_TEST_NEVER_SET_VAR/roster.toml");
        assert_eq!(expand_path(path), path.to_path_buf());
    }
}
