//! Configuration management for `mdxsan-core`.
//!
//! Defines which marker lines delimit a release-notes region and which file
//! extensions the locator picks up. Defaults are embedded from
//! `config/default_config.yaml`; a user YAML file can override any field.
//!
//! License: MIT OR Apache-2.0

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{MdxsanError, Result};

/// Marker that opens a release-notes region when found anywhere in a line.
pub const DEFAULT_START_MARKER: &str = "RELEASE_NOTES_START";
/// Marker that closes a release-notes region when found anywhere in a line.
pub const DEFAULT_END_MARKER: &str = "RELEASE_NOTES_END";

/// Top-level sanitizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Literal substring that opens a region.
    pub start_marker: String,
    /// Literal substring that closes a region and resets fence state.
    pub end_marker: String,
    /// File extensions (without the dot) treated as documents.
    pub extensions: Vec<String>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
            extensions: vec!["md".to_string()],
        }
    }
}

/// A user-supplied overlay. Every field is optional so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UserConfig {
    pub start_marker: Option<String>,
    pub end_marker: Option<String>,
    pub extensions: Option<Vec<String>>,
}

impl SanitizerConfig {
    /// Loads the built-in defaults from the embedded YAML.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default config from embedded string...");
        let default_yaml = include_str!("../config/default_config.yaml");
        let config: SanitizerConfig =
            serde_yml::from_str(default_yaml).map_err(|e| MdxsanError::ConfigParse {
                path: "<embedded default_config.yaml>".into(),
                message: e.to_string(),
            })?;
        config.validated()
    }

    /// Loads the defaults and overlays the user file at `path` on top.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading config overrides from: {}", path.display());
        let text = std::fs::read_to_string(path).map_err(|e| MdxsanError::io(path, e))?;
        // An empty file deserializes to unit, not a mapping.
        let user: UserConfig = if text.trim().is_empty() {
            UserConfig::default()
        } else {
            serde_yml::from_str(&text).map_err(|e| MdxsanError::ConfigParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        };
        merge_config(Self::load_default()?, Some(user)).validated()
    }

    /// Normalises extensions and rejects configurations the tracker cannot use.
    pub fn validated(mut self) -> Result<Self> {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
        self.extensions.dedup();
        self.validate()?;
        Ok(self)
    }

    /// Checks marker and extension sanity without modifying anything.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        if self.start_marker.is_empty() {
            errors.push("`start_marker` must not be empty.".to_string());
        }
        if self.end_marker.is_empty() {
            errors.push("`end_marker` must not be empty.".to_string());
        }
        if !self.start_marker.is_empty() && self.start_marker == self.end_marker {
            errors.push(format!(
                "`start_marker` and `end_marker` are both '{}'.",
                self.start_marker
            ));
        }
        if self.extensions.is_empty() {
            errors.push("`extensions` must list at least one file extension.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(MdxsanError::InvalidConfig(errors.join(" ")))
        }
    }

    /// True when the file name of `path` ends with `.<ext>` for one of the
    /// configured extensions. Matching is case-sensitive, and a file named
    /// exactly `.md` counts.
    pub fn matches_extension(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.extensions.iter().any(|ext| {
            name.strip_suffix(ext.as_str())
                .is_some_and(|stem| stem.ends_with('.'))
        })
    }
}

/// Overlays a user config on the defaults. Fields the user left out keep
/// their default values.
pub fn merge_config(default_config: SanitizerConfig, user_config: Option<UserConfig>) -> SanitizerConfig {
    let Some(user) = user_config else {
        return default_config;
    };

    let mut merged = default_config;
    if let Some(start) = user.start_marker {
        debug!("Overriding start marker with user value: {}", start);
        merged.start_marker = start;
    }
    if let Some(end) = user.end_marker {
        debug!("Overriding end marker with user value: {}", end);
        merged.end_marker = end;
    }
    if let Some(extensions) = user.extensions {
        debug!("Overriding extensions with user value: {:?}", extensions);
        merged.extensions = extensions;
    }
    merged
}
