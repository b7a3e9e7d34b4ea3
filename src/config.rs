//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Local config: `<dir>/.bintree.toml`
//! 4. Environment variables: `BINTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::errors::BintreeError;

/// How trees are drawn by [`crate::render::TreeRender`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenderSettings {
    /// Label printed for a tree without nodes
    pub empty_tree_label: String,
    /// Draw a placeholder for a missing child of a node that has the other one
    pub show_vacant: bool,
    /// Placeholder text for a missing child
    pub vacant_label: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            empty_tree_label: "Empty tree".into(),
            show_vacant: true,
            vacant_label: "_".into(),
        }
    }
}

/// Raw render section for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawRenderSettings {
    pub empty_tree_label: Option<String>,
    pub show_vacant: Option<bool>,
    pub vacant_label: Option<String>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub render: RawRenderSettings,
}

impl RenderSettings {
    /// Overlay wins where it specifies a value.
    pub fn merge(&self, overlay: &RawRenderSettings) -> Self {
        Self {
            empty_tree_label: overlay
                .empty_tree_label
                .clone()
                .unwrap_or_else(|| self.empty_tree_label.clone()),
            show_vacant: overlay.show_vacant.unwrap_or(self.show_vacant),
            vacant_label: overlay
                .vacant_label
                .clone()
                .unwrap_or_else(|| self.vacant_label.clone()),
        }
    }
}

/// Unified configuration for bintree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub render: RenderSettings,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".bintree.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, BintreeError> {
    let content = std::fs::read_to_string(path).map_err(|e| BintreeError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| BintreeError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            render: self.render.merge(&overlay.render),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.bintree.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
    /// 3. Local config: `<local_dir>/.bintree.toml`
    /// 4. Environment variables: `BINTREE_*` prefix, `__` between section and key
    pub fn load(local_dir: Option<&Path>) -> Result<Self, BintreeError> {
        Self::load_layers(global_config_path().as_deref(), local_dir, None)
    }

    /// Load settings from explicit layer sources.
    ///
    /// `global_path` is read if it exists. `env` stands in for the process
    /// environment when given; keys still need the `BINTREE_` prefix.
    #[instrument(level = "debug", skip(env))]
    pub fn load_layers(
        global_path: Option<&Path>,
        local_dir: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, BintreeError> {
        let mut current = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        debug!(?current, "settings loaded");

        Ok(current)
    }

    /// Load settings from one file on top of the defaults, ignoring other layers.
    pub fn from_file(path: &Path) -> Result<Self, BintreeError> {
        Ok(Self::default().merge_with(&load_raw_settings(path)?))
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, BintreeError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINTREE")
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("render.empty_tree_label") {
            settings.render.empty_tree_label = val;
        }
        if let Ok(val) = config.get_bool("render.show_vacant") {
            settings.render.show_vacant = val;
        }
        if let Ok(val) = config.get_string("render.vacant_label") {
            settings.render.vacant_label = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, BintreeError> {
        toml::to_string_pretty(self).map_err(|e| BintreeError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# bintree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/bintree/bintree.toml
#   Local:  <dir>/.bintree.toml
#   Env:    BINTREE_RENDER__<KEY> environment variables

[render]
# Label printed for a tree without nodes
# empty_tree_label = "Empty tree"

# Draw a placeholder where a node is missing one of its two children
# show_vacant = true

# Placeholder text for a missing child
# vacant_label = "_"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> BintreeError {
    BintreeError::Config {
        message: e.to_string(),
    }
}
