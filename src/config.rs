//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternbook/patternbook.toml`
//! 3. Local config: `<dir>/.patternbook.toml`
//! 4. Environment variables: `PATTERNBOOK_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::flyweight::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::domain::{DisplayStyle, DEPTH_STEP};

/// Composite demo rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompositeConfig {
    /// Depth passed to the root's display call
    pub start_depth: usize,
    /// Depth added per level
    pub depth_step: usize,
    /// Indentation mark, exactly one character
    pub indent: String,
}

impl Default for CompositeConfig {
    fn default() -> Self {
        Self {
            start_depth: 1,
            depth_step: DEPTH_STEP,
            indent: "-".into(),
        }
    }
}

impl CompositeConfig {
    /// Display style for the tree renderer. Call after [`Settings::validate`].
    pub fn style(&self) -> DisplayStyle {
        DisplayStyle {
            indent: self.indent.chars().next().unwrap_or('-'),
            step: self.depth_step,
        }
    }
}

/// Flyweight demo input and glyph dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FlyweightConfig {
    /// Text whose characters are rendered through the glyph factory
    pub document: String,
    /// Point size of the first character; grows by one per character
    pub point_size: u32,
    pub width: u32,
    pub height: u32,
}

impl Default for FlyweightConfig {
    fn default() -> Self {
        Self {
            document: "AAABBB".into(),
            point_size: 10,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Unified configuration for patternbook.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub composite: CompositeConfig,
    pub flyweight: FlyweightConfig,
}

/// Get the XDG config directory for patternbook.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternbook").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternbook.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".patternbook.toml")
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.patternbook.toml`
    ///
    /// Later layers override individual keys of earlier ones; unspecified keys
    /// keep the value from below.
    #[instrument(level = "debug")]
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!(path = %global_path.display(), "loading global config");
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!(path = %local_path.display(), "loading local config");
                builder = builder.add_source(File::from(local_path).required(true));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("PATTERNBOOK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the renderers cannot work with.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.composite.depth_step == 0 {
            return Err(ApplicationError::Config {
                message: "composite.depth_step must be at least 1".into(),
            });
        }
        if self.composite.indent.chars().count() != 1 {
            return Err(ApplicationError::Config {
                message: format!(
                    "composite.indent must be a single character, got {:?}",
                    self.composite.indent
                ),
            });
        }
        if self.flyweight.document.is_empty() {
            return Err(ApplicationError::Config {
                message: "flyweight.document must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patternbook configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/patternbook/patternbook.toml
#   Local:  <dir>/.patternbook.toml   (select with -C <dir>)
#   Env:    PATTERNBOOK_<SECTION>__<KEY>, e.g. PATTERNBOOK_COMPOSITE__DEPTH_STEP=4

[composite]
# Depth of the root line
# start_depth = 1

# Depth added per tree level
# depth_step = 2

# Indentation mark (one character)
# indent = "-"

[flyweight]
# Characters rendered through the shared glyph factory
# document = "AAABBB"

# Point size of the first character, incremented per character
# point_size = 10

# Intrinsic dimensions of newly created glyphs
# width = 120
# height = 100
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
