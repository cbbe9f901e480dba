//! Configuration system
//!
//! Everything tunable about audio lives in one [`AudioConfig`], loadable from
//! TOML or RON. Every section has defaults, so an empty file is valid.
//!
//! ```toml
//! search_paths = ["assets", "mods/assets"]
//!
//! [diagnostics]
//! profile = "shipping"
//! fatal_missing_assets = false
//!
//! [volumes]
//! master = 0.8
//! music = 0.5
//!
//! [paths.environment]
//! thunder = "mods/storm/thunder.ogg"
//! ```

use crate::assets::AssetPath;
use crate::audio::backend::AudioBackendConfig;
use crate::audio::diagnostics::DiagnosticsConfig;
use crate::audio::mixer::VolumeGroup;
use crate::audio::spatial::SpatialConfig;
use std::collections::BTreeMap;
use std::path::Path;

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        match format_of(path)? {
            Format::Toml => {
                toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            Format::Ron => ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string())),
        }
    }

    /// Load configuration from file, or defaults when the file does not exist
    fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load_from_file(path)
        } else {
            log::info!("No config at {}; using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = match format_of(path)? {
            Format::Toml => {
                toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
            }
            Format::Ron => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?,
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

enum Format {
    Toml,
    Ron,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(Format::Toml),
        Some("ron") => Ok(Format::Ron),
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Complete audio configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Directories sound files are looked up in, in order
    pub search_paths: Vec<String>,
    /// Failure policy
    pub diagnostics: DiagnosticsConfig,
    /// Initial volume per group
    pub volumes: VolumeConfig,
    /// Distance attenuation
    pub spatial: SpatialConfig,
    /// Output device
    pub backend: AudioBackendConfig,
    /// Per-category asset path overrides
    pub paths: PathOverrides,
}

impl Config for AudioConfig {}

/// Initial volume of each group, `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VolumeConfig {
    /// Master volume
    pub master: f32,
    /// UI volume
    pub ui: f32,
    /// Weapon volume
    pub weapon: f32,
    /// Character volume
    pub character: f32,
    /// Environment volume
    pub environment: f32,
    /// Music volume
    pub music: f32,
}

impl VolumeConfig {
    /// Configured volume of `group`
    pub fn volume(&self, group: VolumeGroup) -> f32 {
        match group {
            VolumeGroup::Master => self.master,
            VolumeGroup::Ui => self.ui,
            VolumeGroup::Weapon => self.weapon,
            VolumeGroup::Character => self.character,
            VolumeGroup::Environment => self.environment,
            VolumeGroup::Music => self.music,
        }
    }
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            master: 1.0,
            ui: 1.0,
            weapon: 1.0,
            character: 1.0,
            environment: 1.0,
            music: 1.0,
        }
    }
}

/// Asset path overrides keyed by event name, one map per category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOverrides {
    /// UI overrides
    pub ui: BTreeMap<String, AssetPath>,
    /// Weapon overrides
    pub weapon: BTreeMap<String, AssetPath>,
    /// Character overrides
    pub character: BTreeMap<String, AssetPath>,
    /// Environment overrides
    pub environment: BTreeMap<String, AssetPath>,
    /// Music overrides
    pub music: BTreeMap<String, AssetPath>,
}
