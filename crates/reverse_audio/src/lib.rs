//! # Reverse Audio
//!
//! Category sound managers for a game: each sound category (UI, weapons,
//! character movement, environment, music) is a closed set of events mapped
//! to asset paths, loaded once at startup and played by event id.
//!
//! ## Features
//!
//! - **Load once**: every registry resolves its paths at construction and
//!   never retries
//! - **Typed events**: one enum per category, stable names for config files
//! - **Graceful failure**: missing assets play nothing and are reported
//! - **Mixer and spatial model**: per-category volume groups and distance
//!   attenuation
//! - **Backends**: rodio output, or a silent backend for headless hosts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reverse_audio::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AudioConfig::load_or_default("audio.toml")?;
//!     let mut engine = AudioEngine::from_config(&config);
//!     let mut managers = AudioManagers::load(&config, &mut engine)?;
//!     managers.set_world_context(&PlaybackContext::new("main-menu"));
//!
//!     managers.music.play_main_menu(&mut engine);
//!     managers.ui.play_hovered(&mut engine);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod assets;
pub mod audio;
pub mod config;
pub mod foundation;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{AssetError, AssetManager, AssetPath, SoundLoader},
        audio::{
            categories::{
                AudioManagers, CharacterAudio, CharacterSound, EnvironmentAudio, EnvironmentSound,
                MusicAudio, MusicSound, PhysicalSurface, UiAudio, UiSound, WeaponAudio, WeaponSound,
            },
            AudioEngine, AudioError, BuildProfile, CategoryManager, PathTable, PlaybackContext,
            SoundEvent, SoundHandle, SoundPlayer, VolumeGroup,
        },
        config::{AudioConfig, Config, ConfigError},
        foundation::math::Vec3,
    };
}
