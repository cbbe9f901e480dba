//! Audio system
//!
//! Layout, from the bottom up:
//!
//! - [`asset`]: encoded sound data owned by the asset manager
//! - [`backend`]: output devices (rodio, or a silent backend)
//! - [`mixer`] and [`spatial`]: volume groups and distance attenuation
//! - [`engine`]: [`AudioEngine`], the host that loads and plays sounds
//! - [`event`] and [`registry`]: category id-sets, path tables and the
//!   load-once [`SoundRegistry`]
//! - [`manager`] and [`categories`]: per-category façades that resolve an
//!   event and forward it to a [`SoundPlayer`]

pub mod asset;
pub mod backend;
pub mod categories;
pub mod context;
pub mod diagnostics;
pub mod engine;
pub mod event;
pub mod manager;
pub mod mixer;
pub mod registry;
pub mod spatial;

#[cfg(test)]
pub(crate) mod testing;

use crate::assets::{AssetError, AssetHandle};
use crate::foundation::math::Vec3;
use thiserror::Error;

pub use asset::{AudioAsset, AudioFormat};
pub use categories::AudioManagers;
pub use context::PlaybackContext;
pub use diagnostics::{BuildProfile, DiagnosticsConfig};
pub use engine::AudioEngine;
pub use event::{EventEntry, PathTable, SoundCategory, SoundEvent};
pub use manager::CategoryManager;
pub use mixer::{MixerSystem, VolumeGroup};
pub use registry::{LoadReport, RegistryError, Resolution, SoundRegistry};

/// Non-owning reference to a sound held by the asset manager
pub type SoundHandle = AssetHandle<AudioAsset>;

/// Playback collaborator
///
/// Fire-and-forget: implementations start playback and return. Completion,
/// looping and cancellation are not tracked.
pub trait SoundPlayer {
    /// Play `sound` without positioning
    fn play_2d(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
    ) -> Result<(), AudioError>;

    /// Play `sound` emitted from `position` in the context's world
    fn play_at(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
        position: Vec3,
    ) -> Result<(), AudioError>;
}

/// Audio system errors
#[derive(Error, Debug)]
pub enum AudioError {
    /// The event is known but its asset failed to load
    #[error("{category} sound `{name}` has no loaded asset")]
    MissingAsset {
        /// Category of the event
        category: SoundCategory,
        /// Event name
        name: &'static str,
    },

    /// Playback was requested without a world context
    #[error("no playback context is set")]
    InvalidContext,

    /// Backend not initialized
    #[error("Audio backend not initialized")]
    BackendNotInitialized,

    /// Backend initialization failed
    #[error("Failed to initialize audio backend: {0}")]
    BackendInitFailed(String),

    /// Sound playback failed
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// The handle does not refer to a loaded sound
    #[error("Invalid sound handle")]
    InvalidHandle,

    /// Asset loading error
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),
}
