//! Audio backend implementations
//!
//! Platform-independent abstraction over the device that turns decoded
//! samples into sound. Playback is fire-and-forget: a voice id is returned
//! for bookkeeping only and finished voices are dropped on [`AudioBackend::update`].

pub mod null_backend;
#[cfg(feature = "rodio")]
pub mod rodio_backend;

use crate::audio::asset::AudioAsset;
use crate::audio::AudioError;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

pub use null_backend::NullBackend;
#[cfg(feature = "rodio")]
pub use rodio_backend::RodioBackend;

/// Identifier of one playback request inside a backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceId(pub u32);

/// Audio backend trait for platform abstraction
///
/// Not `Send + Sync`: the backend lives on the game thread next to the
/// managers that drive it.
pub trait AudioBackend {
    /// Initialize the audio backend
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError>;

    /// Shutdown the audio backend
    fn shutdown(&mut self);

    /// Check if backend is initialized
    fn is_initialized(&self) -> bool;

    /// Drop voices that finished playing
    fn update(&mut self);

    /// Stop all playing sounds
    fn stop_all(&mut self);

    /// Number of voices still tracked
    fn active_voices(&self) -> usize;

    /// Play a sound without positioning
    fn play(&mut self, sound: &AudioAsset, volume: f32) -> Result<VoiceId, AudioError>;

    /// Play a sound emitted at `emitter`, heard from `listener`
    fn play_spatial(
        &mut self,
        sound: &AudioAsset,
        volume: f32,
        emitter: Vec3,
        listener: Vec3,
    ) -> Result<VoiceId, AudioError>;
}

impl<B: AudioBackend + ?Sized> AudioBackend for Box<B> {
    fn initialize(&mut self, config: &AudioBackendConfig) -> Result<(), AudioError> {
        (**self).initialize(config)
    }

    fn shutdown(&mut self) {
        (**self).shutdown();
    }

    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }

    fn update(&mut self) {
        (**self).update();
    }

    fn stop_all(&mut self) {
        (**self).stop_all();
    }

    fn active_voices(&self) -> usize {
        (**self).active_voices()
    }

    fn play(&mut self, sound: &AudioAsset, volume: f32) -> Result<VoiceId, AudioError> {
        (**self).play(sound, volume)
    }

    fn play_spatial(
        &mut self,
        sound: &AudioAsset,
        volume: f32,
        emitter: Vec3,
        listener: Vec3,
    ) -> Result<VoiceId, AudioError> {
        (**self).play_spatial(sound, volume, emitter, listener)
    }
}

/// Which backend to create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Default output device through rodio
    Rodio,
    /// No device; requests are accepted and discarded
    Null,
}

/// Configuration for audio backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioBackendConfig {
    /// Backend to create
    pub kind: BackendKind,
    /// Sample rate (e.g., 44100, 48000)
    pub sample_rate: u32,
    /// Number of output channels (1=mono, 2=stereo)
    pub channels: u16,
    /// Buffer size for audio processing
    pub buffer_size: usize,
}

impl Default for AudioBackendConfig {
    fn default() -> Self {
        Self {
            kind: if cfg!(feature = "rodio") {
                BackendKind::Rodio
            } else {
                BackendKind::Null
            },
            sample_rate: 44100,
            channels: 2,
            buffer_size: 4096,
        }
    }
}

/// Create and initialize the backend named by `config.kind`
pub fn create_backend(config: &AudioBackendConfig) -> Result<Box<dyn AudioBackend>, AudioError> {
    let mut backend: Box<dyn AudioBackend> = match config.kind {
        #[cfg(feature = "rodio")]
        BackendKind::Rodio => Box::new(RodioBackend::new()),
        #[cfg(not(feature = "rodio"))]
        BackendKind::Rodio => {
            return Err(AudioError::BackendInitFailed(
                "built without the `rodio` feature".to_string(),
            ))
        }
        BackendKind::Null => Box::new(NullBackend::new()),
    };
    backend.initialize(config)?;
    Ok(backend)
}
