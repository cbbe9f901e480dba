//! Silent backend
//!
//! Accepts every request while initialized and keeps a record of it until the
//! next [`AudioBackend::update`]. Used on machines without an output device
//! and by tests that need to see what would have played.

use super::{AudioBackend, AudioBackendConfig, VoiceId};
use crate::audio::asset::AudioAsset;
use crate::audio::AudioError;
use crate::foundation::math::Vec3;

/// A playback request seen by the null backend
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceRecord {
    /// Voice assigned to the request
    pub voice: VoiceId,
    /// Final volume after mixing and attenuation
    pub volume: f32,
    /// Emitter position for positional requests
    pub emitter: Option<Vec3>,
    /// Encoded size of the sound, to tell requests apart
    pub bytes: usize,
}

/// Backend that produces no sound
#[derive(Debug, Default)]
pub struct NullBackend {
    initialized: bool,
    next_id: u32,
    voices: Vec<VoiceRecord>,
}

impl NullBackend {
    /// Create an uninitialized null backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received since the last update
    pub fn voices(&self) -> &[VoiceRecord] {
        &self.voices
    }

    fn record(
        &mut self,
        sound: &AudioAsset,
        volume: f32,
        emitter: Option<Vec3>,
    ) -> Result<VoiceId, AudioError> {
        if !self.initialized {
            return Err(AudioError::BackendNotInitialized);
        }

        let voice = VoiceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.voices.push(VoiceRecord {
            voice,
            volume,
            emitter,
            bytes: sound.len(),
        });
        Ok(voice)
    }
}

impl AudioBackend for NullBackend {
    fn initialize(&mut self, _config: &AudioBackendConfig) -> Result<(), AudioError> {
        if !self.initialized {
            self.initialized = true;
            log::info!("Null audio backend initialized; playback is silent");
        }
        Ok(())
    }

    fn shutdown(&mut self) {
        self.voices.clear();
        self.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn update(&mut self) {
        self.voices.clear();
    }

    fn stop_all(&mut self) {
        self.voices.clear();
    }

    fn active_voices(&self) -> usize {
        self.voices.len()
    }

    fn play(&mut self, sound: &AudioAsset, volume: f32) -> Result<VoiceId, AudioError> {
        self.record(sound, volume, None)
    }

    fn play_spatial(
        &mut self,
        sound: &AudioAsset,
        volume: f32,
        emitter: Vec3,
        _listener: Vec3,
    ) -> Result<VoiceId, AudioError> {
        self.record(sound, volume, Some(emitter))
    }
}
