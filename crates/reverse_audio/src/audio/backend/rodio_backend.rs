//! Rodio audio backend implementation
//!
//! Uses the Rodio library for cross-platform audio playback.
//! Rodio is pure Rust and supports WAV, OGG Vorbis, MP3, and FLAC formats.
//!
//! # Example
//!
//! ```no_run
//! use reverse_audio::audio::asset::AudioAsset;
//! use reverse_audio::audio::backend::{AudioBackend, AudioBackendConfig, RodioBackend};
//! use reverse_audio::assets::Asset;
//!
//! let mut backend = RodioBackend::new();
//! backend.initialize(&AudioBackendConfig::default()).unwrap();
//!
//! let bytes = std::fs::read("resources/audio/ui/hovered.wav").unwrap();
//! let sound = AudioAsset::from_bytes(&bytes).unwrap();
//! backend.play(&sound, 0.8).unwrap();
//!
//! // Once per frame
//! backend.update();
//! ```

use super::{AudioBackend, AudioBackendConfig, VoiceId};
use crate::audio::asset::AudioAsset;
use crate::audio::AudioError;
use crate::foundation::math::Vec3;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, SpatialSink};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;

/// Half the distance between the listener's ears, in world units
const EAR_OFFSET: f32 = 0.1;

fn to_array(v: &Vec3) -> [f32; 3] {
    [v.x, v.y, v.z]
}

enum Voice {
    Flat(Sink),
    Spatial(SpatialSink),
}

impl Voice {
    fn finished(&self) -> bool {
        match self {
            Self::Flat(sink) => sink.empty(),
            Self::Spatial(sink) => sink.empty(),
        }
    }

    fn stop(&self) {
        match self {
            Self::Flat(sink) => sink.stop(),
            Self::Spatial(sink) => sink.stop(),
        }
    }
}

/// Rodio-based audio backend
pub struct RodioBackend {
    /// Audio output stream (must be kept alive)
    _output_stream: Option<OutputStream>,
    /// Output stream handle for creating sinks
    stream_handle: Option<OutputStreamHandle>,
    /// Voices that may still be playing
    voices: HashMap<VoiceId, Voice>,
    next_id: u32,
    initialized: bool,
}

impl RodioBackend {
    /// Create a new, uninitialized Rodio backend
    pub fn new() -> Self {
        Self {
            _output_stream: None,
            stream_handle: None,
            voices: HashMap::new(),
            next_id: 0,
            initialized: false,
        }
    }

    fn next_voice(&mut self) -> VoiceId {
        let id = VoiceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn stream(&self) -> Result<&OutputStreamHandle, AudioError> {
        self.stream_handle
            .as_ref()
            .ok_or(AudioError::BackendNotInitialized)
    }

    fn decode(sound: &AudioAsset) -> Result<Decoder<Cursor<Arc<[u8]>>>, AudioError> {
        Decoder::new(Cursor::new(sound.shared_data()))
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to decode audio: {e}")))
    }

    fn track(&mut self, voice: Voice) -> VoiceId {
        let id = self.next_voice();
        self.voices.insert(id, voice);
        id
    }
}

impl AudioBackend for RodioBackend {
    fn initialize(&mut self, _config: &AudioBackendConfig) -> Result<(), AudioError> {
        if self.initialized {
            return Ok(());
        }

        let (stream, stream_handle) = OutputStream::try_default().map_err(|e| {
            AudioError::BackendInitFailed(format!("Failed to create audio output: {e}"))
        })?;

        self._output_stream = Some(stream);
        self.stream_handle = Some(stream_handle);
        self.initialized = true;

        log::info!("Rodio audio backend initialized");
        Ok(())
    }

    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }

        self.stop_all();
        self.stream_handle = None;
        self._output_stream = None;
        self.initialized = false;

        log::info!("Rodio audio backend shutdown");
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }

    fn update(&mut self) {
        self.voices.retain(|_, voice| !voice.finished());
    }

    fn stop_all(&mut self) {
        for (_, voice) in self.voices.drain() {
            voice.stop();
        }
    }

    fn active_voices(&self) -> usize {
        self.voices.len()
    }

    fn play(&mut self, sound: &AudioAsset, volume: f32) -> Result<VoiceId, AudioError> {
        let sink = Sink::try_new(self.stream()?)
            .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create sink: {e}")))?;

        sink.set_volume(volume);
        sink.append(Self::decode(sound)?);

        Ok(self.track(Voice::Flat(sink)))
    }

    fn play_spatial(
        &mut self,
        sound: &AudioAsset,
        volume: f32,
        emitter: Vec3,
        listener: Vec3,
    ) -> Result<VoiceId, AudioError> {
        let left_ear = listener - Vec3::x() * EAR_OFFSET;
        let right_ear = listener + Vec3::x() * EAR_OFFSET;

        let sink = SpatialSink::try_new(
            self.stream()?,
            to_array(&emitter),
            to_array(&left_ear),
            to_array(&right_ear),
        )
        .map_err(|e| AudioError::PlaybackFailed(format!("Failed to create spatial sink: {e}")))?;

        sink.set_volume(volume);
        sink.append(Self::decode(sound)?);

        Ok(self.track(Voice::Spatial(sink)))
    }
}

impl Default for RodioBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RodioBackend {
    fn drop(&mut self) {
        self.shutdown();
    }
}
