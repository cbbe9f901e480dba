//! Audio engine
//!
//! Owns the asset manager, the output backend, the mixer and the spatial
//! model. It is both collaborators a category manager needs: the
//! [`SoundLoader`] its registry is loaded through and the [`SoundPlayer`]
//! requests are forwarded to.

use crate::assets::{AssetError, AssetManager, AssetPath, SoundLoader};
use crate::audio::backend::{create_backend, AudioBackend, NullBackend};
use crate::audio::mixer::{MixerSystem, VolumeGroup};
use crate::audio::spatial::SpatialAudio;
use crate::audio::{AudioError, PlaybackContext, SoundHandle, SoundPlayer};
use crate::config::AudioConfig;
use crate::foundation::math::Vec3;

/// Loads sounds from disk and plays them through a backend
pub struct AudioEngine<B: AudioBackend = Box<dyn AudioBackend>> {
    assets: AssetManager,
    backend: B,
    mixer: MixerSystem,
    spatial: SpatialAudio,
}

impl AudioEngine {
    /// Build an engine from config
    ///
    /// If the configured backend cannot be opened (no output device, or
    /// built without it) the engine falls back to a silent backend so the
    /// game keeps running.
    pub fn from_config(config: &AudioConfig) -> Self {
        let backend = create_backend(&config.backend).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to silent audio");
            let mut null: Box<dyn AudioBackend> = Box::new(NullBackend::new());
            if let Err(err) = null.initialize(&config.backend) {
                log::error!("Silent audio backend failed to start: {err}");
            }
            null
        });

        let engine = Self::new(
            AssetManager::new(&config.search_paths),
            backend,
            MixerSystem::from_config(&config.volumes),
            SpatialAudio::new(config.spatial.clone()),
        );
        log::info!(
            "Audio engine ready ({} search paths, backend initialized: {})",
            engine.assets.search_paths().len(),
            engine.backend.is_initialized()
        );
        engine
    }
}

impl<B: AudioBackend> AudioEngine<B> {
    /// Assemble an engine from its parts
    pub fn new(
        assets: AssetManager,
        backend: B,
        mixer: MixerSystem,
        spatial: SpatialAudio,
    ) -> Self {
        Self {
            assets,
            backend,
            mixer,
            spatial,
        }
    }

    /// Loaded sounds
    pub fn assets(&self) -> &AssetManager {
        &self.assets
    }

    /// Mutable access to loaded sounds
    pub fn assets_mut(&mut self) -> &mut AssetManager {
        &mut self.assets
    }

    /// Volume groups
    pub fn mixer(&self) -> &MixerSystem {
        &self.mixer
    }

    /// Mutable access to volume groups
    pub fn mixer_mut(&mut self) -> &mut MixerSystem {
        &mut self.mixer
    }

    /// Output backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Per-frame housekeeping; drops finished voices
    pub fn update(&mut self) {
        self.backend.update();
    }

    /// Stop everything that is playing
    pub fn stop_all(&mut self) {
        self.backend.stop_all();
    }
}

impl<B: AudioBackend> SoundLoader for AudioEngine<B> {
    fn load_sound(&mut self, path: &AssetPath) -> Result<SoundHandle, AssetError> {
        self.assets.load_sound(path)
    }
}

impl<B: AudioBackend> SoundPlayer for AudioEngine<B> {
    fn play_2d(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
    ) -> Result<(), AudioError> {
        let volume = self.mixer.effective_volume(group);
        if volume <= 0.0 {
            log::debug!("Skipping {group} sound in `{}`: silent", context.world());
            return Ok(());
        }

        let asset = self.assets.get(sound).ok_or(AudioError::InvalidHandle)?;
        let voice = self.backend.play(asset, volume)?;
        log::debug!("{group} voice {} started in `{}`", voice.0, context.world());
        Ok(())
    }

    fn play_at(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
        position: Vec3,
    ) -> Result<(), AudioError> {
        let listener = context.listener();
        let volume = self.mixer.effective_volume(group)
            * self.spatial.calculate_attenuation(&listener, &position);
        if volume <= 0.0 {
            log::debug!("Skipping {group} sound in `{}`: silent or out of range", context.world());
            return Ok(());
        }

        let asset = self.assets.get(sound).ok_or(AudioError::InvalidHandle)?;
        let voice = self.backend.play_spatial(asset, volume, position, listener)?;
        log::debug!("{group} voice {} started at {position:?} in `{}`", voice.0, context.world());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::asset::{AudioAsset, AudioFormat};
    use crate::audio::backend::{AudioBackendConfig, BackendKind};
    use crate::audio::spatial::SpatialConfig;
    use approx::assert_relative_eq;

    fn engine() -> AudioEngine<NullBackend> {
        let mut backend = NullBackend::new();
        backend.initialize(&AudioBackendConfig::default()).unwrap();
        AudioEngine::new(
            AssetManager::new(Vec::<std::path::PathBuf>::new()),
            backend,
            MixerSystem::new(),
            SpatialAudio::new(SpatialConfig {
                max_distance: 100.0,
                reference_distance: 10.0,
                falloff_exponent: 1.0,
            }),
        )
    }

    fn beep(engine: &mut AudioEngine<NullBackend>) -> SoundHandle {
        engine.assets_mut().insert_sound(
            AssetPath::from("beep.wav"),
            AudioAsset::new(b"RIFF....WAVE".to_vec(), AudioFormat::Wav),
        )
    }

    #[test]
    fn test_play_2d_uses_mixed_volume() {
        let mut engine = engine();
        let sound = beep(&mut engine);
        engine.mixer_mut().set_group_volume(VolumeGroup::Master, 0.5);
        engine.mixer_mut().set_group_volume(VolumeGroup::Ui, 0.5);

        engine
            .play_2d(&PlaybackContext::new("menu"), sound, VolumeGroup::Ui)
            .unwrap();

        let voices = engine.backend().voices();
        assert_eq!(voices.len(), 1);
        assert_relative_eq!(voices[0].volume, 0.25);
        assert_eq!(voices[0].emitter, None);
    }

    #[test]
    fn test_muted_group_is_skipped() {
        let mut engine = engine();
        let sound = beep(&mut engine);
        engine.mixer_mut().mute_group(VolumeGroup::Music);

        engine
            .play_2d(&PlaybackContext::new("menu"), sound, VolumeGroup::Music)
            .unwrap();
        assert!(engine.backend().voices().is_empty());
    }

    #[test]
    fn test_play_at_attenuates_by_listener_distance() {
        let mut engine = engine();
        let sound = beep(&mut engine);
        let context = PlaybackContext::new("field").with_listener(Vec3::new(0.0, 0.0, 0.0));

        engine
            .play_at(&context, sound, VolumeGroup::Environment, Vec3::new(20.0, 0.0, 0.0))
            .unwrap();
        engine
            .play_at(&context, sound, VolumeGroup::Environment, Vec3::new(500.0, 0.0, 0.0))
            .unwrap();

        let voices = engine.backend().voices();
        assert_eq!(voices.len(), 1);
        assert!(voices[0].volume < 1.0);
        assert_eq!(voices[0].emitter, Some(Vec3::new(20.0, 0.0, 0.0)));
    }

    #[test]
    fn test_handle_from_another_manager_is_rejected() {
        let mut engine = engine();
        beep(&mut engine);
        let mut other = AssetManager::new(Vec::<std::path::PathBuf>::new());
        for name in ["a.wav", "b.wav"] {
            other.insert_sound(
                AssetPath::from(name),
                AudioAsset::new(b"RIFF".to_vec(), AudioFormat::Wav),
            );
        }
        let stray = other.load_sound(&AssetPath::from("b.wav")).unwrap();

        let err = engine
            .play_2d(&PlaybackContext::new("menu"), stray, VolumeGroup::Ui)
            .unwrap_err();
        assert!(matches!(err, AudioError::InvalidHandle));
    }

    #[test]
    fn test_update_clears_finished_voices() {
        let mut engine = engine();
        let sound = beep(&mut engine);
        engine
            .play_2d(&PlaybackContext::new("menu"), sound, VolumeGroup::Ui)
            .unwrap();
        engine.update();
        assert_eq!(engine.backend().active_voices(), 0);
    }

    fn config_with(kind: BackendKind) -> AudioConfig {
        crate::foundation::logging::init_for_tests();
        let mut config = AudioConfig::default();
        config.backend.kind = kind;
        config
    }

    #[test]
    fn test_from_config_with_null_backend_plays() {
        let mut engine = AudioEngine::from_config(&config_with(BackendKind::Null));
        assert!(engine.backend().is_initialized());

        let sound = engine.assets_mut().insert_sound(
            AssetPath::from("beep.wav"),
            AudioAsset::new(b"RIFF....WAVE".to_vec(), AudioFormat::Wav),
        );
        engine
            .play_2d(&PlaybackContext::new("menu"), sound, VolumeGroup::Ui)
            .unwrap();
        assert_eq!(engine.backend().active_voices(), 1);
    }

    #[cfg(not(feature = "rodio"))]
    #[test]
    fn test_from_config_without_rodio_falls_back_to_silent_backend() {
        let engine = AudioEngine::from_config(&config_with(BackendKind::Rodio));
        assert!(engine.backend().is_initialized());
        assert_eq!(engine.backend().active_voices(), 0);
    }
}
