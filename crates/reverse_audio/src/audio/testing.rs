//! Test doubles for the asset-load and playback collaborators

use crate::assets::{AssetError, AssetPath, SoundLoader};
use crate::audio::{AudioError, PlaybackContext, SoundHandle, SoundPlayer, VolumeGroup};
use crate::foundation::collections::HandleMap;
use crate::foundation::math::Vec3;
use std::collections::{HashMap, HashSet};

/// Loader that succeeds for every path except the ones it was told to fail
#[derive(Default)]
pub struct FakeLoader {
    keys: HandleMap<()>,
    handles: HashMap<String, SoundHandle>,
    failing: HashSet<String>,
    requested: Vec<String>,
}

impl FakeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            failing: paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn handle_for(&self, path: &str) -> Option<SoundHandle> {
        self.handles.get(path).copied()
    }

    pub fn requested(&self) -> &[String] {
        &self.requested
    }
}

impl SoundLoader for FakeLoader {
    fn load_sound(&mut self, path: &AssetPath) -> Result<SoundHandle, AssetError> {
        self.requested.push(path.as_str().to_string());

        if self.failing.contains(path.as_str()) {
            return Err(AssetError::NotFound(path.to_string()));
        }

        let keys = &mut self.keys;
        let handle = *self
            .handles
            .entry(path.as_str().to_string())
            .or_insert_with(|| SoundHandle::new(keys.insert(())));
        Ok(handle)
    }
}

/// One call received by [`RecordingPlayer`]
#[derive(Debug, Clone, PartialEq)]
pub struct PlayCall {
    pub world: String,
    pub sound: SoundHandle,
    pub group: VolumeGroup,
    pub position: Option<Vec3>,
}

/// Player that records calls and optionally fails them
#[derive(Default)]
pub struct RecordingPlayer {
    pub calls: Vec<PlayCall>,
    pub fail: bool,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            calls: Vec::new(),
            fail: true,
        }
    }

    fn record(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
        position: Option<Vec3>,
    ) -> Result<(), AudioError> {
        if self.fail {
            return Err(AudioError::PlaybackFailed("device lost".to_string()));
        }
        self.calls.push(PlayCall {
            world: context.world().to_string(),
            sound,
            group,
            position,
        });
        Ok(())
    }
}

impl SoundPlayer for RecordingPlayer {
    fn play_2d(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
    ) -> Result<(), AudioError> {
        self.record(context, sound, group, None)
    }

    fn play_at(
        &mut self,
        context: &PlaybackContext,
        sound: SoundHandle,
        group: VolumeGroup,
        position: Vec3,
    ) -> Result<(), AudioError> {
        self.record(context, sound, group, Some(position))
    }
}

/// A well-formed 16-bit mono PCM WAV file holding `samples` silent samples
pub fn wav_bytes(samples: usize) -> Vec<u8> {
    let data_len = u32::try_from(samples * 2).unwrap();
    let mut bytes = Vec::with_capacity(44 + samples * 2);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&8000u32.to_le_bytes());
    bytes.extend_from_slice(&16000u32.to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.resize(bytes.len() + samples * 2, 0);
    bytes
}
