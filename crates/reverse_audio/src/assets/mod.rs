//! Asset management system
//!
//! The [`AssetManager`] is the host-side owner of every decoded sound. It
//! resolves [`AssetPath`]s against a list of search directories, parses the
//! bytes into an [`AudioAsset`] and hands out non-owning [`SoundHandle`]s.
//! Registries only ever see the [`SoundLoader`] trait, so tests and other
//! hosts can swap the storage out.

use crate::audio::asset::AudioAsset;
use crate::audio::SoundHandle;
use crate::foundation::collections::{HandleMap, TypedHandle};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Asset handle type
pub type AssetHandle<T> = TypedHandle<T>;

/// Location of a sound resource, relative to the asset search paths
///
/// The string is opaque to registries. A leading `/` is accepted and ignored
/// when the path is resolved on disk.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetPath(String);

impl AssetPath {
    /// Create a new asset path
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// The path as written in the table
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn relative(&self) -> &str {
        self.0.trim_start_matches('/')
    }
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for AssetPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

/// Asset trait for loadable resources
pub trait Asset: Send + Sync + 'static {
    /// Load asset from raw bytes
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError>
    where
        Self: Sized;
}

/// Asset-load collaborator used by sound registries
///
/// Loading is synchronous. Implementations should be idempotent per path:
/// loading the same path twice yields the same handle.
pub trait SoundLoader {
    /// Load the sound stored at `path`
    fn load_sound(&mut self, path: &AssetPath) -> Result<SoundHandle, AssetError>;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found in any search path
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Invalid asset data
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Unsupported asset format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed owner of loaded sounds
pub struct AssetManager {
    search_paths: Vec<PathBuf>,
    sounds: HandleMap<AudioAsset>,
    by_path: HashMap<AssetPath, SoundHandle>,
    by_file: HashMap<PathBuf, SoundHandle>,
}

impl AssetManager {
    /// Create an asset manager that looks for files under `search_paths`,
    /// in order
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            sounds: HandleMap::new(),
            by_path: HashMap::new(),
            by_file: HashMap::new(),
        }
    }

    /// Directories searched when resolving an [`AssetPath`]
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Find the file backing `path`
    ///
    /// Search paths are tried in order; if none contains the file the path is
    /// tried as given.
    pub fn locate(&self, path: &AssetPath) -> Result<PathBuf, AssetError> {
        let relative = Path::new(path.relative());

        self.search_paths
            .iter()
            .map(|root| root.join(relative))
            .find(|candidate| candidate.is_file())
            .or_else(|| {
                let direct = PathBuf::from(path.as_str());
                direct.is_file().then_some(direct)
            })
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }

    /// Load (or fetch the cached) sound for `path`
    ///
    /// Paths spelled differently but located at the same file share one
    /// handle.
    pub fn load_sound(&mut self, path: &AssetPath) -> Result<SoundHandle, AssetError> {
        if let Some(handle) = self.by_path.get(path) {
            return Ok(*handle);
        }

        let file_path = self.locate(path)?;
        if let Some(&handle) = self.by_file.get(&file_path) {
            self.by_path.insert(path.clone(), handle);
            return Ok(handle);
        }

        let bytes = fs::read(&file_path)?;
        let asset = AudioAsset::from_bytes(&bytes)?;

        log::debug!(
            "Loaded {} ({:?}, {} bytes) from {}",
            path,
            asset.format(),
            asset.len(),
            file_path.display()
        );

        let handle = self.insert_sound(path.clone(), asset);
        self.by_file.insert(file_path, handle);
        Ok(handle)
    }

    /// Register a sound that was produced at runtime rather than read from disk
    pub fn insert_sound(&mut self, path: AssetPath, asset: AudioAsset) -> SoundHandle {
        let handle = SoundHandle::new(self.sounds.insert(asset));
        self.by_path.insert(path, handle);
        handle
    }

    /// Get a sound by handle
    pub fn get(&self, handle: SoundHandle) -> Option<&AudioAsset> {
        self.sounds.get(handle.key())
    }

    /// Number of sounds currently held
    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    /// True when no sound has been loaded
    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

impl SoundLoader for AssetManager {
    fn load_sound(&mut self, path: &AssetPath) -> Result<SoundHandle, AssetError> {
        AssetManager::load_sound(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::categories::UiSound;
    use crate::audio::event::PathTable;
    use crate::audio::registry::SoundRegistry;
    use crate::audio::testing::wav_bytes;

    fn write_sound(root: &Path, relative: &str, bytes: &[u8]) {
        let full = root.join(relative);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, bytes).unwrap();
    }

    #[test]
    fn test_load_from_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = wav_bytes(32);
        write_sound(dir.path(), "audio/ui/hovered.wav", &bytes);

        let mut assets = AssetManager::new([dir.path()]);
        let handle = assets
            .load_sound(&AssetPath::from("audio/ui/hovered.wav"))
            .unwrap();

        assert_eq!(assets.len(), 1);
        assert_eq!(assets.get(handle).unwrap().data(), bytes.as_slice());
    }

    #[test]
    fn test_leading_slash_is_relative_to_search_path() {
        let dir = tempfile::tempdir().unwrap();
        write_sound(dir.path(), "audio/env/rain.wav", &wav_bytes(32));

        let mut assets = AssetManager::new([dir.path()]);
        assert!(assets.load_sound(&AssetPath::from("/audio/env/rain.wav")).is_ok());
    }

    #[test]
    fn test_search_paths_are_tried_in_order() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_sound(second.path(), "a.wav", &wav_bytes(32));
        write_sound(first.path(), "a.wav", b"OggS-first");

        let assets = AssetManager::new([first.path(), second.path()]);
        let found = assets.locate(&AssetPath::from("a.wav")).unwrap();
        assert!(found.starts_with(first.path()));
    }

    #[test]
    fn test_loading_same_path_returns_same_handle() {
        let dir = tempfile::tempdir().unwrap();
        write_sound(dir.path(), "fire.wav", &wav_bytes(32));

        let mut assets = AssetManager::new([dir.path()]);
        let path = AssetPath::from("fire.wav");
        let first = assets.load_sound(&path).unwrap();
        let second = assets.load_sound(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(assets.len(), 1);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetManager::new([dir.path()]);

        let result = assets.load_sound(&AssetPath::from("audio/missing.wav"));
        assert!(matches!(result, Err(AssetError::NotFound(path)) if path == "audio/missing.wav"));
        assert!(assets.is_empty());
    }

    #[test]
    fn test_unknown_bytes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_sound(dir.path(), "noise.bin", b"ABCDEFGH");

        let mut assets = AssetManager::new([dir.path()]);
        let result = assets.load_sound(&AssetPath::from("noise.bin"));
        assert!(matches!(result, Err(AssetError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_non_wave_riff_does_not_resolve() {
        crate::foundation::logging::init_for_tests();
        let dir = tempfile::tempdir().unwrap();
        write_sound(dir.path(), "audio/ui/hovered.wav", b"RIFF\x10\x00\x00\x00AVI LIST garbage");

        let mut assets = AssetManager::new([dir.path()]);
        let table = PathTable::new().with(UiSound::Hovered, "audio/ui/hovered.wav");
        let registry = SoundRegistry::load(&table, &mut assets);

        assert!(!registry.resolve(UiSound::Hovered).unwrap().is_resolved());
        assert_eq!(registry.report().failed, 1);
        assert!(assets.is_empty());
    }

    #[test]
    fn test_same_file_through_different_spellings_shares_handle() {
        let dir = tempfile::tempdir().unwrap();
        write_sound(dir.path(), "a.wav", &wav_bytes(32));

        let mut assets = AssetManager::new([dir.path()]);
        let rooted = assets.load_sound(&AssetPath::from("/a.wav")).unwrap();
        let relative = assets.load_sound(&AssetPath::from("a.wav")).unwrap();

        assert_eq!(rooted, relative);
        assert_eq!(assets.len(), 1);
    }
}
