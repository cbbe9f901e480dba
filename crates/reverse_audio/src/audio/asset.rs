//! Encoded sound data owned by the asset manager
//!
//! Sounds are kept in their encoded form and decoded by the backend at play
//! time. The bytes sit behind an `Arc` so a backend can hand a cheap clone
//! to its decoder for every playback request. With the `rodio` feature,
//! [`Asset::from_bytes`] also opens a decoder once so files that only look
//! like audio are rejected at load time.

use crate::assets::{Asset, AssetError};
use std::sync::Arc;

/// Audio container formats recognized from their magic bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// RIFF/WAVE
    Wav,
    /// Ogg container (Vorbis)
    Ogg,
    /// MPEG layer III, with or without an ID3 tag
    Mp3,
    /// Free Lossless Audio Codec
    Flac,
}

impl AudioFormat {
    /// Detect the format from the first bytes of a file
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'A', b'V', b'E', ..] => Some(Self::Wav),
            [b'O', b'g', b'g', b'S', ..] => Some(Self::Ogg),
            [b'f', b'L', b'a', b'C', ..] => Some(Self::Flac),
            [b'I', b'D', b'3', ..] | [0xFF, 0xFB | 0xFA | 0xF3 | 0xF2, ..] => Some(Self::Mp3),
            _ => None,
        }
    }
}

/// A loaded, ready-to-play sound
#[derive(Debug, Clone)]
pub struct AudioAsset {
    data: Arc<[u8]>,
    format: AudioFormat,
}

impl AudioAsset {
    /// Wrap already-validated encoded bytes
    pub fn new(data: impl Into<Arc<[u8]>>, format: AudioFormat) -> Self {
        Self {
            data: data.into(),
            format,
        }
    }

    /// Encoded bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Shared encoded bytes, for decoders that need to own their input
    pub fn shared_data(&self) -> Arc<[u8]> {
        Arc::clone(&self.data)
    }

    /// Container format
    pub fn format(&self) -> AudioFormat {
        self.format
    }

    /// Size of the encoded data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-length asset
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Asset for AudioAsset {
    fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::InvalidData("Empty audio file".to_string()));
        }

        let format = AudioFormat::detect(bytes).ok_or_else(|| {
            AssetError::UnsupportedFormat(format!(
                "unrecognized audio header {:02X?}",
                &bytes[..bytes.len().min(12)]
            ))
        })?;

        let data: Arc<[u8]> = bytes.into();
        #[cfg(feature = "rodio")]
        validate(&data)?;

        Ok(Self { data, format })
    }
}

/// Open a decoder over `data` and drop it; only the header is read
#[cfg(feature = "rodio")]
fn validate(data: &Arc<[u8]>) -> Result<(), AssetError> {
    rodio::Decoder::new(std::io::Cursor::new(Arc::clone(data)))
        .map(drop)
        .map_err(|e| AssetError::InvalidData(format!("undecodable audio: {e}")))
}
