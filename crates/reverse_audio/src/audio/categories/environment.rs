//! Weather and ambience

use crate::audio::event::{EventEntry, SoundCategory, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::SoundPlayer;
use crate::foundation::math::Vec3;

/// Environment sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvironmentSound {
    /// Wind gusts
    Wind,
    /// Rainfall
    Rain,
    /// A thunder clap
    Thunder,
    /// Forest ambience bed
    ForestAmbient,
}

impl SoundEvent for EnvironmentSound {
    const CATEGORY: SoundCategory = SoundCategory::Environment;

    const TABLE: &'static [EventEntry<Self>] = &[
        EventEntry::new(Self::Wind, "wind", "audio/environment/wind.ogg"),
        EventEntry::new(Self::Rain, "rain", "audio/environment/rain.ogg"),
        EventEntry::new(Self::Thunder, "thunder", "audio/environment/thunder.ogg"),
        EventEntry::new(
            Self::ForestAmbient,
            "forest-ambient",
            "audio/environment/forest_ambient.ogg",
        ),
    ];
}

/// Environment sound manager
pub type EnvironmentAudio = CategoryManager<EnvironmentSound>;

impl CategoryManager<EnvironmentSound> {
    /// Play wind
    pub fn play_wind<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, EnvironmentSound::Wind)
    }

    /// Play rain
    pub fn play_rain<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, EnvironmentSound::Rain)
    }

    /// Play thunder without a source position
    pub fn play_thunder<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, EnvironmentSound::Thunder)
    }

    /// Play thunder striking at `position`
    pub fn play_thunder_at<P: SoundPlayer + ?Sized>(
        &self,
        player: &mut P,
        position: Vec3,
    ) -> bool {
        self.play_at(player, EnvironmentSound::Thunder, position)
    }

    /// Play the forest ambience bed
    pub fn play_forest_ambient<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, EnvironmentSound::ForestAmbient)
    }
}
