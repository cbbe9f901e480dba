//! Footsteps, jumps and landings
//!
//! Every movement sound is keyed by the surface under the character, so a
//! surface can be given its own asset without touching gameplay code.

use crate::audio::event::{EventEntry, SoundCategory, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::SoundPlayer;
use crate::foundation::math::Vec3;
use serde::{Deserialize, Serialize};

/// Material under a character's feet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhysicalSurface {
    /// Anything without a dedicated sound
    #[default]
    Default,
    /// Grass and foliage
    Grass,
    /// Dirt, mud and gravel
    Dirt,
    /// Stone, rock and concrete
    Stone,
    /// Wooden floors and planks
    Wood,
    /// Metal grates and plates
    Metal,
    /// Shallow water
    Water,
}

/// Character movement events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSound {
    /// One footstep
    Footstep(PhysicalSurface),
    /// Take-off
    Jump(PhysicalSurface),
    /// Touch-down after a jump or fall
    Land(PhysicalSurface),
}

impl SoundEvent for CharacterSound {
    const CATEGORY: SoundCategory = SoundCategory::Character;

    const TABLE: &'static [EventEntry<Self>] = &[
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Default),
            "footstep-default",
            "audio/character/footstep/default.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Grass),
            "footstep-grass",
            "audio/character/footstep/grass.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Dirt),
            "footstep-dirt",
            "audio/character/footstep/dirt.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Stone),
            "footstep-stone",
            "audio/character/footstep/stone.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Wood),
            "footstep-wood",
            "audio/character/footstep/wood.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Metal),
            "footstep-metal",
            "audio/character/footstep/metal.wav",
        ),
        EventEntry::new(
            CharacterSound::Footstep(PhysicalSurface::Water),
            "footstep-water",
            "audio/character/footstep/water.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Default),
            "jump-default",
            "audio/character/jump/default.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Grass),
            "jump-grass",
            "audio/character/jump/grass.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Dirt),
            "jump-dirt",
            "audio/character/jump/dirt.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Stone),
            "jump-stone",
            "audio/character/jump/stone.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Wood),
            "jump-wood",
            "audio/character/jump/wood.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Metal),
            "jump-metal",
            "audio/character/jump/metal.wav",
        ),
        EventEntry::new(
            CharacterSound::Jump(PhysicalSurface::Water),
            "jump-water",
            "audio/character/jump/water.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Default),
            "land-default",
            "audio/character/land/default.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Grass),
            "land-grass",
            "audio/character/land/grass.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Dirt),
            "land-dirt",
            "audio/character/land/dirt.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Stone),
            "land-stone",
            "audio/character/land/stone.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Wood),
            "land-wood",
            "audio/character/land/wood.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Metal),
            "land-metal",
            "audio/character/land/metal.wav",
        ),
        EventEntry::new(
            CharacterSound::Land(PhysicalSurface::Water),
            "land-water",
            "audio/character/land/water.wav",
        ),
    ];
}

/// Character sound manager
pub type CharacterAudio = CategoryManager<CharacterSound>;

impl CategoryManager<CharacterSound> {
    /// Play a footstep on `surface` at `position`
    pub fn play_footstep<P: SoundPlayer + ?Sized>(
        &self,
        player: &mut P,
        surface: PhysicalSurface,
        position: Vec3,
    ) -> bool {
        self.play_at(player, CharacterSound::Footstep(surface), position)
    }

    /// Play a jump off `surface` at `position`
    pub fn play_jump<P: SoundPlayer + ?Sized>(
        &self,
        player: &mut P,
        surface: PhysicalSurface,
        position: Vec3,
    ) -> bool {
        self.play_at(player, CharacterSound::Jump(surface), position)
    }

    /// Play a landing on `surface` at `position`
    pub fn play_land<P: SoundPlayer + ?Sized>(
        &self,
        player: &mut P,
        surface: PhysicalSurface,
        position: Vec3,
    ) -> bool {
        self.play_at(player, CharacterSound::Land(surface), position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::diagnostics::{BuildProfile, DiagnosticsConfig};
    use crate::audio::event::PathTable;
    use crate::audio::mixer::VolumeGroup;
    use crate::audio::testing::{FakeLoader, RecordingPlayer};
    use crate::audio::PlaybackContext;

    #[test]
    fn test_surface_names_round_trip() {
        assert_eq!(CharacterSound::Footstep(PhysicalSurface::Grass).name(), "footstep-grass");
        assert_eq!(
            CharacterSound::from_name("land-metal"),
            Some(CharacterSound::Land(PhysicalSurface::Metal))
        );
        assert_eq!(CharacterSound::TABLE.len(), 21);
    }

    #[test]
    fn test_footstep_is_positional_and_surface_specific() {
        let mut loader = FakeLoader::new();
        let mut characters =
            CharacterAudio::load_defaults(&mut loader, DiagnosticsConfig::default());
        characters.set_world_context(PlaybackContext::new("forest"));
        let mut player = RecordingPlayer::new();
        let feet = Vec3::new(3.0, 0.0, -2.0);

        assert!(characters.play_footstep(&mut player, PhysicalSurface::Wood, feet));

        let call = &player.calls[0];
        assert_eq!(call.group, VolumeGroup::Character);
        assert_eq!(call.position, Some(feet));
        assert_eq!(Some(call.sound), loader.handle_for("audio/character/footstep/wood.wav"));
    }

    #[test]
    fn test_surface_outside_table_is_rejected() {
        let mut loader = FakeLoader::new();
        let table =
            PathTable::new().with(CharacterSound::Jump(PhysicalSurface::Default), "jump.wav");
        let diagnostics = DiagnosticsConfig {
            profile: BuildProfile::Development,
            fatal_missing_assets: false,
        };
        let mut characters = CharacterAudio::load(&table, &mut loader, diagnostics);
        characters.set_world_context(PlaybackContext::new("forest"));
        let mut player = RecordingPlayer::new();

        assert!(characters.play_jump(&mut player, PhysicalSurface::Default, Vec3::zeros()));
        assert!(!characters.play_jump(&mut player, PhysicalSurface::Water, Vec3::zeros()));
        assert_eq!(player.calls.len(), 1);
        assert_eq!(characters.diagnostic_counts().configuration_errors, 1);
    }
}
