//! Weapon and utility sounds

use crate::audio::event::{EventEntry, SoundCategory, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::SoundPlayer;
use crate::foundation::math::Vec3;

/// Weapon sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeaponSound {
    /// A rifle shot
    RifleFire,
    /// Magazine out
    RifleReloadStart,
    /// Magazine in, bolt back
    RifleReloadEnd,
}

impl SoundEvent for WeaponSound {
    const CATEGORY: SoundCategory = SoundCategory::Weapon;

    const TABLE: &'static [EventEntry<Self>] = &[
        EventEntry::new(Self::RifleFire, "rifle-fire", "audio/weapon/rifle/fire.wav"),
        EventEntry::new(
            Self::RifleReloadStart,
            "rifle-reload-start",
            "audio/weapon/rifle/reload_start.wav",
        ),
        EventEntry::new(
            Self::RifleReloadEnd,
            "rifle-reload-end",
            "audio/weapon/rifle/reload_end.wav",
        ),
    ];
}

/// Weapon sound manager
pub type WeaponAudio = CategoryManager<WeaponSound>;

impl CategoryManager<WeaponSound> {
    /// Play a rifle shot for the local player
    pub fn play_rifle_fire<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, WeaponSound::RifleFire)
    }

    /// Play a rifle shot fired from `position`
    pub fn play_rifle_fire_at<P: SoundPlayer + ?Sized>(
        &self,
        player: &mut P,
        position: Vec3,
    ) -> bool {
        self.play_at(player, WeaponSound::RifleFire, position)
    }

    /// Play the start of a rifle reload
    pub fn play_rifle_reload_start<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, WeaponSound::RifleReloadStart)
    }

    /// Play the end of a rifle reload
    pub fn play_rifle_reload_end<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, WeaponSound::RifleReloadEnd)
    }
}
