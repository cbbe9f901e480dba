//! Music tracks
//!
//! Only the main menu theme is wired up. Background playlists by mood are not
//! modelled: there is no defined rule for choosing among them yet.

use crate::audio::event::{EventEntry, SoundCategory, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::SoundPlayer;

/// Music events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicSound {
    /// Main menu theme
    MainMenu,
}

impl SoundEvent for MusicSound {
    const CATEGORY: SoundCategory = SoundCategory::Music;

    const TABLE: &'static [EventEntry<Self>] = &[EventEntry::new(
        Self::MainMenu,
        "main-menu",
        "audio/music/main_menu.ogg",
    )];
}

/// Music manager
pub type MusicAudio = CategoryManager<MusicSound>;

impl CategoryManager<MusicSound> {
    /// Start the main menu theme
    pub fn play_main_menu<P: SoundPlayer + ?Sized>(&self, player: &mut P) -> bool {
        self.play(player, MusicSound::MainMenu)
    }
}
