//! Concrete sound categories
//!
//! One module per category: its event enum, default path table and named
//! play helpers. [`AudioManagers`] builds all of them from an
//! [`AudioConfig`].

pub mod character;
pub mod environment;
pub mod music;
pub mod ui;
pub mod weapon;

use crate::assets::{AssetPath, SoundLoader};
use crate::audio::event::{PathTable, SoundEvent};
use crate::audio::manager::CategoryManager;
use crate::audio::registry::{LoadReport, RegistryError};
use crate::audio::PlaybackContext;
use crate::config::AudioConfig;
use crate::foundation::math::Vec3;
use std::collections::BTreeMap;

pub use character::{CharacterAudio, CharacterSound, PhysicalSurface};
pub use environment::{EnvironmentAudio, EnvironmentSound};
pub use music::{MusicAudio, MusicSound};
pub use ui::{UiAudio, UiSound};
pub use weapon::{WeaponAudio, WeaponSound};

/// One manager per sound category
#[derive(Debug)]
pub struct AudioManagers {
    /// Menu and HUD sounds
    pub ui: UiAudio,
    /// Weapon sounds
    pub weapon: WeaponAudio,
    /// Character movement sounds
    pub character: CharacterAudio,
    /// Weather and ambience
    pub environment: EnvironmentAudio,
    /// Music
    pub music: MusicAudio,
}

impl AudioManagers {
    /// Load every category through `loader`
    ///
    /// Each table starts from the category defaults with `config.paths`
    /// applied on top. An override naming an unknown event is rejected
    /// before anything is loaded.
    pub fn load<L>(config: &AudioConfig, loader: &mut L) -> Result<Self, RegistryError>
    where
        L: SoundLoader + ?Sized,
    {
        let ui = table(&config.paths.ui)?;
        let weapon = table(&config.paths.weapon)?;
        let character = table(&config.paths.character)?;
        let environment = table(&config.paths.environment)?;
        let music = table(&config.paths.music)?;

        let diagnostics = config.diagnostics;
        let managers = Self {
            ui: CategoryManager::load(&ui, loader, diagnostics),
            weapon: CategoryManager::load(&weapon, loader, diagnostics),
            character: CategoryManager::load(&character, loader, diagnostics),
            environment: CategoryManager::load(&environment, loader, diagnostics),
            music: CategoryManager::load(&music, loader, diagnostics),
        };

        let report = managers.report();
        log::info!(
            "Audio managers ready: {}/{} sounds loaded",
            report.loaded,
            report.total()
        );
        Ok(managers)
    }

    /// Give every manager the same world context
    ///
    /// Returns `false` if any manager already had one.
    pub fn set_world_context(&mut self, context: &PlaybackContext) -> bool {
        let results = [
            self.ui.set_world_context(context.clone()),
            self.weapon.set_world_context(context.clone()),
            self.character.set_world_context(context.clone()),
            self.environment.set_world_context(context.clone()),
            self.music.set_world_context(context.clone()),
        ];
        results.iter().all(|set| *set)
    }

    /// Move the listener in every manager's world context
    pub fn update_listener(&mut self, position: Vec3) {
        self.ui.update_listener(position);
        self.weapon.update_listener(position);
        self.character.update_listener(position);
        self.environment.update_listener(position);
        self.music.update_listener(position);
    }

    /// Combined load report
    pub fn report(&self) -> LoadReport {
        self.ui.registry().report()
            + self.weapon.registry().report()
            + self.character.registry().report()
            + self.environment.registry().report()
            + self.music.registry().report()
    }
}

fn table<E: SoundEvent>(
    overrides: &BTreeMap<String, AssetPath>,
) -> Result<PathTable<E>, RegistryError> {
    PathTable::defaults().with_overrides(overrides)
}
