//! Sound events and their asset path tables
//!
//! Each category is a closed enum whose variants are listed once, in a
//! static [`EventEntry`] table carrying the event's stable name and default
//! asset path. Everything else (name lookup, parsing, default tables) is
//! derived from that table.

use crate::assets::AssetPath;
use crate::audio::mixer::VolumeGroup;
use crate::audio::registry::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::hash::Hash;

/// Sound categories, one per manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundCategory {
    /// Menu and HUD feedback
    Ui,
    /// Weapons and other utility items
    Weapon,
    /// Footsteps, jumps and landings
    Character,
    /// Weather and ambience
    Environment,
    /// Menu and background music
    Music,
}

impl SoundCategory {
    /// Category name used in diagnostics and config files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ui => "ui",
            Self::Weapon => "weapon",
            Self::Character => "character",
            Self::Environment => "environment",
            Self::Music => "music",
        }
    }

    /// Mixer group the category plays through
    pub const fn volume_group(self) -> VolumeGroup {
        match self {
            Self::Ui => VolumeGroup::Ui,
            Self::Weapon => VolumeGroup::Weapon,
            Self::Character => VolumeGroup::Character,
            Self::Environment => VolumeGroup::Environment,
            Self::Music => VolumeGroup::Music,
        }
    }
}

impl fmt::Display for SoundCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a category's static event table
#[derive(Debug, Clone, Copy)]
pub struct EventEntry<E> {
    /// The event
    pub event: E,
    /// Stable kebab-case name
    pub name: &'static str,
    /// Asset path used when config does not override it
    pub default_path: &'static str,
}

impl<E> EventEntry<E> {
    /// Build a table row
    pub const fn new(event: E, name: &'static str, default_path: &'static str) -> Self {
        Self {
            event,
            name,
            default_path,
        }
    }
}

/// A category's closed set of sound event identifiers
pub trait SoundEvent: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Category every event of this type belongs to
    const CATEGORY: SoundCategory;

    /// Every event of the category, with names and default paths
    const TABLE: &'static [EventEntry<Self>];

    /// Stable name of the event, or `"<unlisted>"` for a variant missing
    /// from [`SoundEvent::TABLE`]
    fn name(self) -> &'static str {
        Self::entry(self).map_or("<unlisted>", |entry| entry.name)
    }

    /// Parse an event from its stable name
    fn from_name(name: &str) -> Option<Self> {
        Self::TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.event)
    }

    /// Default asset path of the event
    fn default_path(self) -> Option<&'static str> {
        Self::entry(self).map(|entry| entry.default_path)
    }

    /// Table row of the event
    fn entry(self) -> Option<&'static EventEntry<Self>> {
        Self::TABLE.iter().find(|entry| entry.event == self)
    }
}

/// Ordered `event -> asset path` table a registry is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable<E> {
    entries: Vec<(E, AssetPath)>,
}

impl<E: SoundEvent> PathTable<E> {
    /// Empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Table with every event of the category at its default path
    pub fn defaults() -> Self {
        E::TABLE
            .iter()
            .map(|entry| (entry.event, AssetPath::new(entry.default_path)))
            .collect()
    }

    /// Set the path of `event`, keeping its original position if present
    pub fn insert(&mut self, event: E, path: impl Into<AssetPath>) {
        let path = path.into();
        match self.entries.iter_mut().find(|(e, _)| *e == event) {
            Some(slot) => slot.1 = path,
            None => self.entries.push((event, path)),
        }
    }

    /// Builder form of [`PathTable::insert`]
    #[must_use]
    pub fn with(mut self, event: E, path: impl Into<AssetPath>) -> Self {
        self.insert(event, path);
        self
    }

    /// Replace paths by event name
    ///
    /// A name that is not an event of the category is a configuration error.
    pub fn with_overrides(
        mut self,
        overrides: &BTreeMap<String, AssetPath>,
    ) -> Result<Self, RegistryError> {
        for (name, path) in overrides {
            let event = E::from_name(name).ok_or_else(|| RegistryError::UnknownEvent {
                category: E::CATEGORY,
                name: name.clone(),
            })?;
            self.insert(event, path.clone());
        }
        Ok(self)
    }

    /// Path configured for `event`
    pub fn get(&self, event: E) -> Option<&AssetPath> {
        self.entries
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, path)| path)
    }

    /// Entries in load order
    pub fn iter(&self) -> impl Iterator<Item = (E, &AssetPath)> {
        self.entries.iter().map(|(event, path)| (*event, path))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E: SoundEvent> Default for PathTable<E> {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<E: SoundEvent> FromIterator<(E, AssetPath)> for PathTable<E> {
    fn from_iter<I: IntoIterator<Item = (E, AssetPath)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (event, path) in iter {
            table.insert(event, path);
        }
        table
    }
}
