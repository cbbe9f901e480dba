//! Named sound registry
//!
//! A [`SoundRegistry`] maps every event of its [`PathTable`] to a
//! [`Resolution`]. It is populated exactly once, when it is built, by asking
//! a [`SoundLoader`] for each path in table order. Afterwards it is
//! read-only: a failed load stays [`Resolution::Unresolved`] for the
//! registry's lifetime.
//!
//! Two failure kinds are kept apart:
//! - an event whose asset did not load resolves to `Unresolved` (content
//!   problem, expected at runtime);
//! - an event that is not a key of the registry is a [`RegistryError`]
//!   (programming or configuration problem).

use crate::assets::{AssetPath, SoundLoader};
use crate::audio::event::{PathTable, SoundCategory, SoundEvent};
use crate::audio::SoundHandle;
use std::collections::HashMap;
use thiserror::Error;

/// Outcome of resolving a known event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The asset is loaded and ready to play
    Resolved(SoundHandle),
    /// The asset failed to load
    Unresolved,
}

impl Resolution {
    /// The handle, if resolved
    pub fn handle(self) -> Option<SoundHandle> {
        match self {
            Self::Resolved(handle) => Some(handle),
            Self::Unresolved => None,
        }
    }

    /// True for [`Resolution::Resolved`]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Registry lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The event is not part of the registry's known set
    #[error("unknown {category} sound event `{name}`")]
    UnknownEvent {
        /// Category that was queried
        category: SoundCategory,
        /// Name of the event as requested
        name: String,
    },
}

/// Counts from the one-time load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries that resolved to a handle
    pub loaded: usize,
    /// Entries that stayed unresolved
    pub failed: usize,
}

impl LoadReport {
    /// Total number of entries
    pub fn total(&self) -> usize {
        self.loaded + self.failed
    }

    /// True when every entry loaded
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

impl std::ops::Add for LoadReport {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            loaded: self.loaded + other.loaded,
            failed: self.failed + other.failed,
        }
    }
}

#[derive(Debug)]
struct Entry<E> {
    event: E,
    path: AssetPath,
    resolution: Resolution,
}

/// Load-once mapping from a category's events to sound handles
#[derive(Debug)]
pub struct SoundRegistry<E: SoundEvent> {
    entries: Vec<Entry<E>>,
    index: HashMap<E, usize>,
    report: LoadReport,
}

impl<E: SoundEvent> SoundRegistry<E> {
    /// Build the registry by loading every entry of `table`
    ///
    /// Each entry gets one diagnostic record: `info` when it loads, `error`
    /// with the path when it does not.
    pub fn load<L>(table: &PathTable<E>, loader: &mut L) -> Self
    where
        L: SoundLoader + ?Sized,
    {
        let mut entries = Vec::with_capacity(table.len());
        let mut index = HashMap::with_capacity(table.len());
        let mut report = LoadReport::default();

        for (event, path) in table.iter() {
            let resolution = match loader.load_sound(path) {
                Ok(handle) => {
                    log::info!("{} sound `{}` loaded from {}", E::CATEGORY, event.name(), path);
                    report.loaded += 1;
                    Resolution::Resolved(handle)
                }
                Err(e) => {
                    log::error!(
                        "Failed to load {} sound `{}` from {}: {}",
                        E::CATEGORY,
                        event.name(),
                        path,
                        e
                    );
                    report.failed += 1;
                    Resolution::Unresolved
                }
            };

            index.insert(event, entries.len());
            entries.push(Entry {
                event,
                path: path.clone(),
                resolution,
            });
        }

        if report.failed > 0 {
            log::warn!(
                "{} registry: {} of {} sounds unresolved",
                E::CATEGORY,
                report.failed,
                report.total()
            );
        }

        Self {
            entries,
            index,
            report,
        }
    }

    /// Build the registry from the category's default path table
    pub fn load_defaults<L>(loader: &mut L) -> Self
    where
        L: SoundLoader + ?Sized,
    {
        Self::load(&PathTable::defaults(), loader)
    }

    /// Resolve `event` to its handle
    ///
    /// Returns `Ok(Resolution::Unresolved)` when the asset did not load, and
    /// [`RegistryError::UnknownEvent`] when `event` is not in the registry.
    pub fn resolve(&self, event: E) -> Result<Resolution, RegistryError> {
        self.index
            .get(&event)
            .map(|&i| self.entries[i].resolution)
            .ok_or_else(|| RegistryError::UnknownEvent {
                category: E::CATEGORY,
                name: event.name().to_string(),
            })
    }

    /// Resolve an event by its stable name
    pub fn resolve_name(&self, name: &str) -> Result<Resolution, RegistryError> {
        let event = E::from_name(name).ok_or_else(|| RegistryError::UnknownEvent {
            category: E::CATEGORY,
            name: name.to_string(),
        })?;
        self.resolve(event)
    }

    /// Asset path the event was loaded from
    pub fn path(&self, event: E) -> Option<&AssetPath> {
        self.index.get(&event).map(|&i| &self.entries[i].path)
    }

    /// True when `event` is a key of the registry
    pub fn contains(&self, event: E) -> bool {
        self.index.contains_key(&event)
    }

    /// Events and their resolutions, in load order
    pub fn iter(&self) -> impl Iterator<Item = (E, Resolution)> + '_ {
        self.entries.iter().map(|entry| (entry.event, entry.resolution))
    }

    /// Events whose asset failed to load
    pub fn unresolved(&self) -> impl Iterator<Item = E> + '_ {
        self.iter()
            .filter(|(_, resolution)| !resolution.is_resolved())
            .map(|(event, _)| event)
    }

    /// Load counts
    pub fn report(&self) -> LoadReport {
        self.report
    }

    /// Number of events in the registry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the registry has no events
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::categories::environment::EnvironmentSound;
    use crate::audio::categories::ui::UiSound;
    use crate::audio::testing::FakeLoader;

    fn hover_press_table() -> PathTable<UiSound> {
        PathTable::new()
            .with(UiSound::Hovered, "hover-path")
            .with(UiSound::Pressed, "press-path")
    }

    #[test]
    fn test_load_resolves_successes_and_marks_failures() {
        let mut loader = FakeLoader::failing(["press-path"]);
        let registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        let hover = registry.resolve(UiSound::Hovered).unwrap();
        assert_eq!(hover, Resolution::Resolved(loader.handle_for("hover-path").unwrap()));
        assert_eq!(registry.resolve(UiSound::Pressed).unwrap(), Resolution::Unresolved);
        assert_eq!(registry.report(), LoadReport { loaded: 1, failed: 1 });
    }

    #[test]
    fn test_loader_called_once_per_entry_in_table_order() {
        let mut loader = FakeLoader::new();
        let _registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        assert_eq!(loader.requested(), ["hover-path", "press-path"]);
    }

    #[test]
    fn test_every_known_event_resolves_without_error() {
        let mut loader = FakeLoader::failing(["audio/environment/thunder.ogg"]);
        let registry = SoundRegistry::<EnvironmentSound>::load_defaults(&mut loader);

        for entry in EnvironmentSound::TABLE {
            assert!(registry.resolve(entry.event).is_ok());
        }
        assert_eq!(registry.unresolved().collect::<Vec<_>>(), vec![EnvironmentSound::Thunder]);
    }

    #[test]
    fn test_event_outside_table_is_configuration_error() {
        let mut loader = FakeLoader::new();
        let registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        let err = registry.resolve(UiSound::Accept).unwrap_err();
        assert_eq!(
            err,
            RegistryError::UnknownEvent {
                category: SoundCategory::Ui,
                name: "accept".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_name_is_configuration_error_regardless_of_load() {
        let mut all_fail = FakeLoader::failing(["hover-path", "press-path"]);
        let mut all_ok = FakeLoader::new();

        for registry in [
            SoundRegistry::load(&hover_press_table(), &mut all_fail),
            SoundRegistry::load(&hover_press_table(), &mut all_ok),
        ] {
            assert!(matches!(
                registry.resolve_name("nonexistent-id"),
                Err(RegistryError::UnknownEvent { .. })
            ));
        }
    }

    #[test]
    fn test_resolve_by_name_matches_typed_resolve() {
        let mut loader = FakeLoader::new();
        let registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        assert_eq!(
            registry.resolve_name("hovered").unwrap(),
            registry.resolve(UiSound::Hovered).unwrap()
        );
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let mut loader = FakeLoader::failing(["press-path"]);
        let registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        for event in [UiSound::Hovered, UiSound::Pressed, UiSound::Accept] {
            let first = registry.resolve(event);
            for _ in 0..3 {
                assert_eq!(registry.resolve(event), first);
            }
        }
        assert_eq!(loader.requested().len(), 2);
    }

    #[test]
    fn test_paths_and_iteration_follow_table() {
        let mut loader = FakeLoader::new();
        let registry = SoundRegistry::load(&hover_press_table(), &mut loader);

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(UiSound::Pressed));
        assert!(!registry.contains(UiSound::Back));
        assert_eq!(registry.path(UiSound::Pressed).unwrap().as_str(), "press-path");

        let order: Vec<_> = registry.iter().map(|(event, _)| event).collect();
        assert_eq!(order, vec![UiSound::Hovered, UiSound::Pressed]);
    }

    #[test]
    fn test_empty_table_gives_empty_registry() {
        let mut loader = FakeLoader::new();
        let registry = SoundRegistry::<UiSound>::load(&PathTable::new(), &mut loader);

        assert!(registry.is_empty());
        assert!(registry.report().is_complete());
        assert!(registry.resolve(UiSound::Hovered).is_err());
    }
}
