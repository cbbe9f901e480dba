//! Category manager
//!
//! A thin façade over one [`SoundRegistry`]: it remembers the world context,
//! resolves an event and forwards the handle to a [`SoundPlayer`]. Every
//! failure goes through [`Diagnostics`]; play methods only report whether
//! playback was requested.

use crate::assets::SoundLoader;
use crate::audio::diagnostics::{DiagnosticCounts, Diagnostics, DiagnosticsConfig};
use crate::audio::event::{PathTable, SoundEvent};
use crate::audio::registry::{RegistryError, Resolution, SoundRegistry};
use crate::audio::{AudioError, PlaybackContext, SoundHandle, SoundPlayer};
use crate::foundation::math::Vec3;

/// Registry plus world context for one sound category
#[derive(Debug)]
pub struct CategoryManager<E: SoundEvent> {
    registry: SoundRegistry<E>,
    world_context: Option<PlaybackContext>,
    diagnostics: Diagnostics,
}

impl<E: SoundEvent> CategoryManager<E> {
    /// Wrap an already loaded registry
    pub fn new(registry: SoundRegistry<E>, diagnostics: DiagnosticsConfig) -> Self {
        Self {
            registry,
            world_context: None,
            diagnostics: Diagnostics::new(diagnostics),
        }
    }

    /// Load `table` and wrap the resulting registry
    pub fn load<L>(table: &PathTable<E>, loader: &mut L, diagnostics: DiagnosticsConfig) -> Self
    where
        L: SoundLoader + ?Sized,
    {
        Self::new(SoundRegistry::load(table, loader), diagnostics)
    }

    /// Load the category's default table
    pub fn load_defaults<L>(loader: &mut L, diagnostics: DiagnosticsConfig) -> Self
    where
        L: SoundLoader + ?Sized,
    {
        Self::load(&PathTable::defaults(), loader, diagnostics)
    }

    /// Underlying registry
    pub fn registry(&self) -> &SoundRegistry<E> {
        &self.registry
    }

    /// Failure counts since the manager was created
    pub fn diagnostic_counts(&self) -> DiagnosticCounts {
        self.diagnostics.counts()
    }

    /// Assign the world context used by [`CategoryManager::play`]
    ///
    /// The context can only be set once; later assignments are ignored with a
    /// warning and `false` is returned.
    pub fn set_world_context(&mut self, context: PlaybackContext) -> bool {
        if let Some(current) = &self.world_context {
            log::warn!(
                "{} audio already has world context `{}`; ignoring `{}`",
                E::CATEGORY,
                current.world(),
                context.world()
            );
            return false;
        }

        log::info!("{} audio world context set to `{}`", E::CATEGORY, context.world());
        self.world_context = Some(context);
        true
    }

    /// The world context, if one was set
    pub fn world_context(&self) -> Option<&PlaybackContext> {
        if self.world_context.is_none() {
            log::error!("{} audio has no world context", E::CATEGORY);
        }
        self.world_context.as_ref()
    }

    /// Move the listener of the stored world context
    ///
    /// Returns `false` when no context has been set.
    pub fn update_listener(&mut self, position: Vec3) -> bool {
        match &mut self.world_context {
            Some(context) => {
                context.set_listener(position);
                true
            }
            None => false,
        }
    }

    /// Typed accessor: the loaded handle for `event`
    ///
    /// Unknown events and missing assets are reported and yield `None`.
    pub fn sound(&self, event: E) -> Option<SoundHandle> {
        self.lookup(self.registry.resolve(event).map(|r| (event, r)))
    }

    /// Play `event` in the stored world context
    pub fn play<P>(&self, player: &mut P, event: E) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        self.dispatch(player, self.world_context.as_ref(), self.resolve(event), None)
    }

    /// Play `event` at `position` in the stored world context
    pub fn play_at<P>(&self, player: &mut P, event: E, position: Vec3) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        self.dispatch(
            player,
            self.world_context.as_ref(),
            self.resolve(event),
            Some(position),
        )
    }

    /// Play `event` in an explicit context
    pub fn play_in<P>(&self, player: &mut P, context: &PlaybackContext, event: E) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        self.dispatch(player, Some(context), self.resolve(event), None)
    }

    /// Play `event` at `position` in an explicit context
    pub fn play_in_at<P>(
        &self,
        player: &mut P,
        context: &PlaybackContext,
        event: E,
        position: Vec3,
    ) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        self.dispatch(player, Some(context), self.resolve(event), Some(position))
    }

    /// Play an event given by its stable name, in the stored world context
    pub fn play_named<P>(&self, player: &mut P, name: &str) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        let lookup = E::from_name(name)
            .ok_or_else(|| RegistryError::UnknownEvent {
                category: E::CATEGORY,
                name: name.to_string(),
            })
            .and_then(|event| self.resolve(event));
        self.dispatch(player, self.world_context.as_ref(), lookup, None)
    }

    fn resolve(&self, event: E) -> Result<(E, Resolution), RegistryError> {
        self.registry.resolve(event).map(|resolution| (event, resolution))
    }

    fn lookup(&self, lookup: Result<(E, Resolution), RegistryError>) -> Option<SoundHandle> {
        match lookup {
            Err(err) => {
                self.diagnostics.configuration_error(&err);
                None
            }
            Ok((event, Resolution::Unresolved)) => {
                self.diagnostics.runtime_condition(&AudioError::MissingAsset {
                    category: E::CATEGORY,
                    name: event.name(),
                });
                None
            }
            Ok((_, Resolution::Resolved(handle))) => Some(handle),
        }
    }

    fn dispatch<P>(
        &self,
        player: &mut P,
        context: Option<&PlaybackContext>,
        lookup: Result<(E, Resolution), RegistryError>,
        position: Option<Vec3>,
    ) -> bool
    where
        P: SoundPlayer + ?Sized,
    {
        // Unknown events are reported before anything about runtime state.
        if let Err(err) = &lookup {
            self.diagnostics.configuration_error(err);
            return false;
        }

        let Some(context) = context else {
            self.diagnostics.runtime_condition(&AudioError::InvalidContext);
            return false;
        };

        let Some(handle) = self.lookup(lookup) else {
            return false;
        };

        let group = E::CATEGORY.volume_group();
        let result = match position {
            Some(position) => player.play_at(context, handle, group, position),
            None => player.play_2d(context, handle, group),
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                self.diagnostics.playback_failure(&err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::categories::ui::UiSound;
    use crate::audio::diagnostics::BuildProfile;
    use crate::audio::mixer::VolumeGroup;
    use crate::audio::testing::{FakeLoader, RecordingPlayer};

    fn development() -> DiagnosticsConfig {
        DiagnosticsConfig {
            profile: BuildProfile::Development,
            fatal_missing_assets: false,
        }
    }

    fn hover_press(loader: &mut FakeLoader) -> CategoryManager<UiSound> {
        crate::foundation::logging::init_for_tests();
        let table = PathTable::new()
            .with(UiSound::Hovered, "hover-path")
            .with(UiSound::Pressed, "press-path");
        let mut manager = CategoryManager::load(&table, loader, development());
        manager.set_world_context(PlaybackContext::new("menu"));
        manager
    }

    #[test]
    fn test_resolved_event_is_played_in_category_group() {
        let mut loader = FakeLoader::failing(["press-path"]);
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();

        assert!(manager.play(&mut player, UiSound::Hovered));

        assert_eq!(player.calls.len(), 1);
        let call = &player.calls[0];
        assert_eq!(call.sound, loader.handle_for("hover-path").unwrap());
        assert_eq!(call.group, VolumeGroup::Ui);
        assert_eq!(call.world, "menu");
        assert_eq!(call.position, None);
    }

    #[test]
    fn test_unresolved_event_plays_nothing_and_reports_once() {
        let mut loader = FakeLoader::failing(["press-path"]);
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();

        assert!(!manager.play(&mut player, UiSound::Pressed));

        assert!(player.calls.is_empty());
        assert_eq!(manager.diagnostic_counts().missing_assets, 1);
        assert_eq!(manager.diagnostic_counts().total(), 1);
    }

    #[test]
    fn test_unknown_event_is_configuration_error() {
        let mut loader = FakeLoader::new();
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();

        assert!(!manager.play(&mut player, UiSound::Upgrade));
        assert!(!manager.play_named(&mut player, "nonexistent-id"));

        assert!(player.calls.is_empty());
        assert_eq!(manager.diagnostic_counts().configuration_errors, 2);
    }

    #[test]
    fn test_play_named_plays_known_event() {
        let mut loader = FakeLoader::new();
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();

        assert!(manager.play_named(&mut player, "hovered"));

        assert_eq!(player.calls.len(), 1);
        assert_eq!(player.calls[0].sound, loader.handle_for("hover-path").unwrap());
        assert_eq!(player.calls[0].world, "menu");
        assert_eq!(manager.diagnostic_counts().total(), 0);
    }

    #[test]
    fn test_play_in_at_uses_given_context_and_position() {
        let mut loader = FakeLoader::new();
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();
        let position = Vec3::new(3.0, 0.0, -2.0);

        assert!(manager.play_in_at(
            &mut player,
            &PlaybackContext::new("hud"),
            UiSound::Pressed,
            position
        ));

        assert_eq!(player.calls.len(), 1);
        let call = &player.calls[0];
        assert_eq!(call.sound, loader.handle_for("press-path").unwrap());
        assert_eq!(call.world, "hud");
        assert_eq!(call.position, Some(position));
        assert_eq!(manager.world_context().unwrap().world(), "menu");
    }

    #[test]
    fn test_missing_context_drops_request() {
        let mut loader = FakeLoader::new();
        let table = PathTable::new().with(UiSound::Hovered, "hover-path");
        let manager = CategoryManager::load(&table, &mut loader, development());
        let mut player = RecordingPlayer::new();

        assert!(manager.world_context().is_none());
        assert!(!manager.play(&mut player, UiSound::Hovered));
        assert!(player.calls.is_empty());
        assert_eq!(manager.diagnostic_counts().invalid_contexts, 1);

        // An explicit context still works.
        assert!(manager.play_in(&mut player, &PlaybackContext::new("hud"), UiSound::Hovered));
        assert_eq!(player.calls[0].world, "hud");
    }

    #[test]
    fn test_world_context_is_set_once() {
        let mut loader = FakeLoader::new();
        let mut manager = hover_press(&mut loader);

        assert!(!manager.set_world_context(PlaybackContext::new("other")));
        assert_eq!(manager.world_context().unwrap().world(), "menu");
    }

    #[test]
    fn test_positional_playback_passes_position_and_listener() {
        let mut loader = FakeLoader::new();
        let mut manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::new();

        assert!(manager.update_listener(Vec3::new(1.0, 2.0, 3.0)));
        assert!(manager.play_at(&mut player, UiSound::Pressed, Vec3::new(10.0, 0.0, 0.0)));

        assert_eq!(player.calls[0].position, Some(Vec3::new(10.0, 0.0, 0.0)));
        assert_eq!(
            manager.world_context().unwrap().listener(),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn test_player_failure_is_counted_not_propagated() {
        let mut loader = FakeLoader::new();
        let manager = hover_press(&mut loader);
        let mut player = RecordingPlayer::failing();

        assert!(!manager.play(&mut player, UiSound::Hovered));
        assert_eq!(manager.diagnostic_counts().playback_failures, 1);
    }

    #[test]
    fn test_sound_accessor() {
        let mut loader = FakeLoader::failing(["press-path"]);
        let manager = hover_press(&mut loader);

        assert_eq!(manager.sound(UiSound::Hovered), loader.handle_for("hover-path"));
        assert_eq!(manager.sound(UiSound::Pressed), None);
        assert_eq!(manager.sound(UiSound::Sell), None);
        assert_eq!(manager.diagnostic_counts().missing_assets, 1);
        assert_eq!(manager.diagnostic_counts().configuration_errors, 1);
    }

    #[test]
    #[should_panic(expected = "unknown ui sound event")]
    fn test_unknown_event_is_fatal_when_shipping() {
        let mut loader = FakeLoader::new();
        let table = PathTable::new().with(UiSound::Hovered, "hover-path");
        let diagnostics = DiagnosticsConfig {
            profile: BuildProfile::Shipping,
            fatal_missing_assets: false,
        };
        let manager = CategoryManager::load(&table, &mut loader, diagnostics);
        manager.play_in(&mut RecordingPlayer::new(), &PlaybackContext::new("w"), UiSound::Exit);
    }
}
