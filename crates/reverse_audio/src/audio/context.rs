//! Playback context
//!
//! Identifies the world a sound plays in and where the listener stands in
//! it. Positional playback is attenuated relative to the listener.

use crate::foundation::math::Vec3;

/// World and listener a sound is played for
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackContext {
    world: String,
    listener: Vec3,
}

impl PlaybackContext {
    /// Context for `world` with the listener at the origin
    pub fn new(world: impl Into<String>) -> Self {
        Self {
            world: world.into(),
            listener: Vec3::zeros(),
        }
    }

    /// Builder form of [`PlaybackContext::set_listener`]
    #[must_use]
    pub fn with_listener(mut self, position: Vec3) -> Self {
        self.listener = position;
        self
    }

    /// World name
    pub fn world(&self) -> &str {
        &self.world
    }

    /// Listener position
    pub fn listener(&self) -> Vec3 {
        self.listener
    }

    /// Move the listener
    pub fn set_listener(&mut self, position: Vec3) {
        self.listener = position;
    }
}
