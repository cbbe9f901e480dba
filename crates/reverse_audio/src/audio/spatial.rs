//! Distance attenuation for positional playback

use crate::foundation::math::{distance, Vec3};
use serde::{Deserialize, Serialize};

/// Configuration for spatial audio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpatialConfig {
    /// Maximum audible distance from listener
    pub max_distance: f32,
    /// Reference distance for attenuation (no falloff)
    pub reference_distance: f32,
    /// Falloff exponent (1.0 = linear, 2.0 = quadratic)
    pub falloff_exponent: f32,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            max_distance: 5000.0,
            reference_distance: 400.0,
            falloff_exponent: 1.0,
        }
    }
}

/// Listener-relative gain calculation
#[derive(Debug, Clone)]
pub struct SpatialAudio {
    config: SpatialConfig,
}

impl SpatialAudio {
    /// Create a new spatial audio calculator
    pub fn new(config: SpatialConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &SpatialConfig {
        &self.config
    }

    /// Gain in `0.0..=1.0` for a sound at `emitter` heard from `listener`
    pub fn calculate_attenuation(&self, listener: &Vec3, emitter: &Vec3) -> f32 {
        let distance = distance(listener, emitter);

        if distance > self.config.max_distance {
            return 0.0;
        }

        if distance <= self.config.reference_distance {
            return 1.0;
        }

        let span = self.config.max_distance - self.config.reference_distance;
        if span <= f32::EPSILON {
            return 0.0;
        }

        let normalized_distance = (distance - self.config.reference_distance) / span;
        let attenuation: f32 = 1.0 - normalized_distance.powf(self.config.falloff_exponent);
        attenuation.clamp(0.0, 1.0)
    }
}

impl Default for SpatialAudio {
    fn default() -> Self {
        Self::new(SpatialConfig::default())
    }
}
