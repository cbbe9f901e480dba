//! Failure policy for playback requests
//!
//! Managers never hand errors back to gameplay code. Each failure is
//! reported here, counted, and then either dropped or escalated depending on
//! the [`BuildProfile`]:
//!
//! | failure                       | Development    | Shipping                 |
//! |-------------------------------|----------------|--------------------------|
//! | unknown event (configuration) | `error!`, drop | panic                    |
//! | missing asset / no context    | `error!`, drop | `warn!`, drop (1)        |
//! | backend failure               | `error!`, drop | `error!`, drop           |
//!
//! (1) panics instead when `fatal_missing_assets` is set.

use crate::audio::registry::RegistryError;
use crate::audio::AudioError;
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// How loudly misconfiguration is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildProfile {
    /// Log everything, never abort
    Development,
    /// Abort on configuration errors
    Shipping,
}

impl Default for BuildProfile {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Shipping
        }
    }
}

/// Diagnostics section of the audio config
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Build profile; defaults to the compilation profile
    pub profile: BuildProfile,
    /// In shipping builds, treat missing assets and missing contexts as fatal
    pub fatal_missing_assets: bool,
}

/// Snapshot of a manager's failure counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticCounts {
    /// Requests for events outside the registry
    pub configuration_errors: u64,
    /// Requests for events whose asset did not load
    pub missing_assets: u64,
    /// Requests made without a playback context
    pub invalid_contexts: u64,
    /// Requests the player rejected
    pub playback_failures: u64,
}

impl DiagnosticCounts {
    /// Sum of all counters
    pub fn total(&self) -> u64 {
        self.configuration_errors
            + self.missing_assets
            + self.invalid_contexts
            + self.playback_failures
    }
}

/// Applies [`DiagnosticsConfig`] and keeps failure counts
#[derive(Debug, Default)]
pub struct Diagnostics {
    config: DiagnosticsConfig,
    counts: Cell<DiagnosticCounts>,
}

impl Diagnostics {
    /// Create a reporter for `config`
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self {
            config,
            counts: Cell::new(DiagnosticCounts::default()),
        }
    }

    /// Active configuration
    pub fn config(&self) -> DiagnosticsConfig {
        self.config
    }

    /// Current counts
    pub fn counts(&self) -> DiagnosticCounts {
        self.counts.get()
    }

    fn bump(&self, f: impl FnOnce(&mut DiagnosticCounts)) {
        let mut counts = self.counts.get();
        f(&mut counts);
        self.counts.set(counts);
    }

    /// Report a lookup outside the registry's known set
    ///
    /// # Panics
    /// In the [`BuildProfile::Shipping`] profile.
    pub fn configuration_error(&self, err: &RegistryError) {
        self.bump(|c| c.configuration_errors += 1);
        match self.config.profile {
            BuildProfile::Development => log::error!("Audio configuration error: {err}"),
            BuildProfile::Shipping => panic!("Audio configuration error: {err}"),
        }
    }

    /// Report a recoverable runtime condition (missing asset or context)
    ///
    /// # Panics
    /// In the [`BuildProfile::Shipping`] profile when
    /// `fatal_missing_assets` is set.
    pub fn runtime_condition(&self, err: &AudioError) {
        self.bump(|c| match err {
            AudioError::InvalidContext => c.invalid_contexts += 1,
            _ => c.missing_assets += 1,
        });
        match self.config.profile {
            BuildProfile::Development => log::error!("{err}; nothing played"),
            BuildProfile::Shipping if self.config.fatal_missing_assets => {
                panic!("{err}")
            }
            BuildProfile::Shipping => log::warn!("{err}; nothing played"),
        }
    }

    /// Report a failure from the playback collaborator
    pub fn playback_failure(&self, err: &AudioError) {
        self.bump(|c| c.playback_failures += 1);
        log::error!("Audio playback failed: {err}");
    }
}
