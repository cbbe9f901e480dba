//! Audio mixer system
//!
//! One volume group per sound category plus a master group. The effective
//! volume of a playback request is `group * master`, or zero when either is
//! muted.

use crate::config::VolumeConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Volume group categories for independent volume control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VolumeGroup {
    /// Master volume (affects all sounds)
    Master,
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

impl VolumeGroup {
    /// Every group, master first
    pub const ALL: [Self; 6] = [
        Self::Master,
        Self::Ui,
        Self::Weapon,
        Self::Character,
        Self::Environment,
        Self::Music,
    ];

    /// Lowercase group name, as used in config files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Master => "master",
            Self::Ui => "ui",
            Self::Weapon => "weapon",
            Self::Character => "character",
            Self::Environment => "environment",
            Self::Music => "music",
        }
    }
}

impl fmt::Display for VolumeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Audio mixer managing volume groups
pub struct MixerSystem {
    /// Volume levels for each group (0.0 to 1.0)
    group_volumes: HashMap<VolumeGroup, f32>,
    /// Mute state for each group
    group_muted: HashMap<VolumeGroup, bool>,
}

impl MixerSystem {
    /// Create a new mixer with every group at full volume
    pub fn new() -> Self {
        Self::from_config(&VolumeConfig::default())
    }

    /// Create a mixer from configured volumes
    pub fn from_config(config: &VolumeConfig) -> Self {
        let mut mixer = Self {
            group_volumes: HashMap::new(),
            group_muted: HashMap::new(),
        };
        for group in VolumeGroup::ALL {
            mixer.set_group_volume(group, config.volume(group));
        }
        mixer
    }

    /// Set volume for a specific group (clamped to 0.0..=1.0)
    pub fn set_group_volume(&mut self, group: VolumeGroup, volume: f32) {
        self.group_volumes.insert(group, volume.clamp(0.0, 1.0));
    }

    /// Get volume for a specific group
    pub fn group_volume(&self, group: VolumeGroup) -> f32 {
        self.group_volumes.get(&group).copied().unwrap_or(1.0)
    }

    /// Get effective volume for a group (considering master volume and mute)
    pub fn effective_volume(&self, group: VolumeGroup) -> f32 {
        if self.is_muted(group) || self.is_muted(VolumeGroup::Master) {
            return 0.0;
        }

        if group == VolumeGroup::Master {
            return self.group_volume(VolumeGroup::Master);
        }

        self.group_volume(group) * self.group_volume(VolumeGroup::Master)
    }

    /// Mute a volume group
    pub fn mute_group(&mut self, group: VolumeGroup) {
        self.group_muted.insert(group, true);
    }

    /// Unmute a volume group
    pub fn unmute_group(&mut self, group: VolumeGroup) {
        self.group_muted.insert(group, false);
    }

    /// Check if a group is muted
    pub fn is_muted(&self, group: VolumeGroup) -> bool {
        self.group_muted.get(&group).copied().unwrap_or(false)
    }

    /// Toggle mute state for a group
    pub fn toggle_mute(&mut self, group: VolumeGroup) {
        let is_muted = self.is_muted(group);
        self.group_muted.insert(group, !is_muted);
    }
}

impl Default for MixerSystem {
    fn default() -> Self {
        Self::new()
    }
}
