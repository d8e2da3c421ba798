//! Projectile records

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::ProjectileFlags;
use crate::key::FormKey;

/// Physics type of a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProjectileType {
    /// Straight-flying magic or siege projectile
    Missile,
    /// Arcing lobbed projectile
    Lobber,
    /// Continuous beam
    Beam,
    /// Flame stream
    Flame,
    /// Cone-shaped burst
    Cone,
    /// Stationary barrier
    Barrier,
    /// Arrow or crossbow bolt
    Arrow,
}

impl ProjectileType {
    /// Get the raw on-disk value of the projectile type
    pub fn as_raw(self) -> u16 {
        match self {
            Self::Missile => 0x01,
            Self::Lobber => 0x02,
            Self::Beam => 0x04,
            Self::Flame => 0x08,
            Self::Cone => 0x10,
            Self::Barrier => 0x20,
            Self::Arrow => 0x40,
        }
    }

    /// Parse a raw on-disk value into a projectile type
    pub fn from_raw(raw: u16) -> Option<Self> {
        match raw {
            0x01 => Some(Self::Missile),
            0x02 => Some(Self::Lobber),
            0x04 => Some(Self::Beam),
            0x08 => Some(Self::Flame),
            0x10 => Some(Self::Cone),
            0x20 => Some(Self::Barrier),
            0x40 => Some(Self::Arrow),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missile => "Missile",
            Self::Lobber => "Lobber",
            Self::Beam => "Beam",
            Self::Flame => "Flame",
            Self::Cone => "Cone",
            Self::Barrier => "Barrier",
            Self::Arrow => "Arrow",
        };
        f.write_str(name)
    }
}

/// Detection loudness of a projectile in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SoundLevel {
    /// Audible at normal combat ranges
    Loud,
    /// Default loudness
    Normal,
    /// Effectively undetectable
    Silent,
    /// Audible across the whole area
    VeryLoud,
}

impl SoundLevel {
    /// Get the raw ordinal of the sound level
    pub fn as_raw(self) -> u32 {
        match self {
            Self::Loud => 0,
            Self::Normal => 1,
            Self::Silent => 2,
            Self::VeryLoud => 3,
        }
    }

    /// Parse a raw ordinal into a sound level
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Loud),
            1 => Some(Self::Normal),
            2 => Some(Self::Silent),
            3 => Some(Self::VeryLoud),
            _ => None,
        }
    }
}

impl fmt::Display for SoundLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loud => "Loud",
            Self::Normal => "Normal",
            Self::Silent => "Silent",
            Self::VeryLoud => "VeryLoud",
        };
        f.write_str(name)
    }
}

/// A projectile record as seen by the patcher
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProjectileRecord {
    /// Stable identity of the record
    pub key: FormKey,
    /// Editor identifier, if the record carries one
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    /// Localized display name, if any
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    /// Physics type
    pub kind: ProjectileType,
    /// Flight speed in game units per second
    pub speed: f32,
    /// Gravity multiplier applied while in flight
    pub gravity: f32,
    /// Impact force applied to hit targets
    pub impact_force: f32,
    /// Detection loudness while in flight
    pub sound_level: SoundLevel,
    /// Record flags
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: ProjectileFlags,
}

impl ProjectileRecord {
    /// Editor identifier of the record, if present
    pub fn editor_id(&self) -> Option<&str> {
        self.editor_id.as_deref()
    }

    /// Whether the supersonic flight flag is set
    pub fn has_supersonic(&self) -> bool {
        self.flags.contains(ProjectileFlags::SUPERSONIC)
    }
}
