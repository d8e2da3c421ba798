//! Patcher configuration
//!
//! The whole configuration is one JSON document; every field has a default,
//! so a partial document (or an empty `{}`) parses into the stock tuning.
//! All numeric values here are data, not engine behavior: users are expected
//! to edit them.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fletcher_records::{AmmoRecord, SoundLevel};

use crate::error::{Error, Result};
use crate::matcher::IdMatcher;

/// Global game-tuning toggles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTweaks {
    /// Force every auto-aim angle/distance setting to zero
    pub disable_autoaim: bool,
    /// Zero the NPC combat dodge chance (works around the "ninja dodge" bug)
    pub fix_combat_dodge: bool,
}

/// Cross-category tweaks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscTweaks {
    /// Clear the supersonic flag on every patched projectile
    pub disable_supersonic: bool,
    /// Also patch trap-fired missile projectiles
    pub patch_traps: bool,
    /// Editor ids treated as bloodcursed arrows (exact, case-insensitive)
    pub bloodcursed_ids: Vec<String>,
    /// Zero gravity on bloodcursed arrows instead of the arrow-table value
    pub bloodcursed_disable_gravity: bool,
}

impl Default for MiscTweaks {
    fn default() -> Self {
        Self {
            disable_supersonic: true,
            patch_traps: true,
            bloodcursed_ids: vec!["DLC1ElvenArrowBloodProjectile".into()],
            bloodcursed_disable_gravity: true,
        }
    }
}

/// Absolute stat overrides applied to a matched projectile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileStats {
    /// Flight speed
    pub speed: f32,
    /// Gravity multiplier
    pub gravity: f32,
    /// Impact force
    pub impact_force: f32,
    /// Detection loudness
    pub sound_level: SoundLevel,
}

impl ProjectileStats {
    /// Create a new stats bundle
    pub fn new(speed: f32, gravity: f32, impact_force: f32, sound_level: SoundLevel) -> Self {
        Self {
            speed,
            gravity,
            impact_force,
            sound_level,
        }
    }
}

/// One projectile rule category: an enable flag, the stats to apply, and the
/// editor-id patterns that select it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileTweaks {
    /// Whether the category participates in matching at all
    pub enabled: bool,
    /// Stats applied on a match
    pub stats: ProjectileStats,
    /// Selection patterns; semantics differ per category (see the resolver)
    pub matches: IdMatcher,
}

impl Default for ProjectileTweaks {
    fn default() -> Self {
        Self {
            enabled: false,
            stats: ProjectileStats::new(3600.0, 1.0, 0.44, SoundLevel::Normal),
            matches: IdMatcher::default(),
        }
    }
}

/// Optional absolute overrides for ammunition fields.
///
/// Only fields carrying a value are touched; the table reports how many
/// fields actually changed so callers can skip no-op overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmmoTweaks {
    /// Whether the table is applied at all
    pub enabled: bool,
    /// Base damage override
    pub damage: Option<f32>,
    /// Gold value override
    pub value: Option<u32>,
    /// Carry weight override
    pub weight: Option<f32>,
}

impl AmmoTweaks {
    /// Whether the table is enabled and overrides at least one field
    pub fn is_active(&self) -> bool {
        self.enabled && (self.damage.is_some() || self.value.is_some() || self.weight.is_some())
    }

    /// Apply the table to a copy of the record.
    ///
    /// Returns the copy and the number of fields whose value actually
    /// changed; a count of zero means the record already satisfied every
    /// configured override.
    pub fn apply_to(&self, record: &AmmoRecord) -> (AmmoRecord, u32) {
        let mut out = record.clone();
        let mut changed = 0;
        if let Some(damage) = self.damage {
            if out.damage != damage {
                out.damage = damage;
                changed += 1;
            }
        }
        if let Some(value) = self.value {
            if out.value != value {
                out.value = value;
                changed += 1;
            }
        }
        if let Some(weight) = self.weight {
            if out.weight != weight {
                out.weight = weight;
                changed += 1;
            }
        }
        (out, changed)
    }
}

/// Complete patcher configuration, passed explicitly into a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Log the effective configuration and per-record skips
    pub verbose: bool,
    /// Global game-tuning toggles
    pub game: GameTweaks,
    /// Cross-category tweaks
    pub misc: MiscTweaks,
    /// Editor-id patterns excluded from every category unconditionally
    pub denylist: IdMatcher,
    /// Arrow projectile rule category
    pub arrows: ProjectileTweaks,
    /// Bolt projectile rule category
    pub bolts: ProjectileTweaks,
    /// Throwable projectile rule category
    pub throwables: ProjectileTweaks,
    /// Tweaks applied to arrow ammunition records
    pub arrow_ammo: AmmoTweaks,
    /// Tweaks applied to bolt ammunition records
    pub bolt_ammo: AmmoTweaks,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbose: false,
            game: GameTweaks::default(),
            misc: MiscTweaks::default(),
            denylist: IdMatcher::from_substrings(["MQ101ArrowSteelProjectile"]),
            arrows: ProjectileTweaks {
                enabled: true,
                stats: ProjectileStats::new(5000.0, 0.3, 0.44, SoundLevel::Silent),
                // Empty on purpose: arrows default-accept every valid arrow.
                matches: IdMatcher::default(),
            },
            bolts: ProjectileTweaks {
                enabled: true,
                stats: ProjectileStats::new(5800.0, 0.34, 0.64, SoundLevel::Normal),
                matches: IdMatcher::from_substrings(["Bolt"]),
            },
            throwables: ProjectileTweaks {
                enabled: false,
                stats: ProjectileStats::new(2900.0, 0.13, 1.1, SoundLevel::Silent),
                matches: IdMatcher::from_substrings(["Spear", "Javelin", "Riekling"]),
            },
            arrow_ammo: AmmoTweaks::default(),
            bolt_ammo: AmmoTweaks::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file.
    ///
    /// A missing or unreadable file is a fatal configuration error; the
    /// caller is expected to abort before touching any record.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut file = File::open(path)
            .map_err(|e| Error::config(format!("cannot open {}: {e}", path.display())))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_json(&contents)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the settings as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Whether any ammunition rule table would do work
    pub fn ammo_active(&self) -> bool {
        self.arrow_ammo.is_active() || self.bolt_ammo.is_active()
    }
}
