//! Copy-on-write patch output layer

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::ammo::AmmoRecord;
use crate::gamesetting::GameSetting;
use crate::key::FormKey;
use crate::projectile::ProjectileRecord;

/// First form id handed out for records the patch introduces itself
/// (game settings); low ids stay clear of ids copied from source plugins.
const FIRST_NEW_FORM_ID: u32 = 0x000800;

/// The output plugin collecting overrides produced by a patch run.
///
/// Loaded after every source plugin, this layer wins all records it carries.
/// Overrides are keyed: setting the same key again replaces the previous
/// content, so re-running a patch never duplicates records.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PatchPlugin {
    /// Plugin file name
    pub name: String,
    projectiles: Vec<ProjectileRecord>,
    ammo: Vec<AmmoRecord>,
    game_settings: Vec<GameSetting>,
    #[cfg_attr(feature = "serde", serde(skip))]
    projectile_index: HashMap<FormKey, usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    ammo_index: HashMap<FormKey, usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    setting_index: HashMap<String, usize>,
    #[cfg_attr(feature = "serde", serde(skip))]
    next_form_id: u32,
}

impl PatchPlugin {
    /// Create a new empty patch plugin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projectiles: Vec::new(),
            ammo: Vec::new(),
            game_settings: Vec::new(),
            projectile_index: HashMap::new(),
            ammo_index: HashMap::new(),
            setting_index: HashMap::new(),
            next_form_id: FIRST_NEW_FORM_ID,
        }
    }

    /// Set (or replace) the override for a projectile record
    pub fn set_projectile_override(&mut self, record: ProjectileRecord) {
        match self.projectile_index.get(&record.key) {
            Some(&slot) => self.projectiles[slot] = record,
            None => {
                self.projectile_index
                    .insert(record.key.clone(), self.projectiles.len());
                self.projectiles.push(record);
            }
        }
    }

    /// Set (or replace) the override for an ammunition record
    pub fn set_ammo_override(&mut self, record: AmmoRecord) {
        match self.ammo_index.get(&record.key) {
            Some(&slot) => self.ammo[slot] = record,
            None => {
                self.ammo_index
                    .insert(record.key.clone(), self.ammo.len());
                self.ammo.push(record);
            }
        }
    }

    /// Add a float game setting, allocating a fresh form key.
    ///
    /// Settings are keyed by editor id: adding the same editor id again
    /// overwrites the value instead of producing a second record.
    pub fn add_game_setting(&mut self, editor_id: impl Into<String>, value: f32) {
        let editor_id = editor_id.into();
        match self.setting_index.get(&editor_id) {
            Some(&slot) => self.game_settings[slot].value = value,
            None => {
                let key = self.allocate_form_key();
                self.setting_index
                    .insert(editor_id.clone(), self.game_settings.len());
                self.game_settings.push(GameSetting {
                    key,
                    editor_id,
                    value,
                });
            }
        }
    }

    fn allocate_form_key(&mut self) -> FormKey {
        let key = FormKey::new(self.name.clone(), self.next_form_id);
        self.next_form_id += 1;
        key
    }

    /// Projectile overrides carried by the patch
    pub fn projectiles(&self) -> &[ProjectileRecord] {
        &self.projectiles
    }

    /// Ammunition overrides carried by the patch
    pub fn ammo(&self) -> &[AmmoRecord] {
        &self.ammo
    }

    /// Game settings added by the patch
    pub fn game_settings(&self) -> &[GameSetting] {
        &self.game_settings
    }

    /// View the patch as an ordinary plugin layer, ready to be loaded after
    /// its sources.
    ///
    /// Game settings are not part of the layered record kinds and are not
    /// carried over.
    pub fn to_plugin(&self) -> crate::Plugin {
        crate::Plugin::from_parts(
            self.name.clone(),
            self.projectiles.clone(),
            self.ammo.clone(),
        )
    }

    /// Total number of records in the patch
    pub fn record_count(&self) -> usize {
        self.projectiles.len() + self.ammo.len() + self.game_settings.len()
    }

    /// Whether the patch carries no records at all
    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
