//! Plugin data-file layers

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ammo::AmmoRecord;
use crate::error::{RecordError, Result};
use crate::key::FormKey;
use crate::projectile::ProjectileRecord;

/// One data-file layer contributing records to a load order.
///
/// A plugin may introduce new records or carry overriding definitions of
/// records introduced by earlier plugins; both look the same here, the form
/// key decides which is which once the plugin sits in a [`crate::LoadOrder`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Plugin {
    /// Plugin file name
    pub name: String,
    projectiles: Vec<ProjectileRecord>,
    ammo: Vec<AmmoRecord>,
}

impl Plugin {
    /// Create a new empty plugin
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            projectiles: Vec::new(),
            ammo: Vec::new(),
        }
    }

    /// Build a plugin from record lists whose keys are already known unique
    pub(crate) fn from_parts(
        name: String,
        projectiles: Vec<ProjectileRecord>,
        ammo: Vec<AmmoRecord>,
    ) -> Self {
        Self {
            name,
            projectiles,
            ammo,
        }
    }

    /// Plugin file name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a projectile record to the plugin
    ///
    /// A plugin may define each form key at most once; duplicates are
    /// rejected rather than silently shadowed.
    pub fn add_projectile(&mut self, record: ProjectileRecord) -> Result<()> {
        if self.projectiles.iter().any(|r| r.key == record.key) {
            return Err(RecordError::DuplicateRecord {
                plugin: self.name.clone(),
                key: record.key,
            });
        }
        self.projectiles.push(record);
        Ok(())
    }

    /// Add an ammunition record to the plugin
    pub fn add_ammo(&mut self, record: AmmoRecord) -> Result<()> {
        if self.ammo.iter().any(|r| r.key == record.key) {
            return Err(RecordError::DuplicateRecord {
                plugin: self.name.clone(),
                key: record.key,
            });
        }
        self.ammo.push(record);
        Ok(())
    }

    /// Projectile records defined by this plugin
    pub fn projectiles(&self) -> &[ProjectileRecord] {
        &self.projectiles
    }

    /// Ammunition records defined by this plugin
    pub fn ammo(&self) -> &[AmmoRecord] {
        &self.ammo
    }

    /// Validate internal key uniqueness, for layers built outside `add_*`
    /// (e.g. deserialized from disk)
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&FormKey> = HashSet::new();
        for key in self
            .projectiles
            .iter()
            .map(|r| &r.key)
            .chain(self.ammo.iter().map(|r| &r.key))
        {
            if !seen.insert(key) {
                return Err(RecordError::DuplicateRecord {
                    plugin: self.name.clone(),
                    key: key.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{AmmoFlags, ProjectileFlags};
    use crate::projectile::{ProjectileType, SoundLevel};

    fn proj(id: u32) -> ProjectileRecord {
        ProjectileRecord {
            key: FormKey::new("Test.esp", id),
            editor_id: None,
            display_name: None,
            kind: ProjectileType::Arrow,
            speed: 3600.0,
            gravity: 1.0,
            impact_force: 0.44,
            sound_level: SoundLevel::Normal,
            flags: ProjectileFlags::empty(),
        }
    }

    #[test]
    fn duplicate_projectile_key_is_rejected() {
        let mut plugin = Plugin::new("Test.esp");
        plugin.add_projectile(proj(1)).unwrap();
        let err = plugin.add_projectile(proj(1)).unwrap_err();
        assert!(matches!(err, RecordError::DuplicateRecord { .. }));
    }

    #[test]
    fn validate_catches_cross_kind_duplicates() {
        let mut plugin = Plugin::new("Test.esp");
        plugin.add_projectile(proj(7)).unwrap();
        plugin
            .add_ammo(AmmoRecord {
                key: FormKey::new("Test.esp", 7),
                editor_id: None,
                display_name: None,
                flags: AmmoFlags::empty(),
                damage: 0.0,
                value: 0,
                weight: 0.0,
            })
            .unwrap();
        assert!(plugin.validate().is_err());
    }
}
