//! Load-order resolution across plugin layers
//!
//! Plugins later in the load order override records defined by earlier ones.
//! The winning view of a record kind yields, for every form key defined
//! anywhere in the order, the definition from the last plugin that carries
//! it, exactly once per key.

use std::collections::HashMap;

use crate::ammo::AmmoRecord;
use crate::error::{RecordError, Result};
use crate::key::FormKey;
use crate::plugin::Plugin;
use crate::projectile::ProjectileRecord;

/// An ordered stack of plugins where position decides override priority
///
/// # Examples
///
/// ```
/// use fletcher_records::{LoadOrder, Plugin};
///
/// # fn main() -> Result<(), fletcher_records::RecordError> {
/// let mut load_order = LoadOrder::new();
/// load_order.push(Plugin::new("Base.esp"))?;
/// load_order.push(Plugin::new("Expansion.esp"))?;
/// load_order.push(Plugin::new("TweaksMod.esp"))?;
///
/// // TweaksMod.esp wins any record it redefines
/// assert_eq!(load_order.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoadOrder {
    plugins: Vec<Plugin>,
}

impl LoadOrder {
    /// Create a new empty load order
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Append a plugin at the end of the order (highest priority so far)
    pub fn push(&mut self, plugin: Plugin) -> Result<()> {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            return Err(RecordError::DuplicatePlugin(plugin.name().to_string()));
        }
        plugin.validate()?;
        self.plugins.push(plugin);
        Ok(())
    }

    /// Number of plugins in the order
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether the order contains no plugins
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    /// Plugins in load order (earliest first)
    pub fn plugins(&self) -> &[Plugin] {
        &self.plugins
    }

    /// Winning projectile override for a specific key, if any plugin defines it
    pub fn winning_projectile(&self, key: &FormKey) -> Option<&ProjectileRecord> {
        self.plugins
            .iter()
            .rev()
            .find_map(|p| p.projectiles().iter().find(|r| &r.key == key))
    }

    /// Winning ammunition override for a specific key, if any plugin defines it
    pub fn winning_ammo(&self, key: &FormKey) -> Option<&AmmoRecord> {
        self.plugins
            .iter()
            .rev()
            .find_map(|p| p.ammo().iter().find(|r| &r.key == key))
    }

    /// Winning view of all projectile records
    ///
    /// Every form key defined anywhere in the order appears exactly once,
    /// carrying the definition from the last plugin that defines it. Order is
    /// stable: keys appear in first-definition order.
    pub fn winning_projectiles(&self) -> Vec<&ProjectileRecord> {
        Self::winning_view(self.plugins.iter().flat_map(|p| p.projectiles()))
    }

    /// Winning view of all ammunition records, analogous to
    /// [`winning_projectiles`](Self::winning_projectiles)
    pub fn winning_ammunition(&self) -> Vec<&AmmoRecord> {
        Self::winning_view(self.plugins.iter().flat_map(|p| p.ammo()))
    }

    fn winning_view<'a, R>(records: impl Iterator<Item = &'a R>) -> Vec<&'a R>
    where
        R: Keyed,
    {
        let mut index: HashMap<&FormKey, usize> = HashMap::new();
        let mut winners: Vec<&R> = Vec::new();
        for record in records {
            match index.get(record.form_key()) {
                // Later definition of a known key replaces the earlier one
                // in place, preserving first-definition order.
                Some(&slot) => winners[slot] = record,
                None => {
                    index.insert(record.form_key(), winners.len());
                    winners.push(record);
                }
            }
        }
        winners
    }
}

/// Records addressable by form key
trait Keyed {
    fn form_key(&self) -> &FormKey;
}

impl Keyed for ProjectileRecord {
    fn form_key(&self) -> &FormKey {
        &self.key
    }
}

impl Keyed for AmmoRecord {
    fn form_key(&self) -> &FormKey {
        &self.key
    }
}
