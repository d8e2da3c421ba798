//! Stable record identity

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies one logical record across an entire load order.
///
/// A record is defined by the plugin that introduced it plus the record's
/// local form id within that plugin. Later plugins override a record by
/// carrying a definition with the same `FormKey`; the key itself never
/// changes, no matter how many layers redefine the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormKey {
    /// Name of the plugin that introduced the record
    pub plugin: String,
    /// Local form id within the originating plugin
    pub id: u32,
}

impl FormKey {
    /// Create a new form key
    pub fn new(plugin: impl Into<String>, id: u32) -> Self {
        Self {
            plugin: plugin.into(),
            id,
        }
    }
}

impl fmt::Display for FormKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:06X}", self.plugin, self.id)
    }
}
