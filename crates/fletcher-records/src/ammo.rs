//! Ammunition records

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flags::AmmoFlags;
use crate::key::FormKey;

/// An ammunition record as seen by the patcher
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmmoRecord {
    /// Stable identity of the record
    pub key: FormKey,
    /// Editor identifier, if the record carries one
    #[cfg_attr(feature = "serde", serde(default))]
    pub editor_id: Option<String>,
    /// Localized display name, if any
    #[cfg_attr(feature = "serde", serde(default))]
    pub display_name: Option<String>,
    /// Record flags
    #[cfg_attr(feature = "serde", serde(default))]
    pub flags: AmmoFlags,
    /// Base damage
    pub damage: f32,
    /// Gold value
    pub value: u32,
    /// Carry weight
    pub weight: f32,
}

impl AmmoRecord {
    /// Editor identifier of the record, if present
    pub fn editor_id(&self) -> Option<&str> {
        self.editor_id.as_deref()
    }

    /// Whether the record is hidden from the player
    pub fn is_non_playable(&self) -> bool {
        self.flags.contains(AmmoFlags::NON_PLAYABLE)
    }

    /// Whether the ammunition is a crossbow bolt (the non-bolt flag marks arrows)
    pub fn is_bolt(&self) -> bool {
        !self.flags.contains(AmmoFlags::NON_BOLT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ammo(flags: AmmoFlags) -> AmmoRecord {
        AmmoRecord {
            key: FormKey::new("Base.esp", 0x10),
            editor_id: Some("IronArrow".into()),
            display_name: Some("Iron Arrow".into()),
            flags,
            damage: 8.0,
            value: 1,
            weight: 0.0,
        }
    }

    #[test]
    fn non_bolt_flag_marks_arrows() {
        assert!(!ammo(AmmoFlags::NON_BOLT).is_bolt());
        assert!(ammo(AmmoFlags::empty()).is_bolt());
    }

    #[test]
    fn non_playable_accessor_reads_flag() {
        assert!(ammo(AmmoFlags::NON_PLAYABLE).is_non_playable());
        assert!(!ammo(AmmoFlags::NON_BOLT).is_non_playable());
    }
}
