//! Float-valued game-setting records

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::key::FormKey;

/// A float-valued game-tuning setting.
///
/// Game settings are looked up by editor id at runtime, so the editor id is
/// mandatory here, unlike on ordinary records.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameSetting {
    /// Stable identity of the record
    pub key: FormKey,
    /// Editor identifier the engine resolves the setting by
    pub editor_id: String,
    /// Setting value
    pub value: f32,
}
