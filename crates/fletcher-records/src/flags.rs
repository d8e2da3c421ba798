//! Record flag bit sets

use bitflags::bitflags;

bitflags! {
    /// Projectile record flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProjectileFlags: u16 {
        /// Instant hit, no travel time
        const HITSCAN = 0x0001;
        /// Detonates on impact
        const EXPLOSION = 0x0002;
        /// Alternate explosion trigger
        const ALT_TRIGGER = 0x0004;
        /// Shows a muzzle flash when fired
        const MUZZLE_FLASH = 0x0008;
        /// Projectile can be disabled
        const CAN_BE_DISABLED = 0x0020;
        /// Projectile can be recovered from the world
        const CAN_BE_PICKED_UP = 0x0040;
        /// Emits a supersonic crack while in flight
        const SUPERSONIC = 0x0080;
        /// Pins limbs on a critical hit
        const PINS_LIMBS = 0x0100;
        /// Passes through small transparent geometry
        const PASS_THROUGH_SMALL_TRANSPARENT = 0x0200;
        /// Disables combat aim correction for this projectile
        const DISABLE_COMBAT_AIM_CORRECTION = 0x0400;
    }
}

bitflags! {
    /// Ammunition record flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AmmoFlags: u8 {
        /// Damage ignores normal weapon resistance
        const IGNORES_NORMAL_WEAPON_RESISTANCE = 0x01;
        /// Record is not available to the player
        const NON_PLAYABLE = 0x02;
        /// Ammunition is an arrow rather than a bolt
        const NON_BOLT = 0x04;
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{AmmoFlags, ProjectileFlags};

    // Raw bits on the wire so plugin layers stay readable as plain integers.
    impl serde::Serialize for ProjectileFlags {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u16(self.bits())
        }
    }

    impl<'de> serde::Deserialize<'de> for ProjectileFlags {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bits = u16::deserialize(deserializer)?;
            Ok(Self::from_bits_retain(bits))
        }
    }

    impl serde::Serialize for AmmoFlags {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_u8(self.bits())
        }
    }

    impl<'de> serde::Deserialize<'de> for AmmoFlags {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let bits = u8::deserialize(deserializer)?;
            Ok(Self::from_bits_retain(bits))
        }
    }
}
