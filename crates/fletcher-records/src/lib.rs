//! Record model for layered game-data plugins.
//!
//! A plugin is one data-file layer contributing projectile, ammunition and
//! game-setting records. Plugins are stacked into a [`LoadOrder`] where the
//! last-loaded definition of a record key wins; the winning view of every
//! record can be iterated exactly once per key. Patch output is collected in
//! a [`PatchPlugin`], a copy-on-write layer that supersedes earlier
//! definitions when loaded after them.
//!
//! # Examples
//!
//! ```
//! use fletcher_records::{
//!     FormKey, LoadOrder, Plugin, ProjectileFlags, ProjectileRecord, ProjectileType,
//!     SoundLevel,
//! };
//!
//! # fn main() -> Result<(), fletcher_records::RecordError> {
//! let mut base = Plugin::new("Base.esp");
//! base.add_projectile(ProjectileRecord {
//!     key: FormKey::new("Base.esp", 0x0001),
//!     editor_id: Some("IronArrowProjectile".into()),
//!     display_name: None,
//!     kind: ProjectileType::Arrow,
//!     speed: 3600.0,
//!     gravity: 1.0,
//!     impact_force: 0.44,
//!     sound_level: SoundLevel::Normal,
//!     flags: ProjectileFlags::SUPERSONIC,
//! })?;
//!
//! let mut load_order = LoadOrder::new();
//! load_order.push(base)?;
//! assert_eq!(load_order.winning_projectiles().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod ammo;
pub mod error;
pub mod flags;
pub mod gamesetting;
pub mod key;
pub mod load_order;
pub mod patch;
pub mod plugin;
pub mod projectile;

pub use ammo::AmmoRecord;
pub use error::{RecordError, Result};
pub use flags::{AmmoFlags, ProjectileFlags};
pub use gamesetting::GameSetting;
pub use key::FormKey;
pub use load_order::LoadOrder;
pub use patch::PatchPlugin;
pub use plugin::Plugin;
pub use projectile::{ProjectileRecord, ProjectileType, SoundLevel};
