//! Rules-driven patching engine for projectile and ammunition records.
//!
//! Given a [`fletcher_records::LoadOrder`] and a [`Settings`] document, a
//! [`PatchSession`] walks the winning override of every projectile and
//! ammunition record, matches each against priority-ordered tweak
//! categories, and commits a copy-on-write override into a
//! [`fletcher_records::PatchPlugin`] only when at least one field actually
//! changes.
//!
//! Category priority is strict and first-match-wins:
//! bloodcursed special > trap special > throwable > arrow > bolt. A denylist
//! entry excludes a record from every category unconditionally.
//!
//! # Examples
//!
//! ```
//! use fletcher_patch::{PatchSession, Settings};
//! use fletcher_records::{LoadOrder, PatchPlugin};
//!
//! let settings = Settings::default();
//! let load_order = LoadOrder::new();
//! let mut patch = PatchPlugin::new("ArcheryPatch.esp");
//!
//! let summary = PatchSession::new(&settings).run(&load_order, &mut patch);
//! assert_eq!(summary.total_modified(), 0);
//! ```

pub mod category;
pub mod error;
pub mod matcher;
pub mod resolver;
pub mod scanner;
pub mod session;
pub mod settings;

pub use category::TweakCategory;
pub use error::{Error, Result};
pub use matcher::IdMatcher;
pub use resolver::{ChangeSet, Resolver};
pub use scanner::{OverrideScanner, PatchCounters};
pub use session::{PatchSession, Summary};
pub use settings::{
    AmmoTweaks, GameTweaks, MiscTweaks, ProjectileStats, ProjectileTweaks, Settings,
};
