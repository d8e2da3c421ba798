//! Winning-override scans committing copy-on-write patches

use fletcher_records::{LoadOrder, PatchPlugin};

use crate::category::TweakCategory;
use crate::resolver::Resolver;
use crate::settings::Settings;

/// Per-category counters of committed overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatchCounters {
    /// Bloodcursed arrows patched
    pub bloodcursed: usize,
    /// Trap projectiles patched
    pub traps: usize,
    /// Throwables patched
    pub throwables: usize,
    /// Arrows patched
    pub arrows: usize,
    /// Bolts patched
    pub bolts: usize,
    /// Arrow ammunition records patched
    pub arrow_ammo: usize,
    /// Bolt ammunition records patched
    pub bolt_ammo: usize,
}

impl PatchCounters {
    /// Total committed record overrides across all categories
    pub fn total(&self) -> usize {
        self.bloodcursed
            + self.traps
            + self.throwables
            + self.arrows
            + self.bolts
            + self.arrow_ammo
            + self.bolt_ammo
    }

    fn bump(&mut self, category: TweakCategory) {
        match category {
            TweakCategory::Bloodcursed => self.bloodcursed += 1,
            TweakCategory::Trap => self.traps += 1,
            TweakCategory::Throwable => self.throwables += 1,
            TweakCategory::Arrow => self.arrows += 1,
            TweakCategory::Bolt => self.bolts += 1,
        }
    }
}

/// Scans the winning view of each record kind and commits overrides.
///
/// Commits are conditional: a resolved copy is written back only when its
/// change count is positive, so an already-patched load order produces an
/// empty patch.
#[derive(Debug, Clone, Copy)]
pub struct OverrideScanner<'a> {
    settings: &'a Settings,
    resolver: Resolver<'a>,
}

impl<'a> OverrideScanner<'a> {
    /// Create a scanner over a configuration
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            settings,
            resolver: Resolver::new(settings),
        }
    }

    /// Scan every winning projectile record once, committing changed copies.
    ///
    /// Returns the number of overrides committed by this pass.
    pub fn scan_projectiles(
        &self,
        load_order: &LoadOrder,
        patch: &mut PatchPlugin,
        counters: &mut PatchCounters,
    ) -> usize {
        let mut committed = 0;
        for record in load_order.winning_projectiles() {
            if !self.resolver.is_valid_patch_target(record) {
                continue;
            }
            let Some((patched, change)) = self.resolver.resolve(record) else {
                if self.settings.verbose {
                    log::debug!(
                        "Skipping projectile \"{}\": no category matched",
                        record.editor_id().unwrap_or_default()
                    );
                }
                continue;
            };
            if change.fields_changed == 0 {
                log::debug!(
                    "Skipping projectile \"{}\": already at target values",
                    record.editor_id().unwrap_or_default()
                );
                continue;
            }
            log::info!(
                "Patched {} \"{}\" ({} field(s))",
                change.category,
                record.editor_id().unwrap_or_default(),
                change.fields_changed
            );
            patch.set_projectile_override(patched);
            counters.bump(change.category);
            committed += 1;
        }
        committed
    }

    /// Scan every winning ammunition record once, committing changed copies.
    ///
    /// Unlabeled and non-playable records are structurally invalid targets
    /// and never reach the rule tables. The arrow/bolt discriminator flag
    /// selects which table applies.
    pub fn scan_ammunition(
        &self,
        load_order: &LoadOrder,
        patch: &mut PatchPlugin,
        counters: &mut PatchCounters,
    ) -> usize {
        let mut committed = 0;
        for record in load_order.winning_ammunition() {
            let Some(id) = record.editor_id() else {
                continue;
            };
            if record.is_non_playable() {
                continue;
            }
            let is_bolt = record.is_bolt();
            let tweaks = if is_bolt {
                &self.settings.bolt_ammo
            } else {
                &self.settings.arrow_ammo
            };
            if !tweaks.is_active() {
                continue;
            }
            let (patched, fields_changed) = tweaks.apply_to(record);
            if fields_changed == 0 {
                log::debug!("Skipping ammo \"{id}\": already at target values");
                continue;
            }
            log::info!(
                "Patched {} ammo \"{id}\" ({fields_changed} field(s))",
                if is_bolt { "bolt" } else { "arrow" }
            );
            patch.set_ammo_override(patched);
            if is_bolt {
                counters.bolt_ammo += 1;
            } else {
                counters.arrow_ammo += 1;
            }
            committed += 1;
        }
        committed
    }
}
