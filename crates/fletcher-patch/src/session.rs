//! Patch session orchestration

use std::fmt;

use fletcher_records::{LoadOrder, PatchPlugin};

use crate::scanner::{OverrideScanner, PatchCounters};
use crate::settings::Settings;

/// Auto-aim settings forced to zero by the auto-aim toggle
const AUTOAIM_SETTINGS: [&str; 4] = [
    "fAutoAimMaxDegrees",
    "fAutoAimMaxDistance",
    "fAutoAimScreenPercentage",
    "fAutoAimMaxDegrees3rdPerson",
];

/// Dodge-chance setting zeroed by the combat-dodge fix
const DODGE_SETTING: &str = "fCombatDodgeChanceMax";

/// Outcome of one patch run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Per-category committed-override counters
    pub counters: PatchCounters,
    /// Number of game settings added by the global toggles
    pub game_settings_added: usize,
}

impl Summary {
    /// Total number of record overrides committed across both scans
    pub fn total_modified(&self) -> usize {
        self.counters.total()
    }

    /// Whether the run changed nothing at all
    pub fn is_noop(&self) -> bool {
        self.total_modified() == 0 && self.game_settings_added == 0
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.counters;
        writeln!(f, "Bloodcursed arrows: {}", c.bloodcursed)?;
        writeln!(f, "Trap projectiles:   {}", c.traps)?;
        writeln!(f, "Throwables:         {}", c.throwables)?;
        writeln!(f, "Arrows:             {}", c.arrows)?;
        writeln!(f, "Bolts:              {}", c.bolts)?;
        writeln!(f, "Arrow ammunition:   {}", c.arrow_ammo)?;
        writeln!(f, "Bolt ammunition:    {}", c.bolt_ammo)?;
        writeln!(f, "Game settings:      {}", self.game_settings_added)?;
        write!(f, "Total records:      {}", self.total_modified())
    }
}

/// Drives a complete patch run over a load order.
///
/// A session borrows its configuration for exactly one invocation; there is
/// no global state, and the record scans are independent of each other.
#[derive(Debug, Clone, Copy)]
pub struct PatchSession<'a> {
    settings: &'a Settings,
}

impl<'a> PatchSession<'a> {
    /// Create a session over a configuration
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Run the patch pass: global game settings first, then the ammunition
    /// scan (only when an ammo table is active), then the projectile scan.
    pub fn run(&self, load_order: &LoadOrder, patch: &mut PatchPlugin) -> Summary {
        if self.settings.verbose {
            self.log_configuration();
        }
        log::info!("Beginning patch pass over {} plugin(s)", load_order.len());

        let game_settings_added = self.apply_game_settings(patch);

        let scanner = OverrideScanner::new(self.settings);
        let mut counters = PatchCounters::default();
        if self.settings.ammo_active() {
            let committed = scanner.scan_ammunition(load_order, patch, &mut counters);
            log::info!("Ammunition scan committed {committed} override(s)");
        } else {
            log::debug!("No ammunition table active, skipping ammunition scan");
        }
        let committed = scanner.scan_projectiles(load_order, patch, &mut counters);
        log::info!("Projectile scan committed {committed} override(s)");

        let summary = Summary {
            counters,
            game_settings_added,
        };
        if summary.is_noop() {
            log::warn!("No records were modified");
        }
        summary
    }

    /// Each enabled toggle fires a fixed set of game-setting edits; each edit
    /// is one float setting forced to 0.0
    fn apply_game_settings(&self, patch: &mut PatchPlugin) -> usize {
        let mut added = 0;
        if self.settings.game.disable_autoaim {
            for editor_id in AUTOAIM_SETTINGS {
                patch.add_game_setting(editor_id, 0.0);
                added += 1;
            }
            log::info!("Removed auto-aim");
        }
        if self.settings.game.fix_combat_dodge {
            patch.add_game_setting(DODGE_SETTING, 0.0);
            added += 1;
            log::info!("Patched the combat dodge bug");
        }
        added
    }

    fn log_configuration(&self) {
        let s = self.settings;
        log::info!("Remove auto-aim:        {}", s.game.disable_autoaim);
        log::info!("Fix combat dodge:       {}", s.game.fix_combat_dodge);
        log::info!("Remove supersonic:      {}", s.misc.disable_supersonic);
        log::info!("Patch trap projectiles: {}", s.misc.patch_traps);
        log::info!("Arrow tweaks enabled:   {}", s.arrows.enabled);
        log::info!("Bolt tweaks enabled:    {}", s.bolts.enabled);
        log::info!("Throwables enabled:     {}", s.throwables.enabled);
        log::info!(
            "Denylist:               {:?} + {:?}",
            s.denylist.substrings,
            s.denylist.ids
        );
    }
}
