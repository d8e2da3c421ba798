//! Priority-ordered rule resolution for projectile records

use fletcher_records::{ProjectileFlags, ProjectileRecord, ProjectileType, SoundLevel};

use crate::category::TweakCategory;
use crate::matcher::contains_ignore_case;
use crate::settings::{ProjectileStats, Settings};

/// Label fragment that routes trap projectiles into the special trap rules
const TRAP_ID_FRAGMENT: &str = "Trap";

/// Label fragment selecting the ballista-trap literal stats
const BALLISTA_ID_FRAGMENT: &str = "TrapDweBallista";

/// Display name forced onto ballista trap bolts
const BALLISTA_DISPLAY_NAME: &str = "Ballista Trap Bolt";

/// Literal stats for ballista trap bolts
const BALLISTA_STATS: ProjectileStats = ProjectileStats {
    speed: 6400.0,
    gravity: 0.69,
    impact_force: 75.0,
    sound_level: SoundLevel::VeryLoud,
};

/// Literal stats for every other trap projectile
const TRAP_STATS: ProjectileStats = ProjectileStats {
    speed: 3000.0,
    gravity: 0.0,
    impact_force: 0.2,
    sound_level: SoundLevel::Normal,
};

/// The outcome of applying one rule category to a record copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeSet {
    /// Category whose rule produced the change set
    pub category: TweakCategory,
    /// Number of fields whose value actually changed
    pub fields_changed: u32,
}

/// Matches projectile records against the configured rule categories and
/// produces patched copies.
///
/// The resolver is a pure function of one record plus the configuration: it
/// never touches shared state, so record iteration order cannot affect any
/// single record's outcome.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    settings: &'a Settings,
}

impl<'a> Resolver<'a> {
    /// Create a resolver over a configuration
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Pre-filter combining the type and denylist gates.
    ///
    /// Only labeled arrows and (when trap patching is on) labeled
    /// trap missiles can ever be patch targets; everything else is skipped
    /// before per-category matching runs.
    pub fn is_valid_patch_target(&self, record: &ProjectileRecord) -> bool {
        let Some(id) = record.editor_id() else {
            return false;
        };
        if self.settings.denylist.is_match(id) {
            return false;
        }
        match record.kind {
            ProjectileType::Arrow => true,
            ProjectileType::Missile => {
                self.settings.misc.patch_traps && contains_ignore_case(id, TRAP_ID_FRAGMENT)
            }
            _ => false,
        }
    }

    /// Whether a category is switched on in the configuration
    pub fn category_enabled(&self, category: TweakCategory) -> bool {
        let s = self.settings;
        match category {
            TweakCategory::Bloodcursed => {
                s.arrows.enabled && !s.misc.bloodcursed_ids.is_empty()
            }
            TweakCategory::Trap => s.misc.patch_traps,
            TweakCategory::Throwable => s.throwables.enabled,
            TweakCategory::Arrow => s.arrows.enabled,
            TweakCategory::Bolt => s.bolts.enabled,
        }
    }

    /// Pure qualification predicate for one category.
    ///
    /// The denylist wins unconditionally: a denylisted record matches no
    /// category, whatever else is configured.
    pub fn category_matches(&self, category: TweakCategory, record: &ProjectileRecord) -> bool {
        let Some(id) = record.editor_id() else {
            return false;
        };
        if self.settings.denylist.is_match(id) {
            return false;
        }
        let s = self.settings;
        match category {
            TweakCategory::Bloodcursed => s
                .misc
                .bloodcursed_ids
                .iter()
                .any(|b| b.eq_ignore_ascii_case(id)),
            TweakCategory::Trap => {
                record.kind == ProjectileType::Missile && contains_ignore_case(id, TRAP_ID_FRAGMENT)
            }
            TweakCategory::Throwable => s.throwables.matches.is_match(id),
            TweakCategory::Arrow => {
                record.kind == ProjectileType::Arrow
                    && (s.arrows.matches.is_empty() || s.arrows.matches.is_match(id))
            }
            TweakCategory::Bolt => s.bolts.matches.is_match(id),
        }
    }

    /// Resolve the first matching category and apply its rule to a copy.
    ///
    /// Returns `None` when no enabled category matches; the record is left
    /// untouched. A returned change set may still carry a count of zero when
    /// every field already sat at its target value, in which case callers
    /// must not commit the copy.
    pub fn resolve(&self, record: &ProjectileRecord) -> Option<(ProjectileRecord, ChangeSet)> {
        let id = record.editor_id()?;
        for category in TweakCategory::PRIORITY {
            if !self.category_enabled(category) || !self.category_matches(category, record) {
                continue;
            }
            let mut patched = record.clone();
            let mut changed = self.apply_category(category, id, &mut patched);
            changed += self.clear_supersonic(&mut patched);
            return Some((
                patched,
                ChangeSet {
                    category,
                    fields_changed: changed,
                },
            ));
        }
        None
    }

    fn apply_category(
        &self,
        category: TweakCategory,
        editor_id: &str,
        record: &mut ProjectileRecord,
    ) -> u32 {
        let s = self.settings;
        match category {
            TweakCategory::Bloodcursed => {
                let mut stats = s.arrows.stats;
                if s.misc.bloodcursed_disable_gravity {
                    stats.gravity = 0.0;
                }
                apply_stats(record, &stats)
            }
            TweakCategory::Trap => {
                if contains_ignore_case(editor_id, BALLISTA_ID_FRAGMENT) {
                    apply_stats(record, &BALLISTA_STATS)
                        + set_display_name(record, BALLISTA_DISPLAY_NAME)
                } else {
                    apply_stats(record, &TRAP_STATS)
                }
            }
            TweakCategory::Throwable => apply_stats(record, &s.throwables.stats),
            TweakCategory::Arrow => apply_stats(record, &s.arrows.stats),
            TweakCategory::Bolt => apply_stats(record, &s.bolts.stats),
        }
    }

    /// Clear the supersonic flag when configured; counts as one more field
    /// change whichever category matched
    fn clear_supersonic(&self, record: &mut ProjectileRecord) -> u32 {
        if self.settings.misc.disable_supersonic && record.has_supersonic() {
            record.flags.remove(ProjectileFlags::SUPERSONIC);
            1
        } else {
            0
        }
    }
}

/// Assign a stats bundle field by field, counting fields that actually change
fn apply_stats(record: &mut ProjectileRecord, stats: &ProjectileStats) -> u32 {
    let mut changed = 0;
    if record.speed != stats.speed {
        record.speed = stats.speed;
        changed += 1;
    }
    if record.gravity != stats.gravity {
        record.gravity = stats.gravity;
        changed += 1;
    }
    if record.impact_force != stats.impact_force {
        record.impact_force = stats.impact_force;
        changed += 1;
    }
    if record.sound_level != stats.sound_level {
        record.sound_level = stats.sound_level;
        changed += 1;
    }
    changed
}

/// Force a literal display name, counting the change when it differs
fn set_display_name(record: &mut ProjectileRecord, name: &str) -> u32 {
    if record.display_name.as_deref() == Some(name) {
        0
    } else {
        record.display_name = Some(name.to_string());
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fletcher_records::FormKey;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn arrow(editor_id: &str) -> ProjectileRecord {
        ProjectileRecord {
            key: FormKey::new("Base.esp", 0x100),
            editor_id: Some(editor_id.into()),
            display_name: None,
            kind: ProjectileType::Arrow,
            speed: 3600.0,
            gravity: 1.0,
            impact_force: 0.44,
            sound_level: SoundLevel::Normal,
            flags: ProjectileFlags::SUPERSONIC,
        }
    }

    fn missile(editor_id: &str) -> ProjectileRecord {
        ProjectileRecord {
            kind: ProjectileType::Missile,
            flags: ProjectileFlags::empty(),
            ..arrow(editor_id)
        }
    }

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.misc.bloodcursed_ids = vec!["DLC1ElvenArrowBloodProjectile".into()];
        settings
    }

    #[test]
    fn resolves_plain_arrow_through_arrow_category() {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let (patched, change) = resolver.resolve(&arrow("IronArrowProjectile")).unwrap();
        assert_eq!(change.category, TweakCategory::Arrow);
        assert_eq!(patched.speed, settings.arrows.stats.speed);
        assert_eq!(patched.sound_level, settings.arrows.stats.sound_level);
    }

    #[test]
    fn resolution_is_idempotent() {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let (patched, first) = resolver.resolve(&arrow("IronArrowProjectile")).unwrap();
        assert!(first.fields_changed > 0);
        let (_, second) = resolver.resolve(&patched).unwrap();
        assert_eq!(second.fields_changed, 0);
    }

    #[test]
    fn denylist_beats_every_category() {
        let mut settings = settings();
        settings.denylist = crate::matcher::IdMatcher::from_ids(["DLC1ElvenArrowBloodProjectile"]);
        let resolver = Resolver::new(&settings);
        let record = arrow("DLC1ElvenArrowBloodProjectile");
        for category in TweakCategory::PRIORITY {
            assert!(!resolver.category_matches(category, &record));
        }
        assert!(resolver.resolve(&record).is_none());
        assert!(!resolver.is_valid_patch_target(&record));
    }

    #[test]
    fn bloodcursed_outranks_generic_arrow() {
        let mut settings = settings();
        settings.misc.bloodcursed_disable_gravity = true;
        let resolver = Resolver::new(&settings);
        let record = arrow("DLC1ElvenArrowBloodProjectile");
        let (patched, change) = resolver.resolve(&record).unwrap();
        assert_eq!(change.category, TweakCategory::Bloodcursed);
        // Arrow stats apply, except gravity is forced off.
        assert_eq!(patched.speed, settings.arrows.stats.speed);
        assert_eq!(patched.gravity, 0.0);
    }

    #[test]
    fn bloodcursed_keeps_gravity_when_variant_disabled() {
        let mut settings = settings();
        settings.misc.bloodcursed_disable_gravity = false;
        let resolver = Resolver::new(&settings);
        let (patched, change) = resolver
            .resolve(&arrow("DLC1ElvenArrowBloodProjectile"))
            .unwrap();
        assert_eq!(change.category, TweakCategory::Bloodcursed);
        assert_eq!(patched.gravity, settings.arrows.stats.gravity);
    }

    #[test]
    fn first_match_wins_between_throwable_and_bolt() {
        let mut settings = settings();
        settings.throwables.enabled = true;
        settings.throwables.matches =
            crate::matcher::IdMatcher::from_substrings(["SpearBolt"]);
        settings.bolts.matches = crate::matcher::IdMatcher::from_substrings(["Bolt"]);
        let resolver = Resolver::new(&settings);
        // Matches both categories; throwable has the higher priority.
        let (patched, change) = resolver.resolve(&arrow("SSM_SpearBoltProjectile")).unwrap();
        assert_eq!(change.category, TweakCategory::Throwable);
        assert_eq!(patched.speed, settings.throwables.stats.speed);
    }

    #[test]
    fn supersonic_clear_adds_to_the_change_count() {
        let mut settings = settings();
        settings.misc.disable_supersonic = true;
        let resolver = Resolver::new(&settings);
        let record = arrow("IronArrowProjectile");
        let (with_flag, change) = resolver.resolve(&record).unwrap();
        assert!(!with_flag.has_supersonic());

        settings.misc.disable_supersonic = false;
        let resolver = Resolver::new(&settings);
        let (_, without_clear) = resolver.resolve(&record).unwrap();
        assert_eq!(change.fields_changed, without_clear.fields_changed + 1);
    }

    #[test]
    fn ballista_trap_gets_literal_stats_and_name() {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let record = missile("TrapDweBallista01");
        assert!(resolver.is_valid_patch_target(&record));
        let (patched, change) = resolver.resolve(&record).unwrap();
        assert_eq!(change.category, TweakCategory::Trap);
        assert_eq!(patched.speed, 6400.0);
        assert_eq!(patched.gravity, 0.69);
        assert_eq!(patched.impact_force, 75.0);
        assert_eq!(patched.sound_level, SoundLevel::VeryLoud);
        assert_eq!(patched.display_name.as_deref(), Some("Ballista Trap Bolt"));
        assert!(change.fields_changed >= 5);
    }

    #[test]
    fn generic_trap_gets_the_generic_literals() {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let (patched, change) = resolver.resolve(&missile("TrapDart01")).unwrap();
        assert_eq!(change.category, TweakCategory::Trap);
        assert_eq!(patched.speed, 3000.0);
        assert_eq!(patched.gravity, 0.0);
        assert_eq!(patched.impact_force, 0.2);
        assert_eq!(patched.sound_level, SoundLevel::Normal);
        assert_eq!(patched.display_name, None);
    }

    #[test]
    fn disabled_trap_patching_skips_trap_missiles() {
        let mut settings = settings();
        settings.misc.patch_traps = false;
        let resolver = Resolver::new(&settings);
        let record = missile("TrapDweBallista01");
        assert!(!resolver.is_valid_patch_target(&record));
        assert!(resolver.resolve(&record).is_none());
    }

    #[test_case(ProjectileType::Beam; "beam")]
    #[test_case(ProjectileType::Flame; "flame")]
    #[test_case(ProjectileType::Cone; "cone")]
    fn non_arrow_non_missile_types_are_never_targets(kind: ProjectileType) {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let record = ProjectileRecord {
            kind,
            ..arrow("TrapFireball")
        };
        assert!(!resolver.is_valid_patch_target(&record));
    }

    #[test]
    fn unlabeled_records_resolve_to_nothing() {
        let settings = settings();
        let resolver = Resolver::new(&settings);
        let record = ProjectileRecord {
            editor_id: None,
            ..arrow("ignored")
        };
        assert!(!resolver.is_valid_patch_target(&record));
        assert!(resolver.resolve(&record).is_none());
    }

    #[test]
    fn arrow_allowlist_restricts_when_configured() {
        let mut settings = settings();
        settings.arrows.matches = crate::matcher::IdMatcher::from_substrings(["Elven"]);
        let resolver = Resolver::new(&settings);
        assert!(resolver.category_matches(TweakCategory::Arrow, &arrow("ElvenArrowProjectile")));
        assert!(!resolver.category_matches(TweakCategory::Arrow, &arrow("IronArrowProjectile")));
    }

    #[test]
    fn bolt_category_requires_a_configured_list() {
        let mut settings = settings();
        settings.bolts.matches = crate::matcher::IdMatcher::default();
        let resolver = Resolver::new(&settings);
        assert!(!resolver.category_matches(TweakCategory::Bolt, &arrow("SteelBoltProjectile")));
    }
}
