use crate::{
    model::{
        mods::{GameMods, ModSettings},
        stats::{BeatmapStats, CustomStats},
    },
    util::{
        difficulty::{difficulty_range, inverse_difficulty_range},
        float_ext::FloatExt,
    },
};

use super::attributes::{DifficultyAttributes, HitWindows, HIT_FADE_IN};

const PREEMPT_MIN: f64 = 1800.0;
const PREEMPT_MID: f64 = 1200.0;
const PREEMPT_MAX: f64 = 450.0;

const HIT_300_MIN: f64 = 80.0;
const HIT_300_MID: f64 = 50.0;
const HIT_300_MAX: f64 = 20.0;

// osu! allows slightly bigger circles than the formula suggests
const CIRCLE_RADIUS_ALLOWANCE: f64 = 1.00041;

/// Calculate all [`DifficultyAttributes`].
///
/// Pure function of its arguments; calling it twice yields the same result.
pub fn resolve(
    base: &BeatmapStats,
    custom: &CustomStats,
    mods: GameMods,
    settings: &ModSettings,
) -> DifficultyAttributes {
    let mut adjusted = *base;

    if let Some(ref da) = settings.difficulty_adjust {
        adjusted = BeatmapStats {
            hp: da.drain_rate.unwrap_or(base.hp),
            cs: da.circle_size.unwrap_or(base.cs),
            od: da.overall_difficulty.unwrap_or(base.od),
            ar: da.approach_rate.unwrap_or(base.ar),
        };
    }

    let mut working = if mods.hr() {
        BeatmapStats {
            hp: (adjusted.hp * 1.4).min(10.0),
            cs: (adjusted.cs * 1.3).min(10.0),
            od: (adjusted.od * 1.4).min(10.0),
            ar: (adjusted.ar * 1.4).min(10.0),
        }
    } else if mods.ez() {
        adjusted.map(|value| value / 2.0)
    } else {
        adjusted
    };

    macro_rules! apply_custom {
        ( $( $stat:ident ),* ) => {
            $(
                if let Some(value) = custom.$stat {
                    adjusted.$stat = value;
                    working.$stat = value;
                }
            )*
        };
    }

    apply_custom!(hp, cs, od, ar);

    let circle_radius_unscaled = difficulty_range(working.cs, 54.4, 32.0, 9.6);

    let preempt_unscaled = difficulty_range(working.ar, PREEMPT_MIN, PREEMPT_MID, PREEMPT_MAX);
    let time_fade_in = HIT_FADE_IN * (preempt_unscaled / 450.0).min(1.0);

    let hit_windows = HitWindows::new(
        difficulty_range(working.od, 200.0, 150.0, 100.0),
        difficulty_range(working.od, 140.0, 100.0, 60.0),
        difficulty_range(working.od, HIT_300_MIN, HIT_300_MID, HIT_300_MAX),
    );

    let base_mod_speed = mods.clock_rate();

    let (speed, adjust_pitch) = match settings.speed {
        Some(speed) if speed.speed_change.not_eq(base_mod_speed) => {
            (speed.speed_change, speed.adjust_pitch)
        }
        _ => (base_mod_speed, false),
    };

    let ar_real = inverse_difficulty_range(
        preempt_unscaled / speed,
        PREEMPT_MIN,
        PREEMPT_MID,
        PREEMPT_MAX,
    );

    let od_real = inverse_difficulty_range(
        hit_windows.hit300_unscaled / speed,
        HIT_300_MIN,
        HIT_300_MID,
        HIT_300_MAX,
    );

    DifficultyAttributes {
        adjusted,
        working,
        circle_radius_unscaled,
        circle_radius: circle_radius_unscaled * CIRCLE_RADIUS_ALLOWANCE,
        preempt_unscaled,
        preempt: preempt_unscaled.floor(),
        time_fade_in,
        hit_windows,
        spinner_ratio: difficulty_range(working.od, 3.0, 5.0, 7.5),
        lz_spinner_min_rps: difficulty_range(working.od, 90.0, 150.0, 225.0) / 60.0,
        lz_spinner_max_rps: difficulty_range(working.od, 250.0, 380.0, 430.0) / 60.0,
        base_mod_speed,
        speed,
        adjust_pitch,
        ar_real,
        od_real,
    }
}

#[cfg(test)]
mod tests {
    use crate::model::mods::{DiffAdjustSettings, SpeedSettings};

    use super::*;

    const STATS: BeatmapStats = BeatmapStats::new(5.0, 4.0, 8.0, 9.0);

    fn resolve_mods(mods: GameMods) -> DifficultyAttributes {
        let mut settings = ModSettings::default();
        settings.insert_defaults(mods);

        resolve(&STATS, &CustomStats::default(), mods, &settings)
    }

    #[test]
    fn nomod() {
        let attrs = resolve_mods(GameMods::empty());

        assert_eq!(attrs.working, STATS);
        assert_eq!(attrs.preempt, 600.0);
        assert_eq!(attrs.time_fade_in, 400.0);
        assert_eq!(attrs.hit_windows.hit300, 32);
        assert_eq!(attrs.hit_windows.hit100, 76);
        assert_eq!(attrs.hit_windows.hit50, 120);
        assert_eq!(attrs.speed, 1.0);
        assert!((attrs.ar_real - 9.0).abs() < 1e-6, "{}", attrs.ar_real);
        assert!((attrs.od_real - 8.0).abs() < 1e-6, "{}", attrs.od_real);
    }

    #[test]
    fn hardrock_clamps() {
        let attrs = resolve_mods(GameMods::HARD_ROCK);

        assert_eq!(attrs.working.ar, 10.0);
        assert_eq!(attrs.working.od, 10.0);
        assert!((attrs.working.cs - 5.2).abs() < 1e-9);
        assert!((attrs.working.hp - 7.0).abs() < 1e-9);
        assert_eq!(attrs.adjusted, STATS);
        assert_eq!(attrs.preempt, 450.0);
    }

    #[test]
    fn hardrock_before_easy() {
        let attrs = resolve_mods(GameMods::HARD_ROCK | GameMods::EASY);

        assert_eq!(attrs.working.ar, 10.0);
    }

    #[test]
    fn easy_halves() {
        let attrs = resolve_mods(GameMods::EASY);

        assert_eq!(attrs.working, BeatmapStats::new(2.5, 2.0, 4.0, 4.5));
    }

    #[test]
    fn difficulty_adjust_before_mods() {
        let mut settings = ModSettings::default();
        settings.difficulty_adjust = Some(DiffAdjustSettings {
            circle_size: Some(5.0),
            ..Default::default()
        });

        let mods = GameMods::HARD_ROCK | GameMods::DIFFICULTY_ADJUST;
        let attrs = resolve(&STATS, &CustomStats::default(), mods, &settings);

        assert_eq!(attrs.adjusted.cs, 5.0);
        assert_eq!(attrs.working.cs, 6.5);
        assert_eq!(attrs.adjusted.ar, 9.0);
    }

    #[test]
    fn custom_values_skip_mods() {
        let custom = CustomStats {
            ar: Some(9.5),
            ..Default::default()
        };

        let attrs = resolve(&STATS, &custom, GameMods::HARD_ROCK, &ModSettings::default());

        assert_eq!(attrs.adjusted.ar, 9.5);
        assert_eq!(attrs.working.ar, 9.5);
        assert_eq!(attrs.working.od, 10.0);
    }

    #[test]
    fn doubletime() {
        let attrs = resolve_mods(GameMods::DOUBLE_TIME);

        assert_eq!(attrs.base_mod_speed, 1.5);
        assert_eq!(attrs.speed, 1.5);
        assert!(!attrs.adjust_pitch);
        assert!((attrs.ar_real - 31.0 / 3.0).abs() < 1e-6, "{}", attrs.ar_real);
        assert!((attrs.od_real - 9.777_777).abs() < 1e-4, "{}", attrs.od_real);
    }

    #[test]
    fn custom_speed() {
        let mut settings = ModSettings::default();
        settings.speed = Some(SpeedSettings::new(1.2, true));

        let attrs = resolve(
            &STATS,
            &CustomStats::default(),
            GameMods::DOUBLE_TIME,
            &settings,
        );

        assert_eq!(attrs.base_mod_speed, 1.5);
        assert_eq!(attrs.speed, 1.2);
        assert!(attrs.adjust_pitch);
    }

    #[test]
    fn spinner() {
        let attrs = resolve_mods(GameMods::empty());

        assert!((attrs.spinner_ratio - 6.5).abs() < 1e-9);
        assert!((attrs.lz_spinner_min_rps - 195.0 / 60.0).abs() < 1e-9);
        assert!((attrs.lz_spinner_max_rps - 410.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn circle_radius() {
        let attrs = resolve_mods(GameMods::empty());

        assert!((attrs.circle_radius_unscaled - 36.48).abs() < 1e-4);
        assert!((attrs.circle_radius - 36.48 * 1.00041).abs() < 1e-4);
    }

    #[test]
    fn idempotent() {
        let mods = GameMods::HARD_ROCK | GameMods::DOUBLE_TIME;
        let mut settings = ModSettings::default();
        settings.insert_defaults(mods);

        let custom = CustomStats::default();

        assert_eq!(
            resolve(&STATS, &custom, mods, &settings),
            resolve(&STATS, &custom, mods, &settings)
        );
    }
}
