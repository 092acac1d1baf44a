use rosu_mod_stats::{model::mods::ModInfo, GameMods};

use crate::common::{assert_approx, difficulty};

mod common;

const TOLERANCE: f64 = 1e-9;

fn multiplier(mods: GameMods) -> f64 {
    let mut diff = difficulty();
    diff.set_mods(mods);

    diff.score_multiplier()
}

fn imported_multiplier(mods: &[ModInfo]) -> f64 {
    let mut diff = difficulty();
    diff.import_mods(mods);

    diff.score_multiplier()
}

#[test]
fn nomod() {
    assert_approx(multiplier(GameMods::empty()), 1.0, TOLERANCE);
    assert_approx(multiplier(GameMods::LAZER), 1.0, TOLERANCE);
}

#[test]
fn static_weights() {
    assert_approx(multiplier(GameMods::HIDDEN), 1.06, TOLERANCE);
    assert_approx(
        multiplier(GameMods::HIDDEN | GameMods::HARD_ROCK),
        1.06 * 1.06,
        TOLERANCE,
    );
    assert_approx(
        multiplier(GameMods::NO_FAIL | GameMods::SPUN_OUT),
        0.45,
        TOLERANCE,
    );
    assert_approx(multiplier(GameMods::RELAX), 0.0, TOLERANCE);
}

#[test]
fn flashlight_default() {
    assert_approx(multiplier(GameMods::FLASHLIGHT), 1.12, TOLERANCE);
    assert_approx(
        imported_multiplier(&[ModInfo::new("FL")]),
        1.12,
        TOLERANCE,
    );
}

#[test]
fn flashlight_custom() {
    let mods = [ModInfo::new("FL").with_setting("size_multiplier", 1.5)];

    assert_approx(imported_multiplier(&mods), 1.0, TOLERANCE);
}

#[test]
fn flashlight_default_values_explicitly() {
    let mods = [ModInfo::new("FL")
        .with_setting("follow_delay", 120.0)
        .with_setting("combo_based_size", true)];

    assert_approx(imported_multiplier(&mods), 1.12, TOLERANCE);
}

#[test]
fn stable_rates() {
    assert_approx(multiplier(GameMods::DOUBLE_TIME), 1.12, TOLERANCE);
    assert_approx(multiplier(GameMods::NIGHTCORE), 1.12, TOLERANCE);
    assert_approx(
        multiplier(GameMods::DOUBLE_TIME | GameMods::SCORE_V2),
        1.2,
        TOLERANCE,
    );
    assert_approx(multiplier(GameMods::HALF_TIME), 0.3, TOLERANCE);
    assert_approx(
        multiplier(GameMods::HIDDEN | GameMods::DOUBLE_TIME | GameMods::FLASHLIGHT),
        1.06 * 1.12 * 1.12,
        TOLERANCE,
    );
}

#[test]
fn stable_custom_rates() {
    let slow = [ModInfo::new("HT").with_setting("speed_change", 0.5)];
    assert_approx(imported_multiplier(&slow), 0.2, TOLERANCE);

    let fast = [ModInfo::new("DT").with_setting("speed_change", 2.0)];
    assert_approx(imported_multiplier(&fast), 1.24, TOLERANCE);
}

#[test]
fn lazer_rates() {
    assert_approx(
        multiplier(GameMods::LAZER | GameMods::DOUBLE_TIME),
        1.1,
        TOLERANCE,
    );
    assert_approx(
        multiplier(GameMods::LAZER | GameMods::HALF_TIME),
        0.3,
        TOLERANCE,
    );

    let mut diff = difficulty();
    diff.add_mods(GameMods::LAZER);
    diff.import_mods(&[ModInfo::new("DT").with_setting("speed_change", 1.35)]);

    // Importing replaces all mods, including `Lazer`
    assert_approx(diff.score_multiplier(), 1.0 + 0.24 * 0.35, TOLERANCE);

    diff.add_mods(GameMods::LAZER);
    assert_approx(diff.score_multiplier(), 1.06, TOLERANCE);
}
