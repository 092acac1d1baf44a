use crate::model::mods::{GameMods, ModSettings};

const FLASHLIGHT_MULTIPLIER: f64 = 1.12;

/// Calculate the score multiplier of the given mods at the given playback
/// rate.
///
/// Time rate mods and `Flashlight` are not taken from the static table but
/// derived from `speed` and the flashlight settings, respectively. The
/// `Lazer` mod switches to osu!lazer's rate multiplier and `ScoreV2` changes
/// the bonus for increased rates in osu!stable.
pub fn score_multiplier(mods: GameMods, speed: f64, settings: &ModSettings) -> f64 {
    let mut multiplier = (mods - GameMods::TIME_RATE - GameMods::FLASHLIGHT).score_multiplier();

    multiplier *= if mods.lazer() {
        lazer_rate_multiplier(speed)
    } else {
        stable_rate_multiplier(speed, mods.v2())
    };

    // Custom flashlight settings are already accounted for by the mod
    if mods.fl() && !settings.custom_flashlight() {
        multiplier *= FLASHLIGHT_MULTIPLIER;
    }

    multiplier
}

fn lazer_rate_multiplier(speed: f64) -> f64 {
    let value = (speed * 10.0).floor() / 10.0 - 1.0;

    if speed >= 1.0 {
        1.0 + value / 5.0
    } else {
        0.6 + value
    }
}

fn stable_rate_multiplier(speed: f64, score_v2: bool) -> f64 {
    if speed > 1.0 {
        let bonus = if score_v2 { 0.4 } else { 0.24 };

        1.0 + bonus * (speed - 1.0)
    } else if speed < 1.0 {
        if speed >= 0.75 {
            0.3 + 0.7 * (1.0 - (1.0 - speed) / 0.25)
        } else {
            (0.3 * (1.0 - (0.75 - speed) / 0.75)).max(0.0)
        }
    } else {
        1.0
    }
}
