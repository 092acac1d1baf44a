use crate::model::stats::BeatmapStats;

/// Duration of a hit object's fade in, in milliseconds.
pub const HIT_FADE_IN: f64 = 400.0;
/// Duration of a hit object's fade out after being hit, in milliseconds.
pub const HIT_FADE_OUT: f64 = 240.0;
/// How early a hit object can be clicked, in milliseconds.
pub const HITTABLE_RANGE: f64 = 400.0;
/// Duration of a judgement's fade in, in milliseconds.
pub const RESULT_FADE_IN: f64 = 120.0;
/// Duration of a judgement's fade out, in milliseconds.
pub const RESULT_FADE_OUT: f64 = 600.0;
/// How long a hit object stays around after its end, in milliseconds.
pub const POST_EMPT: f64 = 500.0;
/// Spins between spinner bonus points in osu!lazer.
pub const LZ_SPIN_BONUS_GAP: u32 = 2;

/// Hit windows for the three judgements.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct HitWindows {
    /// Time to hit a 50 ("Meh") in milliseconds.
    pub hit50_unscaled: f64,
    /// Time to hit a 100 ("Ok") in milliseconds.
    pub hit100_unscaled: f64,
    /// Time to hit a 300 ("Great") in milliseconds.
    pub hit300_unscaled: f64,
    pub hit50: i64,
    pub hit100: i64,
    pub hit300: i64,
}

impl HitWindows {
    pub(crate) fn new(hit50: f64, hit100: f64, hit300: f64) -> Self {
        Self {
            hit50_unscaled: hit50,
            hit100_unscaled: hit100,
            hit300_unscaled: hit300,
            hit50: hit50 as i64,
            hit100: hit100 as i64,
            hit300: hit300 as i64,
        }
    }
}

/// Everything derived from a beatmap's stats, mods, and mod settings.
///
/// Timings are on the beatmap's timeline, i.e. not yet divided by
/// [`speed`](Self::speed).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DifficultyAttributes {
    /// Stats after applying `DifficultyAdjust` and custom values but before
    /// `HardRock` or `Easy`.
    pub adjusted: BeatmapStats,
    /// Stats that all timings are based on.
    pub working: BeatmapStats,
    pub circle_radius_unscaled: f64,
    /// Circle radius including osu!'s small allowance.
    pub circle_radius: f64,
    /// Time between a hit object's appearance and its start time.
    pub preempt_unscaled: f64,
    /// [`preempt_unscaled`](Self::preempt_unscaled), floored.
    pub preempt: f64,
    pub time_fade_in: f64,
    pub hit_windows: HitWindows,
    /// Rotations per second required to clear a spinner.
    pub spinner_ratio: f64,
    pub lz_spinner_min_rps: f64,
    pub lz_spinner_max_rps: f64,
    /// Playback rate implied by the mods alone.
    pub base_mod_speed: f64,
    /// Actual playback rate.
    pub speed: f64,
    /// Whether the pitch follows a custom playback rate.
    pub adjust_pitch: bool,
    /// Approach rate that would result in the same preempt at 1.0x speed.
    pub ar_real: f64,
    /// Overall difficulty that would result in the same 300 hit window at
    /// 1.0x speed.
    pub od_real: f64,
}
