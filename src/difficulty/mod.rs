use crate::{
    model::{
        mods::{GameMods, ModInfo, ModSettings},
        stats::{BeatmapStats, CustomStats},
    },
    util::float_ext::FloatExt,
};

pub use self::{
    attributes::{
        DifficultyAttributes, HitWindows, HITTABLE_RANGE, HIT_FADE_IN, HIT_FADE_OUT,
        LZ_SPIN_BONUS_GAP, POST_EMPT, RESULT_FADE_IN, RESULT_FADE_OUT,
    },
    resolve::resolve,
    score::score_multiplier,
};

pub use crate::util::difficulty::{difficulty_range, inverse_difficulty_range};

mod attributes;
mod mod_string;
mod resolve;
mod score;

/// A beatmap's stats combined with mods.
///
/// Every setter recalculates all [`DifficultyAttributes`] before returning
/// so the attributes are always in sync with stats, mods, and settings.
///
/// # Example
///
/// ```
/// use rosu_mod_stats::{Difficulty, GameMods};
///
/// let mut diff = Difficulty::new(5.0, 4.0, 8.0, 9.0);
/// diff.set_mods(GameMods::HIDDEN | GameMods::DOUBLE_TIME);
///
/// assert_eq!(diff.preempt(), 600.0);
/// assert_eq!(diff.speed(), 1.5);
/// assert_eq!(diff.mod_string(), "HDDT");
/// assert!((diff.ar_real() - 10.333).abs() < 1e-3);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Difficulty {
    base: BeatmapStats,
    custom: CustomStats,
    mods: GameMods,
    settings: ModSettings,
    attrs: DifficultyAttributes,
}

impl Difficulty {
    /// Create a new [`Difficulty`] from a beatmap's drain rate, circle size,
    /// overall difficulty, and approach rate.
    pub fn new(hp: f64, cs: f64, od: f64, ar: f64) -> Self {
        Self::from(BeatmapStats::new(hp, cs, od, ar))
    }

    fn recalculate(&mut self) {
        self.attrs = resolve(&self.base, &self.custom, self.mods, &self.settings);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            mods = %self.mods,
            speed = self.attrs.speed,
            preempt = self.attrs.preempt,
            hit300 = self.attrs.hit_windows.hit300_unscaled,
            "Recalculated difficulty"
        );
    }

    /// Replace the mods and all their settings.
    ///
    /// Configurable mods receive their default settings.
    pub fn set_mods(&mut self, mods: GameMods) {
        self.settings.clear();
        self.mods = GameMods::empty();

        self.add_mods(mods);
    }

    /// Add mods to the current ones.
    ///
    /// Configurable mods among `mods` receive their default settings,
    /// replacing previous settings of the same kind.
    pub fn add_mods(&mut self, mods: GameMods) {
        self.mods = (self.mods | mods).normalized();
        self.settings.insert_defaults(mods);

        self.recalculate();
    }

    /// Replace the mods and all their settings with those of an osu!lazer
    /// mod list.
    ///
    /// Unknown acronyms are skipped and settings that do not fit their mod
    /// fall back to the mod's defaults.
    pub fn import_mods(&mut self, mods: &[ModInfo]) {
        self.settings.clear();

        let mut composite = GameMods::empty();

        for info in mods {
            let Some(mods) = info.mods() else {
                #[cfg(feature = "tracing")]
                tracing::debug!(acronym = %info.acronym, "Skipping unknown mod");

                continue;
            };

            composite |= mods;
            self.settings.insert_parsed(mods, &info.settings);
        }

        self.mods = composite.normalized();

        self.recalculate();
    }

    /// The current mods.
    pub const fn mods(&self) -> GameMods {
        self.mods
    }

    /// Whether any of the given mods is active.
    pub fn contains_mods(&self, mods: GameMods) -> bool {
        self.mods.intersects(mods)
    }

    /// Settings of the current configurable mods.
    pub const fn settings(&self) -> &ModSettings {
        &self.settings
    }

    /// All derived attributes.
    pub const fn attributes(&self) -> &DifficultyAttributes {
        &self.attrs
    }

    /// Time between a hit object's appearance and its start time in
    /// milliseconds, floored.
    pub const fn preempt(&self) -> f64 {
        self.attrs.preempt
    }

    /// Preempt in milliseconds before the playback rate is applied.
    pub const fn preempt_unscaled(&self) -> f64 {
        self.attrs.preempt_unscaled
    }

    /// Duration of a hit object's fade-in in milliseconds.
    pub const fn time_fade_in(&self) -> f64 {
        self.attrs.time_fade_in
    }

    /// Circle radius in osu!pixels.
    pub const fn circle_radius(&self) -> f64 {
        self.attrs.circle_radius
    }

    /// Circle radius in osu!pixels without the playfield correction.
    pub const fn circle_radius_unscaled(&self) -> f64 {
        self.attrs.circle_radius_unscaled
    }

    /// All hit windows in milliseconds.
    pub const fn hit_windows(&self) -> HitWindows {
        self.attrs.hit_windows
    }

    /// Hit window for a 50 in milliseconds, truncated.
    pub const fn hit50(&self) -> i64 {
        self.attrs.hit_windows.hit50
    }

    /// Hit window for a 100 in milliseconds, truncated.
    pub const fn hit100(&self) -> i64 {
        self.attrs.hit_windows.hit100
    }

    /// Hit window for a 300 in milliseconds, truncated.
    pub const fn hit300(&self) -> i64 {
        self.attrs.hit_windows.hit300
    }

    /// Rotations per second required to clear a spinner.
    pub const fn spinner_ratio(&self) -> f64 {
        self.attrs.spinner_ratio
    }

    /// Minimum rotations per second osu!lazer requires to clear a spinner.
    pub const fn lz_spinner_min_rps(&self) -> f64 {
        self.attrs.lz_spinner_min_rps
    }

    /// Maximum rotations per second osu!lazer counts for a spinner.
    pub const fn lz_spinner_max_rps(&self) -> f64 {
        self.attrs.lz_spinner_max_rps
    }

    /// The actual playback rate.
    pub const fn speed(&self) -> f64 {
        self.attrs.speed
    }

    /// The playback rate implied by the mods alone.
    pub const fn base_mod_speed(&self) -> f64 {
        self.attrs.base_mod_speed
    }

    /// The pitch multiplier for audio playback.
    ///
    /// Only differs from `1.0` if a custom playback rate adjusts the pitch.
    pub fn pitch(&self) -> f64 {
        if self.attrs.adjust_pitch && self.attrs.speed.not_eq(1.0) {
            self.attrs.speed
        } else {
            1.0
        }
    }

    /// Convert a duration on the beatmap's timeline into wall-clock time.
    pub fn modified_time(&self, time: f64) -> f64 {
        time / self.attrs.speed
    }

    /// The approach rate as perceived with the current playback rate.
    pub const fn ar_real(&self) -> f64 {
        self.attrs.ar_real
    }

    /// The overall difficulty as perceived with the current playback rate.
    pub const fn od_real(&self) -> f64 {
        self.attrs.od_real
    }

    /// The score multiplier of the current mods and playback rate.
    pub fn score_multiplier(&self) -> f64 {
        score_multiplier(self.mods, self.attrs.speed, &self.settings)
    }
}

macro_rules! impl_stat {
    ( $( $stat:ident: $base:ident $adjusted:ident $set:ident $set_custom:ident [ $s:literal ], )* ) => {
        impl Difficulty {
            $(
                #[doc = "The beatmap's "]
                #[doc = $s]
                #[doc = "."]
                pub const fn $base(&self) -> f64 {
                    self.base.$stat
                }

                #[doc = "The "]
                #[doc = $s]
                #[doc = " after `DifficultyAdjust` and custom values, but before other mods."]
                pub const fn $adjusted(&self) -> f64 {
                    self.attrs.adjusted.$stat
                }

                #[doc = "The "]
                #[doc = $s]
                #[doc = " that all timings are based on."]
                pub const fn $stat(&self) -> f64 {
                    self.attrs.working.$stat
                }

                #[doc = "Set the beatmap's "]
                #[doc = $s]
                #[doc = " and discard a custom value."]
                pub fn $set(&mut self, value: f64) {
                    self.base.$stat = value;
                    self.custom.$stat = None;
                    self.recalculate();
                }

                #[doc = "Set the "]
                #[doc = $s]
                #[doc = " to a value that is used as is, i.e. unaffected by mods."]
                #[doc = ""]
                #[doc = "The value persists across mod changes until the matching"]
                #[doc = " non-custom setter is called."]
                pub fn $set_custom(&mut self, value: f64) {
                    self.custom.$stat = Some(value);
                    self.recalculate();
                }
            )*
        }
    };
}

impl_stat! {
    hp: base_hp adjusted_hp set_hp set_hp_custom ["drain rate"],
    cs: base_cs adjusted_cs set_cs set_cs_custom ["circle size"],
    od: base_od adjusted_od set_od set_od_custom ["overall difficulty"],
    ar: base_ar adjusted_ar set_ar set_ar_custom ["approach rate"],
}

impl From<BeatmapStats> for Difficulty {
    fn from(base: BeatmapStats) -> Self {
        let mut diff = Self {
            base,
            custom: CustomStats::default(),
            mods: GameMods::empty(),
            settings: ModSettings::default(),
            attrs: DifficultyAttributes::default(),
        };

        diff.recalculate();

        diff
    }
}

/// All stats are `5.0`.
impl Default for Difficulty {
    fn default() -> Self {
        Self::from(BeatmapStats::default())
    }
}
