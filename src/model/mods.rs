use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use bitflags::bitflags;

pub use self::{
    acronym::ParseGameModsError,
    info::ModInfo,
    settings::{
        ClassicSettings, DiffAdjustSettings, EasySettings, FlashlightSettings, ModSettings,
        SpeedSettings,
    },
};

use self::acronym::MOD_DEFINITIONS;

mod acronym;
mod info;
mod settings;

bitflags! {
    /// Set of gameplay mods.
    ///
    /// Bits below 32 match the legacy osu! mod bits, e.g. `64` is
    /// `DoubleTime`. Mods that only exist in osu!lazer live above that.
    ///
    /// The set itself does not reject contradictory combinations such as
    /// `HardRock | Easy`; calculations simply use whatever bits are set.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct GameMods: u64 {
        const NO_FAIL = 1 << 0;
        const EASY = 1 << 1;
        const TOUCH_DEVICE = 1 << 2;
        const HIDDEN = 1 << 3;
        const HARD_ROCK = 1 << 4;
        const SUDDEN_DEATH = 1 << 5;
        const DOUBLE_TIME = 1 << 6;
        const RELAX = 1 << 7;
        const HALF_TIME = 1 << 8;
        const NIGHTCORE = 1 << 9;
        const FLASHLIGHT = 1 << 10;
        const AUTOPLAY = 1 << 11;
        const SPUN_OUT = 1 << 12;
        const AUTOPILOT = 1 << 13;
        const PERFECT = 1 << 14;
        const SCORE_V2 = 1 << 29;
        const MIRROR = 1 << 30;
        const DAYCORE = 1 << 32;
        const CLASSIC = 1 << 33;
        const DIFFICULTY_ADJUST = 1 << 34;
        const TRACEABLE = 1 << 35;
        const LAZER = 1 << 36;
    }
}

/// Pairs of `(mod, implied mods)`.
///
/// Whenever the first mod is set, the second one is set as well after
/// [`GameMods::normalized`].
const IMPLICATIONS: &[(GameMods, GameMods)] = &[
    (GameMods::NIGHTCORE, GameMods::DOUBLE_TIME),
    (GameMods::DAYCORE, GameMods::HALF_TIME),
    (GameMods::PERFECT, GameMods::SUDDEN_DEATH),
];

impl GameMods {
    /// Mods that speed up playback.
    pub const FAST: Self = Self::DOUBLE_TIME.union(Self::NIGHTCORE);

    /// Mods that slow down playback.
    pub const SLOW: Self = Self::HALF_TIME.union(Self::DAYCORE);

    /// Mods that change the playback rate.
    pub const TIME_RATE: Self = Self::FAST.union(Self::SLOW);

    /// Mods that are relevant when grouping scores by difficulty.
    ///
    /// Applied after [`GameMods::normalized`] so that `Nightcore` groups with
    /// `DoubleTime` and `Daycore` with `HalfTime`.
    pub const DIFFICULTY_MASK: Self = Self::EASY
        .union(Self::TOUCH_DEVICE)
        .union(Self::HIDDEN)
        .union(Self::HARD_ROCK)
        .union(Self::DOUBLE_TIME)
        .union(Self::HALF_TIME)
        .union(Self::FLASHLIGHT);

    /// Add all mods implied by the currently set mods until nothing changes
    /// anymore.
    pub fn normalized(self) -> Self {
        let mut mods = self;

        loop {
            let next = IMPLICATIONS
                .iter()
                .filter(|(source, _)| mods.contains(*source))
                .fold(mods, |mods, (_, implied)| mods | *implied);

            if next == mods {
                return mods;
            }

            mods = next;
        }
    }

    /// Remove all mods that are implied by another set mod.
    ///
    /// Used for display purposes so that e.g. `Nightcore` is not shown
    /// alongside `DoubleTime`.
    pub fn without_implied(self) -> Self {
        IMPLICATIONS
            .iter()
            .filter(|(source, _)| self.contains(*source))
            .fold(self, |mods, (_, implied)| mods - *implied)
    }

    /// Only keep mods of [`GameMods::DIFFICULTY_MASK`].
    pub fn difficulty_masked(self) -> Self {
        self.normalized() & Self::DIFFICULTY_MASK
    }

    /// The playback rate implied by the mods.
    ///
    /// Fast mods take precedence over slow mods.
    pub fn clock_rate(self) -> f64 {
        if self.intersects(Self::FAST) {
            1.5
        } else if self.intersects(Self::SLOW) {
            0.75
        } else {
            1.0
        }
    }

    /// Product of the static score weights of all set mods.
    pub fn score_multiplier(self) -> f64 {
        MOD_DEFINITIONS
            .iter()
            .filter(|def| self.contains(def.mods))
            .map(|def| def.score_multiplier)
            .product()
    }

    /// Parse a single acronym such as `"DT"`, case-insensitively.
    pub fn from_acronym(acronym: &str) -> Option<Self> {
        MOD_DEFINITIONS
            .iter()
            .find(|def| def.acronym.eq_ignore_ascii_case(acronym))
            .map(|def| def.mods)
    }

    /// The acronym of a single mod.
    ///
    /// Returns `None` if `self` is not exactly one known mod.
    pub fn acronym(self) -> Option<&'static str> {
        MOD_DEFINITIONS
            .iter()
            .find(|def| def.mods == self)
            .map(|def| def.acronym)
    }

    /// The full name of a single mod.
    ///
    /// Returns `None` if `self` is not exactly one known mod.
    pub fn full_name(self) -> Option<&'static str> {
        MOD_DEFINITIONS
            .iter()
            .find(|def| def.mods == self)
            .map(|def| def.name)
    }

    /// Full names of the set mods in canonical order, e.g.
    /// `["Hidden", "Nightcore"]`.
    pub fn full_names(self) -> Vec<&'static str> {
        let mods = self.without_implied();

        MOD_DEFINITIONS
            .iter()
            .filter(|def| mods.contains(def.mods))
            .map(|def| def.name)
            .collect()
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(self) -> bool {
                    self.contains(Self::$name)
                }
            )*
        }
    };
}

impl_has_mod! {
    nf: NO_FAIL ["NoFail"],
    ez: EASY ["Easy"],
    td: TOUCH_DEVICE ["TouchDevice"],
    hd: HIDDEN ["Hidden"],
    hr: HARD_ROCK ["HardRock"],
    sd: SUDDEN_DEATH ["SuddenDeath"],
    dt: DOUBLE_TIME ["DoubleTime"],
    rx: RELAX ["Relax"],
    ht: HALF_TIME ["HalfTime"],
    nc: NIGHTCORE ["Nightcore"],
    fl: FLASHLIGHT ["Flashlight"],
    so: SPUN_OUT ["SpunOut"],
    ap: AUTOPILOT ["Autopilot"],
    pf: PERFECT ["Perfect"],
    v2: SCORE_V2 ["ScoreV2"],
    dc: DAYCORE ["Daycore"],
    cl: CLASSIC ["Classic"],
    da: DIFFICULTY_ADJUST ["DifficultyAdjust"],
    lazer: LAZER ["Lazer"],
}

/// Canonical acronym string, e.g. `"HDNC"`.
///
/// Implied mods are omitted and an empty set is written as `""`.
impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mods = self.without_implied();

        MOD_DEFINITIONS
            .iter()
            .filter(|def| mods.contains(def.mods))
            .try_for_each(|def| f.write_str(def.acronym))
    }
}

impl FromStr for GameMods {
    type Err = ParseGameModsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        acronym::parse_acronyms(s)
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self::from_bits_truncate(u64::from(bits))
    }
}
