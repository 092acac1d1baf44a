use super::GameMods;

pub(super) struct ModDefinition {
    pub mods: GameMods,
    pub acronym: &'static str,
    pub name: &'static str,
    pub score_multiplier: f64,
}

macro_rules! mod_definitions {
    ( $( $mods:ident: $acronym:literal $name:literal $mult:literal, )* ) => {
        /// All known mods in canonical order.
        pub(super) const MOD_DEFINITIONS: &[ModDefinition] = &[
            $(
                ModDefinition {
                    mods: GameMods::$mods,
                    acronym: $acronym,
                    name: $name,
                    score_multiplier: $mult,
                },
            )*
        ];
    };
}

mod_definitions! {
    NO_FAIL: "NF" "NoFail" 0.5,
    EASY: "EZ" "Easy" 0.5,
    TOUCH_DEVICE: "TD" "TouchDevice" 1.0,
    HIDDEN: "HD" "Hidden" 1.06,
    HARD_ROCK: "HR" "HardRock" 1.06,
    SUDDEN_DEATH: "SD" "SuddenDeath" 1.0,
    DOUBLE_TIME: "DT" "DoubleTime" 1.0,
    RELAX: "RX" "Relax" 0.0,
    HALF_TIME: "HT" "HalfTime" 1.0,
    NIGHTCORE: "NC" "Nightcore" 1.0,
    FLASHLIGHT: "FL" "Flashlight" 1.0,
    AUTOPLAY: "AT" "Autoplay" 1.0,
    SPUN_OUT: "SO" "SpunOut" 0.9,
    AUTOPILOT: "AP" "Autopilot" 0.0,
    PERFECT: "PF" "Perfect" 1.0,
    SCORE_V2: "V2" "ScoreV2" 1.0,
    MIRROR: "MR" "Mirror" 1.0,
    DAYCORE: "DC" "Daycore" 1.0,
    CLASSIC: "CL" "Classic" 0.96,
    DIFFICULTY_ADJUST: "DA" "DifficultyAdjust" 0.5,
    TRACEABLE: "TC" "Traceable" 1.0,
    LAZER: "LZ" "Lazer" 1.0,
}

/// All the ways that parsing [`GameMods`] from a string can fail.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseGameModsError {
    #[error("mod string of length {0} is not made of two-letter acronyms")]
    OddLength(usize),
    #[error("unknown mod acronym `{0}`")]
    UnknownAcronym(String),
}

/// Parse concatenated two-letter acronyms such as `"HDHR"`.
///
/// `""` and `"NM"` are the empty set.
pub(super) fn parse_acronyms(s: &str) -> Result<GameMods, ParseGameModsError> {
    let s = s.trim();

    if s.eq_ignore_ascii_case("NM") {
        return Ok(GameMods::empty());
    }

    if !s.is_ascii() {
        return Err(ParseGameModsError::UnknownAcronym(s.to_owned()));
    }

    if s.len() % 2 != 0 {
        return Err(ParseGameModsError::OddLength(s.len()));
    }

    (0..s.len()).step_by(2).try_fold(GameMods::empty(), |mods, i| {
        let acronym = &s[i..i + 2];

        GameMods::from_acronym(acronym)
            .map(|parsed| mods | parsed)
            .ok_or_else(|| ParseGameModsError::UnknownAcronym(acronym.to_owned()))
    })
}
