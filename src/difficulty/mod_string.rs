use crate::{model::mods::GameMods, util::float_ext::FloatExt};

use super::Difficulty;

/// Deviations up to this amount are not shown in short mod strings.
const TOLERANCE: f64 = 0.001;

const DECIMALS: usize = 2;

impl Difficulty {
    /// Canonical mod acronyms followed by stats that differ from the
    /// beatmap's and a custom playback rate, e.g. `"HRDAAR9.5S1.2x"`.
    pub fn mod_string(&self) -> String {
        self.mod_string_for(self.mods)
    }

    /// Same as [`mod_string`](Self::mod_string) but only with mods that
    /// matter when grouping scores of equal difficulty.
    pub fn mod_string_masked(&self) -> String {
        self.mod_string_for(self.mods.difficulty_masked())
    }

    /// Full mod names plus `DifficultyAdjust` annotations, e.g.
    /// `["Hidden", "DA:DT:1.35x", "DA:AR9.5"]`.
    pub fn mod_string_full(&self) -> Vec<String> {
        let mut mods: Vec<String> = (self.mods - GameMods::DIFFICULTY_ADJUST)
            .full_names()
            .into_iter()
            .map(str::to_owned)
            .collect();

        for (prefix, value, base) in self.stat_annotations() {
            if value.not_eq(base) {
                mods.push(format!("DA:{prefix}{}", value.fmt_trimmed(DECIMALS)));
            }
        }

        let speed = self.attrs.speed;

        if speed.differs(self.attrs.base_mod_speed, TOLERANCE) {
            let speed = speed.fmt_trimmed(DECIMALS);
            let mut rewritten = false;

            for time_mod in [
                GameMods::DOUBLE_TIME,
                GameMods::NIGHTCORE,
                GameMods::HALF_TIME,
                GameMods::DAYCORE,
            ] {
                let (Some(name), Some(acronym)) = (time_mod.full_name(), time_mod.acronym()) else {
                    continue;
                };

                if let Some(entry) = mods.iter_mut().find(|entry| entry.as_str() == name) {
                    *entry = format!("DA:{acronym}:{speed}x");
                    rewritten = true;
                }
            }

            if !rewritten {
                mods.push(format!("DA:{speed}x"));
            }
        }

        for short in [GameMods::LAZER, GameMods::CLASSIC] {
            let (Some(name), Some(acronym)) = (short.full_name(), short.acronym()) else {
                continue;
            };

            if let Some(entry) = mods.iter_mut().find(|entry| entry.as_str() == name) {
                acronym.clone_into(entry);
            }
        }

        mods
    }

    fn mod_string_for(&self, mods: GameMods) -> String {
        let mut s = mods.to_string();

        for (prefix, value, base) in self.stat_annotations() {
            if value.differs(base, TOLERANCE) {
                s.push_str(&format!("{prefix}{}", value.fmt_trimmed(DECIMALS)));
            }
        }

        let speed = self.attrs.speed;

        if speed.differs(self.attrs.base_mod_speed, TOLERANCE) {
            s.push_str(&format!("S{}x", speed.fmt_trimmed(DECIMALS)));
        }

        s
    }

    /// `(prefix, adjusted value, beatmap value)` for each stat.
    fn stat_annotations(&self) -> [(&'static str, f64, f64); 4] {
        let adjusted = &self.attrs.adjusted;

        [
            ("AR", adjusted.ar, self.base.ar),
            ("OD", adjusted.od, self.base.od),
            ("CS", adjusted.cs, self.base.cs),
            ("HP", adjusted.hp, self.base.hp),
        ]
    }
}
