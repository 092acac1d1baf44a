/// The four difficulty values of a beatmap.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BeatmapStats {
    /// The health drain rate.
    pub hp: f64,
    /// The circle size.
    pub cs: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The approach rate.
    pub ar: f64,
}

impl BeatmapStats {
    pub const fn new(hp: f64, cs: f64, od: f64, ar: f64) -> Self {
        Self { hp, cs, od, ar }
    }

    /// Apply a function to each value.
    #[must_use]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            hp: f(self.hp),
            cs: f(self.cs),
            od: f(self.od),
            ar: f(self.ar),
        }
    }
}

/// All values are `5.0`.
impl Default for BeatmapStats {
    fn default() -> Self {
        Self::new(5.0, 5.0, 5.0, 5.0)
    }
}

/// Difficulty values that should be used as is, i.e. that are not
/// modified by mods anymore.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct CustomStats {
    pub hp: Option<f64>,
    pub cs: Option<f64>,
    pub od: Option<f64>,
    pub ar: Option<f64>,
}
