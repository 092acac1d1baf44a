use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GameMods;

/// Settings of `DoubleTime`, `Nightcore`, `HalfTime`, and `Daycore`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpeedSettings {
    /// The playback rate.
    pub speed_change: f64,
    /// Whether the pitch changes along with the rate.
    pub adjust_pitch: bool,
}

impl SpeedSettings {
    pub const fn new(speed_change: f64, adjust_pitch: bool) -> Self {
        Self {
            speed_change,
            adjust_pitch,
        }
    }

    /// Default settings of `DoubleTime` and `Nightcore`.
    pub const fn fast(adjust_pitch: bool) -> Self {
        Self::new(1.5, adjust_pitch)
    }

    /// Default settings of `HalfTime` and `Daycore`.
    pub const fn slow(adjust_pitch: bool) -> Self {
        Self::new(0.75, adjust_pitch)
    }
}

/// Settings of `DifficultyAdjust`.
///
/// Each specified value replaces the beatmap's value before any other mod
/// is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffAdjustSettings {
    pub approach_rate: Option<f64>,
    pub overall_difficulty: Option<f64>,
    pub drain_rate: Option<f64>,
    pub circle_size: Option<f64>,
}

/// Settings of `Easy`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasySettings {
    /// Amount of extra lives.
    pub retries: u32,
}

impl Default for EasySettings {
    fn default() -> Self {
        Self { retries: 2 }
    }
}

/// Settings of `Flashlight`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlashlightSettings {
    /// Milliseconds until the flashlight reaches the cursor.
    pub follow_delay: f64,
    pub size_multiplier: f64,
    /// Whether the flashlight shrinks as combo increases.
    pub combo_based_size: bool,
}

impl Default for FlashlightSettings {
    fn default() -> Self {
        Self {
            follow_delay: 120.0,
            size_multiplier: 1.0,
            combo_based_size: true,
        }
    }
}

/// Settings of `Classic`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicSettings {
    pub no_slider_head_accuracy: bool,
    pub classic_note_lock: bool,
    pub always_play_tail_sample: bool,
    pub fade_hit_circle_early: bool,
    pub classic_health: bool,
}

impl Default for ClassicSettings {
    fn default() -> Self {
        Self {
            no_slider_head_accuracy: true,
            classic_note_lock: true,
            always_play_tail_sample: true,
            fade_hit_circle_early: true,
            classic_health: true,
        }
    }
}

/// Settings of all configurable mods.
///
/// Holds at most one settings record per kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModSettings {
    pub speed: Option<SpeedSettings>,
    pub difficulty_adjust: Option<DiffAdjustSettings>,
    pub easy: Option<EasySettings>,
    pub flashlight: Option<FlashlightSettings>,
    pub classic: Option<ClassicSettings>,
}

impl ModSettings {
    /// Remove all settings.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Store the default settings for all configurable mods in `mods`,
    /// overwriting previous settings of the same kind.
    pub fn insert_defaults(&mut self, mods: GameMods) {
        self.insert_parsed(mods, &Map::new());
    }

    /// Store the settings for all configurable mods in `mods`, parsed from
    /// `payload` on top of the respective defaults.
    ///
    /// Unknown keys are ignored and a payload that does not fit a mod's
    /// settings results in that mod's default settings.
    pub fn insert_parsed(&mut self, mods: GameMods, payload: &Map<String, Value>) {
        if mods.intersects(GameMods::SLOW) {
            let default = SpeedSettings::slow(mods.dc());
            self.speed = Some(parse_settings(default, payload));
        } else if mods.intersects(GameMods::FAST) {
            let default = SpeedSettings::fast(mods.nc());
            self.speed = Some(parse_settings(default, payload));
        }

        if mods.ez() {
            self.easy = Some(parse_settings(EasySettings::default(), payload));
        }

        if mods.fl() {
            self.flashlight = Some(parse_settings(FlashlightSettings::default(), payload));
        }

        if mods.da() {
            self.difficulty_adjust = Some(parse_settings(DiffAdjustSettings::default(), payload));
        }

        if mods.cl() {
            self.classic = Some(parse_settings(ClassicSettings::default(), payload));
        }
    }

    /// Whether flashlight settings are present and differ from the defaults.
    pub fn custom_flashlight(&self) -> bool {
        self.flashlight
            .is_some_and(|fl| fl != FlashlightSettings::default())
    }
}

/// Overlay `payload` onto the serialized `default` and deserialize the
/// result.
fn parse_settings<T>(default: T, payload: &Map<String, Value>) -> T
where
    T: Serialize + DeserializeOwned,
{
    if payload.is_empty() {
        return default;
    }

    let mut fields = match serde_json::to_value(&default) {
        Ok(Value::Object(fields)) => fields,
        _ => return default,
    };

    for (key, value) in payload {
        if let Some(field) = fields.get_mut(key) {
            field.clone_from(value);
        }
    }

    match serde_json::from_value(Value::Object(fields)) {
        Ok(settings) => settings,
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                settings = std::any::type_name::<T>(),
                error = %_err,
                "Rejected mod settings, using defaults"
            );

            default
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn defaults() {
        let mut settings = ModSettings::default();
        settings.insert_defaults(GameMods::NIGHTCORE | GameMods::EASY | GameMods::FLASHLIGHT);

        assert_eq!(settings.speed, Some(SpeedSettings::new(1.5, true)));
        assert_eq!(settings.easy, Some(EasySettings { retries: 2 }));
        assert_eq!(settings.flashlight, Some(FlashlightSettings::default()));
        assert_eq!(settings.difficulty_adjust, None);
        assert!(!settings.custom_flashlight());
    }

    #[test]
    fn slow_takes_precedence() {
        let mut settings = ModSettings::default();
        settings.insert_defaults(GameMods::DOUBLE_TIME | GameMods::HALF_TIME);

        assert_eq!(settings.speed, Some(SpeedSettings::slow(false)));
    }

    #[test]
    fn partial_payload() {
        let mut settings = ModSettings::default();
        let payload = payload(json!({ "speed_change": 1.35, "unknown": [1, 2] }));
        settings.insert_parsed(GameMods::DOUBLE_TIME, &payload);

        assert_eq!(settings.speed, Some(SpeedSettings::new(1.35, false)));
    }

    #[test]
    fn mismatching_payload() {
        let mut settings = ModSettings::default();
        let payload = payload(json!({ "speed_change": "fast", "adjust_pitch": true }));
        settings.insert_parsed(GameMods::DOUBLE_TIME, &payload);

        assert_eq!(settings.speed, Some(SpeedSettings::fast(false)));
    }

    #[test]
    fn difficulty_adjust_payload() {
        let mut settings = ModSettings::default();
        let payload = payload(json!({ "circle_size": 4, "approach_rate": 9.5 }));
        settings.insert_parsed(GameMods::DIFFICULTY_ADJUST, &payload);

        let expected = DiffAdjustSettings {
            approach_rate: Some(9.5),
            circle_size: Some(4.0),
            ..Default::default()
        };

        assert_eq!(settings.difficulty_adjust, Some(expected));
    }

    #[test]
    fn custom_flashlight() {
        let mut settings = ModSettings::default();
        let payload = payload(json!({ "size_multiplier": 1.5 }));
        settings.insert_parsed(GameMods::FLASHLIGHT, &payload);

        assert!(settings.custom_flashlight());
    }
}
