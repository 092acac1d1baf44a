use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::GameMods;

/// A mod as it appears in an osu!lazer score or replay: its acronym and
/// its settings.
///
/// ```
/// use rosu_mod_stats::model::mods::ModInfo;
///
/// let json = r#"{ "acronym": "DT", "settings": { "speed_change": 1.35 } }"#;
/// let info: ModInfo = serde_json::from_str(json).unwrap();
///
/// assert_eq!(info, ModInfo::new("DT").with_setting("speed_change", 1.35));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModInfo {
    pub acronym: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
}

impl ModInfo {
    /// Create a new [`ModInfo`] without settings.
    pub fn new(acronym: impl Into<String>) -> Self {
        Self {
            acronym: acronym.into(),
            settings: Map::new(),
        }
    }

    /// Add a setting.
    #[must_use]
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.settings.insert(key.into(), value.into());

        self
    }

    /// The mod matching the acronym, if any.
    pub fn mods(&self) -> Option<GameMods> {
        GameMods::from_acronym(&self.acronym)
    }
}
