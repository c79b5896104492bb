//! Engine options and the slice of the clock's saved settings that decides
//! whether a live background runs.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::variants::VariantId;

/// Seed used on hosts when no seed is configured.
pub const DEFAULT_SEED: u64 = 0x5EED_C10C_0000_0001;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Base seed for every simulation's RNG. Fixed seeds give repeatable
    /// animations.
    pub seed: Option<u64>,
    /// Variant used when the requested id is not recognised.
    pub fallback: VariantId,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            fallback: VariantId::Matrix,
        }
    }
}

impl EngineConfig {
    /// Parse a JSON object; an empty string gives the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundType {
    #[default]
    Solid,
    Gradient,
    Image,
    Preset,
    Live,
}

/// Background keys of the persisted clock settings. Other keys in the same
/// object are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundSettings {
    pub background_type: BackgroundType,
    pub live_wallpaper_type: Option<String>,
}

impl BackgroundSettings {
    pub fn live(wallpaper: &str) -> Self {
        Self {
            background_type: BackgroundType::Live,
            live_wallpaper_type: Some(wallpaper.to_owned()),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Wallpaper id to run in live mode; `matrix` when unset or blank.
    pub fn live_wallpaper(&self) -> &str {
        match self.live_wallpaper_type.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id,
            _ => VariantId::Matrix.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_ignore_unrelated_keys() {
        let json = r##"{
            "timeFormat": "12",
            "backgroundType": "live",
            "solidColor": "#1a1a1a",
            "liveWallpaperType": "nebula"
        }"##;
        let s = BackgroundSettings::from_json(json).unwrap();
        assert_eq!(s.background_type, BackgroundType::Live);
        assert_eq!(s.live_wallpaper(), "nebula");
    }

    #[test]
    fn missing_wallpaper_defaults_to_matrix() {
        let json = r#"{"backgroundType":"live","liveWallpaperType":""}"#;
        let s = BackgroundSettings::from_json(json).unwrap();
        assert_eq!(s.live_wallpaper(), "matrix");
        let s = BackgroundSettings::from_json("{}").unwrap();
        assert_eq!(s.background_type, BackgroundType::Solid);
        assert_eq!(s.live_wallpaper(), "matrix");
    }

    #[test]
    fn engine_config_parses() {
        assert_eq!(EngineConfig::from_json("").unwrap(), EngineConfig::default());
        let c = EngineConfig::from_json(r#"{"seed": 7, "fallback": "stars"}"#).unwrap();
        assert_eq!(c.seed, Some(7));
        assert_eq!(c.fallback, VariantId::Stars);
        assert!(EngineConfig::from_json("{not json").is_err());
    }
}
