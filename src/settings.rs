use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::SceneConfig;
use crate::types::{AspectRatio, Locale};

/// Last-used form values, stored as a flat JSON object.
///
/// Every key is optional on load so older or hand-edited files still work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub language: String,
    pub distance_to_screen: f64,
    pub screen_size: f64,
    pub aspect_ratio_a: u32,
    pub aspect_ratio_b: u32,
    pub curvature: f64,
    pub is_triple_monitor: bool,
    pub triple_monitor_angle: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&SceneConfig::default())
    }
}

impl From<&SceneConfig> for Settings {
    fn from(cfg: &SceneConfig) -> Self {
        Self {
            language: cfg.locale.code().to_string(),
            distance_to_screen: cfg.distance_cm,
            screen_size: cfg.screen.size_in,
            aspect_ratio_a: cfg.screen.aspect.width,
            aspect_ratio_b: cfg.screen.aspect.height,
            curvature: cfg.screen.curvature_cm,
            is_triple_monitor: cfg.triple,
            triple_monitor_angle: cfg.triple_angle_deg,
        }
    }
}

impl Settings {
    /// Read settings, falling back to defaults for a missing or unreadable file.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("cannot read settings {}: {e}", path.display());
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("ignoring settings in {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))
    }

    /// Scene built from these values; invalid entries keep the defaults.
    pub fn to_scene(&self) -> SceneConfig {
        let mut cfg = SceneConfig::default();
        if let Ok(locale) = self.language.parse::<Locale>() {
            cfg.locale = locale;
        }
        if self.aspect_ratio_a > 0 && self.aspect_ratio_b > 0 {
            cfg.screen.aspect = AspectRatio::new(self.aspect_ratio_a, self.aspect_ratio_b);
        }
        cfg.distance_cm = self.distance_to_screen;
        cfg.screen.size_in = self.screen_size;
        cfg.screen.curvature_cm = self.curvature;
        cfg.triple = self.is_triple_monitor;
        cfg.triple_angle_deg = self.triple_monitor_angle;
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::approx;
    use std::env;

    fn temp_path(name: &str) -> std::path::PathBuf {
        env::temp_dir().join(format!("simfov-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn defaults_mirror_scene_defaults() {
        let s = Settings::default();
        assert_eq!(s.language, "en");
        assert!(approx(s.distance_to_screen, 70.0, 0.0));
        assert!(approx(s.screen_size, 32.0, 0.0));
        assert_eq!((s.aspect_ratio_a, s.aspect_ratio_b), (16, 9));
        assert!(s.is_triple_monitor);
    }

    #[test]
    fn parses_camel_case_keys_and_fills_missing_ones() {
        let s: Settings =
            serde_json::from_str(r#"{"screenSize": 27, "curvature": 100, "language": "cn"}"#)
                .unwrap();
        assert!(approx(s.screen_size, 27.0, 0.0));
        assert!(approx(s.curvature, 100.0, 0.0));
        assert!(approx(s.distance_to_screen, 70.0, 0.0));

        let cfg = s.to_scene();
        assert_eq!(cfg.locale, Locale::Cn);
        assert!(!cfg.screen.is_flat());
    }

    #[test]
    fn invalid_values_keep_scene_defaults() {
        let s = Settings {
            language: "xx".to_string(),
            aspect_ratio_b: 0,
            ..Settings::default()
        };
        let cfg = s.to_scene();
        assert_eq!(cfg.locale, Locale::En);
        assert_eq!(cfg.screen.aspect, AspectRatio::new(16, 9));
    }

    #[test]
    fn missing_or_corrupt_file_gives_defaults() {
        assert_eq!(Settings::load(&temp_path("missing")), Settings::default());

        let path = temp_path("corrupt");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn unreadable_path_gives_defaults() {
        let dir = temp_path("dir");
        fs::create_dir_all(&dir).unwrap();
        assert_eq!(Settings::load(&dir), Settings::default());
        fs::remove_dir(&dir).unwrap();
    }

    #[test]
    fn save_then_load_keeps_values() {
        let path = temp_path("saved");
        let s = Settings {
            screen_size: 49.0,
            aspect_ratio_a: 32,
            aspect_ratio_b: 9,
            is_triple_monitor: false,
            ..Settings::default()
        };
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path), s);
        fs::remove_file(&path).unwrap();
    }
}
