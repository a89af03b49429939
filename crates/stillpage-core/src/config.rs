//! Widget configuration: the five persisted appearance/sound settings.
//!
//! The stored form is a flat JSON object under a single storage key. The
//! container-level `#[serde(default)]` gives the merge semantics the
//! widget relies on: fields missing from the stored blob deserialize to
//! their hard-coded defaults, unknown fields are ignored, and a blob that
//! fails to parse entirely is treated as absent by the storage layer.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Complete widget configuration.
///
/// Serialized with camelCase field names to match the stored JSON shape
/// (`fontFamily`, `fontSize`, `textColor`, `backgroundColor`, `keySound`).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Named font stack short code, or raw font-family text.
    pub font_family: SmolStr,
    /// Editor font size in CSS pixels.
    pub font_size: f64,
    /// Editor text color, `#RRGGBB`.
    pub text_color: SmolStr,
    /// Page background color, `#RRGGBB`.
    pub background_color: SmolStr,
    /// Key-sound asset name, or `"none"`.
    pub key_sound: SmolStr,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_family: SmolStr::new_static("sans-serif"),
            font_size: 16.0,
            text_color: SmolStr::new_static("#000000"),
            background_color: SmolStr::new_static("#FFFFFF"),
            key_sound: SmolStr::new_static("none"),
        }
    }
}

/// Typed handle to one configuration field.
///
/// The browser bindings address fields through this enum instead of
/// stringly-typed names: each variant knows how to read its display value
/// from and write a raw control value into a `Config`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Setting {
    FontFamily,
    FontSize,
    TextColor,
    BackgroundColor,
    KeySound,
}

impl Setting {
    /// Every setting, in binding order.
    pub const ALL: [Setting; 5] = [
        Setting::FontFamily,
        Setting::FontSize,
        Setting::TextColor,
        Setting::BackgroundColor,
        Setting::KeySound,
    ];

    /// The value a bound control should display for this field.
    pub fn display_value(&self, config: &Config) -> String {
        match self {
            Setting::FontFamily => config.font_family.to_string(),
            Setting::FontSize => format!("{}", config.font_size),
            Setting::TextColor => config.text_color.to_string(),
            Setting::BackgroundColor => config.background_color.to_string(),
            Setting::KeySound => config.key_sound.to_string(),
        }
    }

    /// Write a raw control value into this field.
    ///
    /// A font-size value that does not parse as a finite number leaves the
    /// stored value unchanged.
    pub fn store(&self, config: &mut Config, raw: &str) {
        match self {
            Setting::FontFamily => config.font_family = raw.into(),
            Setting::FontSize => match raw.trim().parse::<f64>() {
                Ok(size) if size.is_finite() => config.font_size = size,
                _ => tracing::debug!(value = raw, "ignoring non-numeric font size"),
            },
            Setting::TextColor => config.text_color = raw.into(),
            Setting::BackgroundColor => config.background_color = raw.into(),
            Setting::KeySound => config.key_sound = raw.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.font_family, "sans-serif");
        assert_eq!(config.font_size, 16.0);
        assert_eq!(config.text_color, "#000000");
        assert_eq!(config.background_color, "#FFFFFF");
        assert_eq!(config.key_sound, "none");
    }

    #[test]
    fn test_round_trip_preserves_all_fields() {
        let config = Config {
            font_family: "kai".into(),
            font_size: 22.0,
            text_color: "#112233".into(),
            background_color: "#FFEEDD".into(),
            key_sound: "click".into(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_stored_field_names_are_camel_case() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        for field in [
            "fontFamily",
            "fontSize",
            "textColor",
            "backgroundColor",
            "keySound",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn test_partial_blob_merges_over_defaults() {
        let config: Config = serde_json::from_str(r#"{"fontSize": 20}"#).unwrap();
        assert_eq!(
            config,
            Config {
                font_size: 20.0,
                ..Config::default()
            }
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let config: Config =
            serde_json::from_str(r#"{"keySound": "pop", "lineHeight": 1.5}"#).unwrap();
        assert_eq!(config.key_sound, "pop");
        assert_eq!(config.font_size, 16.0);
    }

    #[test]
    fn test_malformed_blob_is_an_error() {
        assert!(serde_json::from_str::<Config>("{not json").is_err());
    }

    #[test]
    fn test_setting_store_and_display() {
        let mut config = Config::default();
        Setting::FontSize.store(&mut config, "24");
        assert_eq!(config.font_size, 24.0);
        assert_eq!(Setting::FontSize.display_value(&config), "24");

        Setting::TextColor.store(&mut config, "#abcdef");
        assert_eq!(Setting::TextColor.display_value(&config), "#abcdef");
    }

    #[test]
    fn test_non_numeric_font_size_is_ignored() {
        let mut config = Config::default();
        Setting::FontSize.store(&mut config, "large");
        assert_eq!(config.font_size, 16.0);
        Setting::FontSize.store(&mut config, "NaN");
        assert_eq!(config.font_size, 16.0);
    }
}
