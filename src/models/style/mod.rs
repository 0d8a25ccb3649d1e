use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rrggbb` or `#rrggbbaa` (leading `#` optional); alpha
    /// defaults to opaque.
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();

        match hex.len() {
            6 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, 255)),
            8 => Some(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

/// Colors deserialize from either a hex string (`"#e67e22"`) or an
/// `{ r, g, b, a }` channel table; `a` defaults to opaque when omitted.
impl<'de> Deserialize<'de> for RgbaColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorRepr {
            Hex(String),
            Channels {
                r: u8,
                g: u8,
                b: u8,
                #[serde(default = "opaque")]
                a: u8,
            },
        }

        const fn opaque() -> u8 {
            255
        }

        match ColorRepr::deserialize(deserializer)? {
            ColorRepr::Hex(hex) => RgbaColor::from_hex_str(&hex)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color '{hex}'"))),
            ColorRepr::Channels { r, g, b, a } => Ok(RgbaColor::new(r, g, b, a)),
        }
    }
}

/// A shallow set of text style overrides. `None` fields fall through to
/// whatever default the widget supplies for that slot.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TextStyle {
    pub font_size: Option<f32>,
    pub color: Option<RgbaColor>,
    /// Line height in points.
    pub line_height: Option<f32>,
    pub strong: Option<bool>,
}

impl TextStyle {
    pub const fn sized(font_size: f32) -> Self {
        Self {
            font_size: Some(font_size),
            color: None,
            line_height: None,
            strong: None,
        }
    }
}

/// Merges two style override sets. Fields set on `overrides` win over
/// `base`; this is a shallow field-wise merge, nothing is combined deeper.
pub fn merge_styles(base: &TextStyle, overrides: Option<&TextStyle>) -> TextStyle {
    match overrides {
        Some(overrides) => TextStyle {
            font_size: overrides.font_size.or(base.font_size),
            color: overrides.color.or(base.color),
            line_height: overrides.line_height.or(base.line_height),
            strong: overrides.strong.or(base.strong),
        },
        None => *base,
    }
}

pub(crate) const fn default_text_size() -> f32 {
    20.0
}

pub(crate) const fn default_horizontal_margin() -> f32 {
    10.0
}

/// Display options recognized by the countdown widget. Omitted fields fall
/// back to the documented defaults; unknown keys in serialized form are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CountdownStyle {
    /// Base text size for the elapsed message and the date line.
    pub text_size: f32,
    /// Overrides merged on top of the widget's default text styling.
    pub text_style: TextStyle,
    /// Render the formatted target instant beneath the unit row.
    pub show_date: bool,
    /// Render unit labels in uppercase.
    pub capitalize: bool,
    /// Horizontal margin applied to both sides of each unit block.
    pub horizontal_margin: f32,
}

impl Default for CountdownStyle {
    fn default() -> Self {
        Self {
            text_size: default_text_size(),
            text_style: TextStyle::default(),
            show_date: false,
            capitalize: false,
            horizontal_margin: default_horizontal_margin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_merge_with_no_overrides_returns_base() {
        let base = TextStyle::sized(18.0);
        assert_eq!(merge_styles(&base, None), base);
    }

    #[test]
    fn test_merge_later_override_wins() {
        let base = TextStyle {
            font_size: Some(18.0),
            color: Some(RgbaColor::new(10, 10, 10, 255)),
            line_height: Some(22.0),
            strong: None,
        };
        let overrides = TextStyle {
            font_size: Some(32.0),
            color: None,
            line_height: None,
            strong: Some(true),
        };

        let merged = merge_styles(&base, Some(&overrides));
        assert_eq!(merged.font_size, Some(32.0));
        assert_eq!(merged.color, Some(RgbaColor::new(10, 10, 10, 255)));
        assert_eq!(merged.line_height, Some(22.0));
        assert_eq!(merged.strong, Some(true));
    }

    #[test]
    fn test_merge_line_height_override_wins() {
        let base = TextStyle {
            line_height: Some(24.0),
            ..TextStyle::default()
        };
        let overrides = TextStyle {
            line_height: Some(30.0),
            ..TextStyle::default()
        };

        let merged = merge_styles(&base, Some(&overrides));
        assert_eq!(merged.line_height, Some(30.0));
    }

    #[test]
    fn test_merge_is_shallow() {
        // A set color replaces the base color wholesale, there is no
        // channel-by-channel combination.
        let base = TextStyle {
            color: Some(RgbaColor::new(1, 2, 3, 255)),
            ..TextStyle::default()
        };
        let overrides = TextStyle {
            color: Some(RgbaColor::new(9, 9, 9, 9)),
            ..TextStyle::default()
        };

        let merged = merge_styles(&base, Some(&overrides));
        assert_eq!(merged.color, Some(RgbaColor::new(9, 9, 9, 9)));
    }

    #[test]
    fn test_sized_sets_only_the_font_size() {
        let style = TextStyle::sized(18.0);
        assert_eq!(style.font_size, Some(18.0));
        assert_eq!(style.color, None);
        assert_eq!(style.line_height, None);
        assert_eq!(style.strong, None);
    }

    #[test]
    fn test_style_defaults() {
        let style = CountdownStyle::default();
        assert_eq!(style.text_size, 20.0);
        assert_eq!(style.horizontal_margin, 10.0);
        assert!(!style.capitalize);
        assert!(!style.show_date);
        assert_eq!(style.text_style, TextStyle::default());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{
            "text_size": 24.0,
            "blink_rate": 3,
            "theme": "neon"
        }"#;

        let style: CountdownStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.text_size, 24.0);
        assert_eq!(style.horizontal_margin, 10.0);
    }

    #[test]
    fn test_rgba_from_hex_str() {
        assert_eq!(
            RgbaColor::from_hex_str("#0a2291"),
            Some(RgbaColor::new(10, 34, 145, 255))
        );
        assert_eq!(
            RgbaColor::from_hex_str("67b0ff80"),
            Some(RgbaColor::new(103, 176, 255, 128))
        );
        assert_eq!(RgbaColor::from_hex_str("#123"), None);
        assert_eq!(RgbaColor::from_hex_str("zzzzzz"), None);
    }

    #[test]
    fn test_color_deserializes_from_hex_string() {
        let style: TextStyle = serde_json::from_str(r##"{ "color": "#e67e22" }"##).unwrap();
        assert_eq!(style.color, Some(RgbaColor::new(230, 126, 34, 255)));
    }

    #[test]
    fn test_color_deserializes_from_channel_table() {
        let style: TextStyle =
            serde_json::from_str(r#"{ "color": { "r": 230, "g": 126, "b": 34 } }"#).unwrap();
        assert_eq!(style.color, Some(RgbaColor::new(230, 126, 34, 255)));
    }

    #[test]
    fn test_invalid_hex_color_is_rejected() {
        let result = serde_json::from_str::<TextStyle>(r##"{ "color": "#nothex" }"##);
        assert!(result.is_err());
    }
}
