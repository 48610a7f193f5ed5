//! Widget theme colors
//!
//! The user-editable color set, persisted alongside the token. Defaults are
//! the GitHub dark palette.

use serde::{Deserialize, Serialize};

/// Theme colors as hex strings (e.g. "#0d1117")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default = "default_bg_primary")]
    pub bg_primary: String,

    #[serde(default = "default_bg_secondary")]
    pub bg_secondary: String,

    #[serde(default = "default_text_primary")]
    pub text_primary: String,

    #[serde(default = "default_success_color")]
    pub success_color: String,

    #[serde(default = "default_error_color")]
    pub error_color: String,
}

fn default_bg_primary() -> String {
    "#0d1117".to_string()
}

fn default_bg_secondary() -> String {
    "#161b22".to_string()
}

fn default_text_primary() -> String {
    "#f0f6fc".to_string()
}

fn default_success_color() -> String {
    "#28a745".to_string()
}

fn default_error_color() -> String {
    "#f85149".to_string()
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_primary: default_bg_primary(),
            bg_secondary: default_bg_secondary(),
            text_primary: default_text_primary(),
            success_color: default_success_color(),
            error_color: default_error_color(),
        }
    }
}

/// Parse a `#rrggbb` hex color into its RGB components
///
/// Returns `None` for anything that is not exactly a 6-digit hex color with
/// a leading `#`.
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_is_github_dark() {
        let theme = Theme::default();
        assert_eq!(theme.bg_primary, "#0d1117");
        assert_eq!(theme.success_color, "#28a745");
        assert_eq!(theme.error_color, "#f85149");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#28a745"), Some((0x28, 0xa7, 0x45)));
        assert_eq!(parse_hex("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex("#ffffff"), Some((255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        assert_eq!(parse_hex("28a745"), None);
        assert_eq!(parse_hex("#28a74"), None);
        assert_eq!(parse_hex("#28a74zz"), None);
        assert_eq!(parse_hex(""), None);
    }

    #[test]
    fn test_partial_theme_deserialize_fills_defaults() {
        let theme: Theme = toml::from_str("success_color = \"#00ff00\"").unwrap();
        assert_eq!(theme.success_color, "#00ff00");
        assert_eq!(theme.bg_primary, "#0d1117");
    }
}
