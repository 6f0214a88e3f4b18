//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme used by the painter, supporting both
//! built-in themes (Catppuccin variants) and custom themes loaded from TOML files.
//! It provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default)
//! - `catppuccin-latte`: Light theme with soft pastels
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#cba6f7"
//! link = "#89b4fa"
//! input_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! notice_fg = "#1e1e2e"
//! notice_bg = "#a6e3a1"
//! # optional, demographic bar colors in rank order
//! chart = ["#8884d8", "#82ca9d"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use musicianhub::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! assert_eq!(Theme::fg("#ff0000"), "\u{1b}[38;2;255;0;0m");
//! assert_eq!(theme.chart_color(0), "#8884d8");
//! ```

use crate::domain::{HubError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Colors of the demographic bars when a theme does not set `chart`.
const DEFAULT_CHART: [&str; 5] = ["#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE"];

/// Color scheme configuration for painting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Title text color.
    pub header_fg: String,
    /// Optional title background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Focused element foreground.
    pub selection_fg: String,
    /// Focused element background.
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (genres, dates, hints).
    pub text_dim: String,

    /// Separator lines and overlay frame.
    pub border: String,

    /// Active tab and language, section headings.
    pub accent: String,
    /// URLs.
    pub link: String,

    /// Text input border.
    pub input_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// "No results" message color.
    pub empty_state_fg: String,

    /// Notice bar colors.
    pub notice_fg: String,
    pub notice_bg: String,

    /// Demographic bar colors, cycled by rank.
    #[serde(default = "default_chart")]
    pub chart: Vec<String>,
}

fn default_chart() -> Vec<String> {
    DEFAULT_CHART.iter().map(|c| (*c).to_string()).collect()
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HubError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| HubError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| HubError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Chart color for the bar at `rank`, cycling through the palette.
    #[must_use]
    pub fn chart_color(&self, rank: usize) -> &str {
        let palette = &self.colors.chart;
        if palette.is_empty() {
            DEFAULT_CHART[rank % DEFAULT_CHART.len()]
        } else {
            &palette[rank % palette.len()]
        }
    }

    /// Converts a hex color to RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color sequence (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color sequence (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn underline() -> &'static str {
        "\u{001b}[4m"
    }

    /// Clears all styling (colors, bold, underline).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_themes_parse() {
        for name in ["catppuccin-mocha", "catppuccin-latte"] {
            let theme = Theme::from_name(name).unwrap();
            assert_eq!(theme.name, name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#zzz"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("1e1e2e"), "\u{1b}[48;2;30;30;46m");
    }

    #[test]
    fn chart_cycles_and_defaults() {
        let mut theme = Theme::default();
        theme.colors.chart = vec![];
        assert_eq!(theme.chart_color(6), "#82ca9d");

        theme.colors.chart = vec!["#000000".to_string(), "#ffffff".to_string()];
        assert_eq!(theme.chart_color(3), "#ffffff");
    }

    #[test]
    fn theme_file_errors_are_theme_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "name = \"broken\"").unwrap();

        assert!(matches!(Theme::from_file(file.path()), Err(HubError::Theme(_))));
        assert!(matches!(Theme::from_file("/nonexistent.toml"), Err(HubError::Theme(_))));
    }
}
