use ratatui::style::Color;

use crate::model::{ItemStyle, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    /// Row fill for filled items
    pub item_bg: Color,
    pub selection_bg: Color,
    pub border: Color,
    pub item_style: ItemStyle,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x14, 0x1C),
            text: Color::Rgb(0xC8, 0xD3, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x5F, 0xC8, 0xE8),
            dim: Color::Rgb(0x6B, 0x77, 0x88),
            red: Color::Rgb(0xFF, 0x55, 0x55),
            item_bg: Color::Rgb(0x1E, 0x3A, 0x4C),
            selection_bg: Color::Rgb(0x2E, 0x5C, 0x78),
            border: Color::Rgb(0x80, 0x80, 0x80),
            item_style: ItemStyle::default(),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme {
            item_style: ui.item_style,
            ..Theme::default()
        };

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                tracing::warn!(key = %key, value = %value, "ignoring invalid color");
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "red" => theme.red = color,
                "item_bg" => theme.item_bg = color,
                "selection_bg" => theme.selection_bg = color,
                "border" => theme.border = color,
                _ => tracing::warn!(key = %key, "unknown color key"),
            }
        }

        theme
    }
}
