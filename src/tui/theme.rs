use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI. The title bar and cursor row are drawn
/// reverse-video over their colors, so the defaults lean on the terminal's
/// own palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub dim: Color,
    pub title: Color,
    pub cursor: Color,
    pub mark_todo: Color,
    pub mark_done: Color,
    pub divider: Color,
    pub popup_border: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Reset,
            text: Color::Reset,
            dim: Color::DarkGray,
            title: Color::Blue,
            cursor: Color::Cyan,
            mark_todo: Color::Red,
            mark_done: Color::Green,
            divider: Color::Yellow,
            popup_border: Color::Blue,
            warning: Color::Red,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "dim" => theme.dim = color,
                    "title" => theme.title = color,
                    "cursor" => theme.cursor = color,
                    "mark_todo" => theme.mark_todo = color,
                    "mark_done" => theme.mark_done = color,
                    "divider" => theme.divider = color,
                    "popup_border" => theme.popup_border = color,
                    "warning" => theme.warning = color,
                    _ => {}
                }
            }
        }

        theme
    }
}
