// UI Styles
// Color schemes and styling for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Application color scheme and styles
pub struct Styles;

impl Styles {
    // === Header / Footer ===

    pub fn header() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn status() -> Style {
        Style::default().fg(Color::Gray)
    }

    // === Tab Headers ===

    pub fn tab_normal() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn tab_selected(accent: Color) -> Style {
        Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    }

    /// Layered on top of the normal/selected style for the focused tab
    pub fn tab_focused() -> Style {
        Style::default().add_modifier(Modifier::UNDERLINED)
    }

    pub fn tab_separator() -> Style {
        Style::default().fg(Color::Rgb(68, 68, 68))
    }

    // === Panels ===

    pub fn border_panel() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_image() -> Style {
        Style::default().fg(Color::Gray)
    }

    pub fn placeholder() -> Style {
        Style::default()
            .fg(Color::Rgb(150, 150, 150))
            .add_modifier(Modifier::ITALIC)
    }
}

/// Parse color from string
pub fn parse_color(color: &str) -> Color {
    match color.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // ratatui has no Dark* variants
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => Color::Cyan,
    }
}
