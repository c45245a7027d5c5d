//! Colors used by the dashboard views

use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
    pub accent_primary: Color,
    pub panel_border: Color,
    pub panel_title: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub cursor_bg: Color,
    pub key_hint: Color,
    pub key_description: Color,
    pub status_success: Color,
    pub status_warning: Color,
    pub status_error: Color,
    pub diff_added: Color,
    pub diff_removed: Color,
    pub diff_hunk: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent_primary: Color::Cyan,
            panel_border: Color::DarkGray,
            panel_title: Color::Cyan,
            text_primary: Color::White,
            text_muted: Color::Gray,
            selected_bg: Color::Rgb(40, 60, 90),
            selected_fg: Color::White,
            cursor_bg: Color::Rgb(50, 50, 50),
            key_hint: Color::Yellow,
            key_description: Color::Gray,
            status_success: Color::Green,
            status_warning: Color::Yellow,
            status_error: Color::Red,
            diff_added: Color::Green,
            diff_removed: Color::Red,
            diff_hunk: Color::Cyan,
        }
    }
}
