use ratatui::crossterm::event::KeyEvent;

/// Actions that are not tied to any specific panel
#[derive(Debug, Clone)]
pub enum GlobalAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Close the dashboard (q / Esc)
    Close,
    /// Quit immediately (Ctrl+C)
    Quit,
}
