// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Arrow key for the tab-list (Left or Right)
    Navigate(KeyCode),

    /// Enter/Space: click the focused element
    Activate,

    /// Left mouse button pressed at (column, row)
    Click { column: u16, row: u16 },

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Key repeats and releases would double-step the tab focus
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            KeyCode::Left | KeyCode::Right => AppEvent::Navigate(key.code),

            KeyCode::Enter | KeyCode::Char(' ') => AppEvent::Activate,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys_navigate() {
        assert_eq!(EventHandler::handle(press(KeyCode::Left)), AppEvent::Navigate(KeyCode::Left));
        assert_eq!(EventHandler::handle(press(KeyCode::Right)), AppEvent::Navigate(KeyCode::Right));
        assert_eq!(EventHandler::handle(press(KeyCode::Up)), AppEvent::None);
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Right,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Key(release)), AppEvent::None);
    }

    #[test]
    fn test_quit_and_activate() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('q'))), AppEvent::Quit);
        assert_eq!(
            EventHandler::handle(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
            AppEvent::Quit
        );
        assert_eq!(EventHandler::handle(press(KeyCode::Enter)), AppEvent::Activate);
        assert_eq!(EventHandler::handle(press(KeyCode::Char(' '))), AppEvent::Activate);
    }

    #[test]
    fn test_left_click() {
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(EventHandler::handle(Event::Mouse(click)), AppEvent::Click { column: 7, row: 3 });

        let right = MouseEvent { kind: MouseEventKind::Down(MouseButton::Right), ..click };
        assert_eq!(EventHandler::handle(Event::Mouse(right)), AppEvent::None);
    }
}
