//! Event system - keyboard, pointer, and terminal events

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    BackTab,
    Backspace,
    Enter,
    Tab,
    Esc,
    Null,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16), // button, col, row
    Release(u16, u16),            // col, row
    ScrollUp(u16, u16),           // col, row
    ScrollDown(u16, u16),         // col, row
}

/// UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(Key),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized (new cols, new rows)
    Resize(u16, u16),
    /// Focus gained
    FocusGained,
    /// Focus lost
    FocusLost,
}

impl Event {
    /// Position of a pointer press, if this is one
    pub fn pointer_press(&self) -> Option<(u16, u16)> {
        match self {
            Event::Mouse(MouseEvent::Press(_, col, row)) => Some((*col, *row)),
            _ => None,
        }
    }

    /// Left-button press at a position
    pub fn click(col: u16, row: u16) -> Self {
        Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
    }
}

/// Event handler trait for components
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Called when component gains focus
    fn on_focus(&mut self) {}

    /// Called when component loses focus
    fn on_blur(&mut self) {}
}

#[cfg(feature = "tui")]
pub use poller::EventPoller;

#[cfg(feature = "tui")]
mod poller {
    use super::{Event, Key, MouseButton, MouseEvent};
    use anyhow::Result;
    use std::time::Duration;

    /// Event polling and conversion from crossterm events
    pub struct EventPoller {
        _enabled: bool,
    }

    impl EventPoller {
        /// Enable raw mode and mouse capture, then start polling
        pub fn new() -> Result<Self> {
            crossterm::terminal::enable_raw_mode()?;

            // Mouse capture is required for click-driven pickers; focus reports are optional
            crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture)?;
            let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableFocusChange);

            Ok(EventPoller { _enabled: true })
        }

        /// Poll for next event with timeout
        ///
        /// Crossterm events with no counterpart here (key releases, mouse moves,
        /// paste) come back as None.
        pub fn poll(&self, timeout: Duration) -> Result<Option<Event>> {
            if crossterm::event::poll(timeout)? {
                let event = crossterm::event::read()?;
                Ok(convert_crossterm_event(event))
            } else {
                Ok(None)
            }
        }

        /// Block until the next event we understand
        pub fn read(&self) -> Result<Event> {
            loop {
                if let Some(event) = convert_crossterm_event(crossterm::event::read()?) {
                    return Ok(event);
                }
            }
        }
    }

    impl Drop for EventPoller {
        fn drop(&mut self) {
            let _ = crossterm::execute!(
                std::io::stdout(),
                crossterm::event::DisableMouseCapture,
                crossterm::event::DisableFocusChange,
            );
            let _ = crossterm::terminal::disable_raw_mode();
        }
    }

    /// Convert crossterm event to our Event type
    fn convert_crossterm_event(event: crossterm::event::Event) -> Option<Event> {
        use crossterm::event::{Event as CEvent, KeyEventKind, MouseEventKind};

        match event {
            CEvent::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Event::Key(convert_key(key.code, key.modifiers)))
            }
            CEvent::Key(_) => None,
            CEvent::Mouse(me) => {
                let (col, row) = (me.column, me.row);
                let mouse_event = match me.kind {
                    MouseEventKind::Down(btn) => {
                        MouseEvent::Press(convert_button(btn), col, row)
                    }
                    MouseEventKind::Up(_) => MouseEvent::Release(col, row),
                    MouseEventKind::ScrollUp => MouseEvent::ScrollUp(col, row),
                    MouseEventKind::ScrollDown => MouseEvent::ScrollDown(col, row),
                    _ => return None,
                };
                Some(Event::Mouse(mouse_event))
            }
            CEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
            CEvent::FocusGained => Some(Event::FocusGained),
            CEvent::FocusLost => Some(Event::FocusLost),
            CEvent::Paste(_) => None,
        }
    }

    fn convert_button(button: crossterm::event::MouseButton) -> MouseButton {
        match button {
            crossterm::event::MouseButton::Left => MouseButton::Left,
            crossterm::event::MouseButton::Right => MouseButton::Right,
            crossterm::event::MouseButton::Middle => MouseButton::Middle,
        }
    }

    /// Convert crossterm key code to our Key type
    fn convert_key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Key {
        use crossterm::event::{KeyCode, KeyModifiers};

        if mods.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = code {
                return Key::Ctrl(c);
            }
        }

        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Esc,
            _ => Key::Null,
        }
    }

}
