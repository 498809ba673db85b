//! Input Module - Event conversion and polling
//!
//! Bridges crossterm's event system with our pointer and key types.
//! Scroll wheel input becomes its own [`InputEvent::Scroll`] variant
//! carrying wheel notches; the page maps notches to lines.
//!
//! # Example
//!
//! ```ignore
//! use flourish_tui::events::input::{poll_event, InputEvent};
//! use std::time::Duration;
//!
//! // Event loop
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         behaviors.handle_event(&event);
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent,
    KeyCode, KeyModifiers,
    KeyEvent as CrosstermKeyEvent,
    MouseButton as CrosstermMouseButton,
    MouseEvent as CrosstermMouseEvent,
    MouseEventKind,
    poll, read,
    EnableMouseCapture, DisableMouseCapture,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;

use super::keys::{KeyEvent, KeyState, Modifiers};
use super::pointer::{PointerButton, PointerEvent, PointerKind};

// =============================================================================
// INPUT EVENT ENUM
// =============================================================================

/// Unified event type for the page
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Pointer event (move, down, up) in screen coordinates
    Pointer(PointerEvent),
    /// Keyboard event
    Key(KeyEvent),
    /// Scroll wheel notches. Positive scrolls down the page.
    Scroll(i32),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

// =============================================================================
// MOUSE EVENT CONVERSION
// =============================================================================

/// Convert a crossterm MouseEvent.
///
/// Wheel movement becomes [`InputEvent::Scroll`]; everything else becomes
/// a pointer event. Drags count as moves so hover tracking keeps running
/// while a button is held. Horizontal wheel movement is ignored, the page
/// only scrolls vertically.
pub fn convert_mouse_event(event: CrosstermMouseEvent) -> InputEvent {
    let (kind, button) = match event.kind {
        MouseEventKind::Down(btn) => (PointerKind::Down, convert_pointer_button(btn)),
        MouseEventKind::Up(btn) => (PointerKind::Up, convert_pointer_button(btn)),
        MouseEventKind::Drag(btn) => (PointerKind::Move, convert_pointer_button(btn)),
        MouseEventKind::Moved => (PointerKind::Move, PointerButton::None),
        MouseEventKind::ScrollDown => return InputEvent::Scroll(1),
        MouseEventKind::ScrollUp => return InputEvent::Scroll(-1),
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollRight => return InputEvent::None,
    };

    InputEvent::Pointer(PointerEvent {
        kind,
        button,
        x: event.column,
        y: event.row,
    })
}

/// Convert crossterm MouseButton to our PointerButton
fn convert_pointer_button(btn: CrosstermMouseButton) -> PointerButton {
    match btn {
        CrosstermMouseButton::Left => PointerButton::Left,
        CrosstermMouseButton::Right => PointerButton::Right,
        CrosstermMouseButton::Middle => PointerButton::Middle,
    }
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyEvent {
    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Null => String::new(),
        _ => String::new(),
    };

    // Terminals report Shift+Tab as BackTab, often without the modifier
    let mut modifiers = convert_modifiers(event.modifiers);
    if event.code == KeyCode::BackTab {
        modifiers.shift = true;
    }

    let state = match event.kind {
        crossterm::event::KeyEventKind::Press => KeyState::Press,
        crossterm::event::KeyEventKind::Repeat => KeyState::Repeat,
        crossterm::event::KeyEventKind::Release => KeyState::Release,
    };

    KeyEvent { key, modifiers, state }
}

// =============================================================================
// MODIFIER CONVERSION
// =============================================================================

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: false, // Not exposed by crossterm
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Mouse(mouse) => Ok(convert_mouse_event(mouse)),
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// MOUSE CAPTURE
// =============================================================================

/// Enable mouse capture.
pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

/// Disable mouse capture.
pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}

// =============================================================================
// TESTS
// =============================================================================
