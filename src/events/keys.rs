//! Key Events - Types for keyboard input
//!
//! Event types only. Polling lives in the input module and dispatch is
//! the page coordinator's job, so nothing here owns stdin or a handler
//! registry.

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_plain_press() {
        let event = KeyEvent::new("Tab");
        assert_eq!(event.key, "Tab");
        assert_eq!(event.modifiers, Modifiers::none());
        assert!(event.is_press());
    }

    #[test]
    fn test_with_modifiers() {
        let event = KeyEvent::with_modifiers("Tab", Modifiers::shift());
        assert!(event.modifiers.shift);
        assert!(!event.modifiers.ctrl);
    }

    #[test]
    fn test_release_is_not_press() {
        let mut event = KeyEvent::new("Escape");
        event.state = KeyState::Release;
        assert!(!event.is_press());
    }
}
