//! Input Modality - Keyboard vs pointer tracking
//!
//! The page styles focus outlines only for keyboard users. Tab raises
//! the document's `USING_KEYBOARD` flag, any pointer press lowers it,
//! and everything else leaves it alone. The flag lives on the document,
//! not on an element; a renderer reads it through
//! [`arrays::document_flags`].

use tracing::debug;

use crate::document::arrays;
use crate::events::keys::KeyEvent;
use crate::types::StyleFlags;

/// Tracks which input modality drove the last interaction.
#[derive(Debug, Default)]
pub struct ModalityTracker {
    using_keyboard: bool,
}

impl ModalityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user's last navigation input was the keyboard.
    pub fn using_keyboard(&self) -> bool {
        self.using_keyboard
    }

    /// A key went down. Only Tab signals keyboard navigation; other keys
    /// say nothing about how the user is moving around.
    pub fn on_key_press(&mut self, event: &KeyEvent) {
        if event.key == "Tab" && !self.using_keyboard {
            self.using_keyboard = true;
            arrays::set_document_flag(StyleFlags::USING_KEYBOARD, true);
            debug!("modality: keyboard");
        }
    }

    /// A pointer button went down anywhere.
    pub fn on_pointer_down(&mut self) {
        if self.using_keyboard {
            self.using_keyboard = false;
            arrays::set_document_flag(StyleFlags::USING_KEYBOARD, false);
            debug!("modality: pointer");
        }
    }
}
