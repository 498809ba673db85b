//! Events Module - Input event types and shared tracking state
//!
//! Everything the behaviors consume from the outside world flows
//! through here:
//!
//! - **Pointer** - Event types, click synthesis, enter/leave tracking
//! - **Keys** - Event types and modifier state
//! - **Focus** - The document's single focus and tab cycling
//! - **Input** - crossterm polling and conversion
//!
//! Dispatch order across behaviors is owned by the page coordinator,
//! not by this module.

pub mod focus;
pub mod input;
pub mod keys;
pub mod pointer;

pub use input::InputEvent;
pub use keys::{KeyEvent, KeyState, Modifiers};
pub use pointer::{Click, ClickTracker, Containment, Crossing, PointerButton, PointerEvent, PointerKind};
