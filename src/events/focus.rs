//! Focus System - Keyboard navigation and focus state
//!
//! Manages the document's single focus:
//! - `focused_index` signal (currently focused element)
//! - Focus cycling (Tab/Shift+Tab) through focusables in document order
//! - Explicit [`FocusChange`] payloads so callers can react to the move
//!   (the marquee controller uses them to track focus-within)
//!
//! # Example
//!
//! ```ignore
//! use flourish_tui::events::focus;
//!
//! // Navigate with Tab
//! if let Some(change) = focus::focus_next() {
//!     println!("focus moved {:?} -> {:?}", change.from, change.to);
//! }
//!
//! // Focus a specific element
//! focus::focus(element_index);
//! ```

use spark_signals::{signal, Signal};

use crate::document::{self, arrays};

// =============================================================================
// FOCUSED INDEX SIGNAL
// =============================================================================

thread_local! {
    static FOCUSED_INDEX: Signal<i32> = signal(-1);
}

/// Get the currently focused element index (-1 if none)
pub fn get_focused_index() -> i32 {
    FOCUSED_INDEX.with(|s| s.get())
}

/// Get the currently focused element, if any
pub fn focused() -> Option<usize> {
    let index = get_focused_index();
    if index >= 0 { Some(index as usize) } else { None }
}

/// Check if any element is focused
pub fn has_focus() -> bool {
    get_focused_index() >= 0
}

/// Check if a specific element is focused
pub fn is_focused(index: usize) -> bool {
    get_focused_index() == index as i32
}

// =============================================================================
// FOCUS CHANGE
// =============================================================================

/// A completed focus move. `from` and `to` are never equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub from: Option<usize>,
    pub to: Option<usize>,
}

/// Internal: set focus and report the move. No change, no report.
fn set_focus(new_index: i32) -> Option<FocusChange> {
    let old_index = get_focused_index();
    if old_index == new_index {
        return None;
    }

    FOCUSED_INDEX.with(|s| s.set(new_index));

    Some(FocusChange {
        from: if old_index >= 0 { Some(old_index as usize) } else { None },
        to: if new_index >= 0 { Some(new_index as usize) } else { None },
    })
}

// =============================================================================
// FOCUSABLE QUERIES
// =============================================================================

/// Get all focusable element indices, in document order.
///
/// Document order is the tab order; there is no separate tab index.
pub fn get_focusable_indices() -> Vec<usize> {
    document::document_order()
        .into_iter()
        .filter(|&index| arrays::get_focusable(index))
        .collect()
}

// =============================================================================
// FOCUS NAVIGATION
// =============================================================================

/// Find next focusable element
fn find_next_focusable(from_index: i32, direction: i32) -> i32 {
    let focusables = get_focusable_indices();

    if focusables.is_empty() {
        return -1;
    }

    let current_pos = if from_index >= 0 {
        focusables.iter().position(|&i| i == from_index as usize)
    } else {
        None
    };

    match current_pos {
        None => {
            // Not currently on a focusable: enter from the matching end
            if direction == 1 {
                focusables[0] as i32
            } else {
                focusables[focusables.len() - 1] as i32
            }
        }
        Some(pos) => {
            // Move in direction with wrap
            let len = focusables.len() as i32;
            let next_pos = ((pos as i32 + direction) % len + len) % len;
            focusables[next_pos as usize] as i32
        }
    }
}

/// Move focus to the next focusable element
pub fn focus_next() -> Option<FocusChange> {
    let next = find_next_focusable(get_focused_index(), 1);
    if next != -1 { set_focus(next) } else { None }
}

/// Move focus to the previous focusable element
pub fn focus_previous() -> Option<FocusChange> {
    let prev = find_next_focusable(get_focused_index(), -1);
    if prev != -1 { set_focus(prev) } else { None }
}

/// Focus a specific element by index.
/// Fails (returns None) when the element is gone or not focusable.
pub fn focus(index: usize) -> Option<FocusChange> {
    if document::is_registered(index) && arrays::get_focusable(index) {
        set_focus(index as i32)
    } else {
        None
    }
}

/// Clear focus (no element focused)
pub fn blur() -> Option<FocusChange> {
    set_focus(-1)
}

// =============================================================================
// RESET (for testing)
// =============================================================================

/// Reset all focus state (for testing)
pub fn reset_focus_state() {
    FOCUSED_INDEX.with(|s| s.set(-1));
}

// =============================================================================
// TESTS
// =============================================================================
