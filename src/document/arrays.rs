//! Presentation Arrays
//!
//! Per-element presentation state the behavior controllers write and a
//! renderer reads:
//! - rect: Laid-out geometry in page coordinates
//! - flags: Styling flags (nav-open, revealed)
//! - animation: Ambient animation play state
//! - transform: Visual displacement on top of layout
//! - expanded: Disclosure state announced to assistive tech
//! - focusable: Can receive focus
//!
//! Uses `TrackedSlotArray` for stable reactive cells with fine-grained
//! tracking, plus one document-level signal for flags that apply to the
//! page as a whole (keyboard modality).

use spark_signals::{signal, Signal, TrackedSlotArray};

use crate::types::{Animation, Rect, StyleFlags, Transform};

// =============================================================================
// Arrays
// =============================================================================

thread_local! {
    /// Element geometry in page coordinates.
    static RECT: TrackedSlotArray<Rect> = TrackedSlotArray::new(Some(Rect::ZERO));

    /// Presentation flags.
    static FLAGS: TrackedSlotArray<StyleFlags> = TrackedSlotArray::new(Some(StyleFlags::NONE));

    /// Ambient animation play state.
    static ANIMATION: TrackedSlotArray<Animation> = TrackedSlotArray::new(Some(Animation::Running));

    /// Visual transform, if any.
    static TRANSFORM: TrackedSlotArray<Option<Transform>> = TrackedSlotArray::new(Some(None));

    /// Disclosure state (None = element is not a disclosure control).
    static EXPANDED: TrackedSlotArray<Option<bool>> = TrackedSlotArray::new(Some(None));

    /// Is element focusable.
    static FOCUSABLE: TrackedSlotArray<bool> = TrackedSlotArray::new(Some(false));
}

thread_local! {
    /// Flags that apply to the document as a whole rather than one element.
    static DOCUMENT_FLAGS: Signal<StyleFlags> = signal(StyleFlags::NONE);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    RECT.with(|arr| { let _ = arr.peek(index); });
    FLAGS.with(|arr| { let _ = arr.peek(index); });
    ANIMATION.with(|arr| { let _ = arr.peek(index); });
    TRANSFORM.with(|arr| { let _ = arr.peek(index); });
    EXPANDED.with(|arr| { let _ = arr.peek(index); });
    FOCUSABLE.with(|arr| { let _ = arr.peek(index); });
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    RECT.with(|arr| arr.clear(index));
    FLAGS.with(|arr| arr.clear(index));
    ANIMATION.with(|arr| arr.clear(index));
    TRANSFORM.with(|arr| arr.clear(index));
    EXPANDED.with(|arr| arr.clear(index));
    FOCUSABLE.with(|arr| arr.clear(index));
}

/// Reset all arrays and the document-level flags.
pub fn reset() {
    RECT.with(|arr| arr.clear_all());
    FLAGS.with(|arr| arr.clear_all());
    ANIMATION.with(|arr| arr.clear_all());
    TRANSFORM.with(|arr| arr.clear_all());
    EXPANDED.with(|arr| arr.clear_all());
    FOCUSABLE.with(|arr| arr.clear_all());
    DOCUMENT_FLAGS.with(|s| s.set(StyleFlags::NONE));
}

// =============================================================================
// Rect
// =============================================================================

/// Get element rect at index (reactive).
pub fn get_rect(index: usize) -> Rect {
    RECT.with(|arr| arr.get(index))
}

/// Set element rect at index.
pub fn set_rect(index: usize, rect: Rect) {
    RECT.with(|arr| arr.set_value(index, rect));
}

// =============================================================================
// Flags
// =============================================================================

/// Get presentation flags at index (reactive).
pub fn get_flags(index: usize) -> StyleFlags {
    FLAGS.with(|arr| arr.get(index))
}

/// Set presentation flags at index.
pub fn set_flags(index: usize, flags: StyleFlags) {
    FLAGS.with(|arr| arr.set_value(index, flags));
}

/// Raise a flag at index, keeping the others.
pub fn add_flag(index: usize, flag: StyleFlags) {
    let current = FLAGS.with(|arr| arr.peek(index));
    FLAGS.with(|arr| arr.set_value(index, current | flag));
}

/// Lower a flag at index, keeping the others.
pub fn remove_flag(index: usize, flag: StyleFlags) {
    let current = FLAGS.with(|arr| arr.peek(index));
    FLAGS.with(|arr| arr.set_value(index, current - flag));
}

/// Check a flag at index (reactive).
pub fn has_flag(index: usize, flag: StyleFlags) -> bool {
    FLAGS.with(|arr| arr.get(index)).contains(flag)
}

// =============================================================================
// Animation
// =============================================================================

/// Get animation play state at index (reactive).
pub fn get_animation(index: usize) -> Animation {
    ANIMATION.with(|arr| arr.get(index))
}

/// Set animation play state at index.
pub fn set_animation(index: usize, state: Animation) {
    ANIMATION.with(|arr| arr.set_value(index, state));
}

// =============================================================================
// Transform
// =============================================================================

/// Get transform at index (reactive).
pub fn get_transform(index: usize) -> Option<Transform> {
    TRANSFORM.with(|arr| arr.get(index))
}

/// Set or clear transform at index.
pub fn set_transform(index: usize, transform: Option<Transform>) {
    TRANSFORM.with(|arr| arr.set_value(index, transform));
}

// =============================================================================
// Expanded
// =============================================================================

/// Get disclosure state at index (reactive).
pub fn get_expanded(index: usize) -> Option<bool> {
    EXPANDED.with(|arr| arr.get(index))
}

/// Set disclosure state at index.
pub fn set_expanded(index: usize, expanded: Option<bool>) {
    EXPANDED.with(|arr| arr.set_value(index, expanded));
}

// =============================================================================
// Focusable
// =============================================================================

/// Get focusable at index (reactive).
pub fn get_focusable(index: usize) -> bool {
    FOCUSABLE.with(|arr| arr.get(index))
}

/// Set focusable at index.
pub fn set_focusable(index: usize, focusable: bool) {
    FOCUSABLE.with(|arr| arr.set_value(index, focusable));
}

// =============================================================================
// Document-level Flags
// =============================================================================

/// Get the document-level flags (reactive).
pub fn document_flags() -> StyleFlags {
    DOCUMENT_FLAGS.with(|s| s.get())
}

/// Raise or lower one document-level flag.
pub fn set_document_flag(flag: StyleFlags, enabled: bool) {
    DOCUMENT_FLAGS.with(|s| {
        let current = s.get();
        let next = if enabled { current | flag } else { current - flag };
        if next != current {
            s.set(next);
        }
    });
}
