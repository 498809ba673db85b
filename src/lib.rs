//! # flourish-tui
//!
//! Reactive page behaviors for terminal content pages.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! flourish-tui uses a parallel arrays (ECS-style) architecture where page
//! elements are indices into columnar arrays rather than objects. The host
//! registers its laid-out elements once; a set of small behavior controllers
//! then folds the input stream into presentation state (style flags,
//! animation states, transforms) that a renderer reads reactively.
//!
//! Every behavior is a fold over the same events:
//! ```text
//! Registered Elements → Input Events → PageBehaviors → Flags / Animation / Transform
//! ```
//!
//! None of the controllers know about each other. Shared facts (focus,
//! click synthesis, scroll position) live in the coordinator and reach
//! the controllers as plain values.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rect, Role, StyleFlags, Transform)
//! - [`document`] - Element registry and parallel presentation arrays
//! - [`events`] - Input conversion, click synthesis, focus state
//! - [`viewport`] - Page scrolling and intersection watching
//! - [`behavior`] - Behavior controllers and their coordinator
//! - [`page`] - Mount/tick/run lifecycle

pub mod behavior;
pub mod document;
pub mod events;
pub mod page;
pub mod types;
pub mod viewport;

// Re-export commonly used items
pub use types::*;

pub use document::{
    all_with_role, descendants_with_role, document_order, element_count, first_with_role,
    get_id, get_index, get_role, hit_test, is_registered, is_within, parent_of,
    register_element, remove_element, reset_document, ElementProps,
};

pub use events::{
    // Focus
    focus::{
        blur, focus, focus_next, focus_previous, focused, get_focusable_indices,
        get_focused_index, has_focus, is_focused, reset_focus_state, FocusChange,
    },
    // Input
    input::{disable_mouse, enable_mouse, poll_event, read_event},
    Click, ClickTracker, Containment, Crossing, InputEvent, KeyEvent, KeyState, Modifiers,
    PointerButton, PointerEvent, PointerKind,
};

pub use viewport::{
    IntersectionWatcher, Viewport, INTERSECTION_THRESHOLD, LINE_SCROLL, PAGE_SCROLL_FACTOR,
    WHEEL_SCROLL,
};

pub use behavior::{
    motion, Capabilities, MarqueePause, ModalityTracker, NavState, NavToggle, PageBehaviors,
    PageContext, Parallax, RevealOnScroll, Tilt, LAYER_DEPTH_STEP, LAYER_ROTATION_EVEN,
    LAYER_ROTATION_ODD, TILT_RANGE_DEG,
};

pub use page::{mount, mount_with, run, tick, PageHandle};
