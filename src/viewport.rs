//! Viewport Module - Page scrolling and intersection watching
//!
//! The page is laid out in page coordinates and shown through one
//! viewport element whose rect is in screen coordinates. This module
//! owns the mapping between the two:
//!
//! - [`Viewport`] holds the scroll offset, clamps scroll operations,
//!   and translates screen coordinates to page coordinates.
//! - [`IntersectionWatcher`] reports which watched elements have enough
//!   of their area inside the visible window. Each element reports once
//!   and is then dropped from watching.
//!
//! Geometry is read live from the document arrays, so host relayouts
//! (resize) are picked up without invalidation bookkeeping.

use crate::document::{self, arrays};
use crate::types::{Rect, Role};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Scroll amount for one mouse wheel notch (lines).
pub const WHEEL_SCROLL: u16 = 3;

/// Scroll amount for Page Up/Down (fraction of viewport height).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

/// Fraction of an element's area that must be visible before it counts
/// as intersecting the viewport.
pub const INTERSECTION_THRESHOLD: f32 = 0.12;

// =============================================================================
// VIEWPORT
// =============================================================================

/// The scrollable window the page is shown through.
///
/// `element` is the registered [`Role::Viewport`] element; its rect is the
/// screen region the page occupies. The page itself scrolls vertically
/// only, so the visible window in page coordinates is
/// `[scroll_y, scroll_y + height)` across the full viewport width.
#[derive(Debug)]
pub struct Viewport {
    element: usize,
    scroll_y: u16,
}

impl Viewport {
    /// Wrap a registered viewport element, starting at the top.
    pub fn new(element: usize) -> Self {
        Self { element, scroll_y: 0 }
    }

    /// Find the document's viewport element, if one was registered.
    pub fn find() -> Option<Self> {
        document::first_with_role(Role::Viewport).map(Self::new)
    }

    /// The viewport element's index.
    pub fn element(&self) -> usize {
        self.element
    }

    /// Current scroll offset in lines from the top of the page.
    pub fn scroll_y(&self) -> u16 {
        self.scroll_y
    }

    /// Screen region the page occupies.
    fn screen_rect(&self) -> Rect {
        arrays::get_rect(self.element)
    }

    /// Visible height in lines.
    pub fn height(&self) -> u16 {
        self.screen_rect().height
    }

    /// Total page height: the bottom edge of the lowest registered
    /// element. The viewport element itself does not count, its rect is
    /// in screen coordinates.
    pub fn content_height(&self) -> u16 {
        document::document_order()
            .into_iter()
            .filter(|&index| index != self.element)
            .map(|index| arrays::get_rect(index).bottom())
            .max()
            .unwrap_or(0)
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> u16 {
        self.content_height().saturating_sub(self.height())
    }

    /// Scroll by a line delta. Positive scrolls down the page.
    ///
    /// Returns `true` if scrolling occurred, `false` if already at a
    /// boundary.
    pub fn scroll_by(&mut self, delta: i32) -> bool {
        let max = self.max_scroll();
        let new_y = ((self.scroll_y as i32) + delta).clamp(0, max as i32) as u16;
        if new_y == self.scroll_y {
            return false;
        }
        self.scroll_y = new_y;
        true
    }

    /// Scroll by most of a viewport height. `direction` is +1 for down,
    /// -1 for up.
    pub fn scroll_page(&mut self, direction: i32) -> bool {
        let amount = (self.height() as f32 * PAGE_SCROLL_FACTOR) as i32;
        self.scroll_by(amount * direction.signum())
    }

    /// Scroll to an absolute offset, clamped. Returns `true` on change.
    pub fn scroll_to(&mut self, y: u16) -> bool {
        let new_y = y.min(self.max_scroll());
        if new_y == self.scroll_y {
            return false;
        }
        self.scroll_y = new_y;
        true
    }

    /// Translate screen coordinates to page coordinates.
    pub fn to_page(&self, x: u16, y: u16) -> (u16, u16) {
        let screen = self.screen_rect();
        (
            x.saturating_sub(screen.x),
            y.saturating_sub(screen.y).saturating_add(self.scroll_y),
        )
    }

    /// The visible window in page coordinates.
    fn window(&self) -> Rect {
        let screen = self.screen_rect();
        Rect::new(0, self.scroll_y, screen.width, screen.height)
    }

    /// Fraction of an element rect's area inside the visible window,
    /// in [0.0, 1.0].
    ///
    /// A zero-area rect counts as fully visible when its origin lies
    /// within the closed window, so markers on a region boundary still
    /// report.
    pub fn visible_fraction(&self, rect: Rect) -> f32 {
        let window = self.window();

        if rect.area() == 0 {
            let inside_x = rect.x >= window.x && rect.x <= window.right();
            let inside_y = rect.y >= window.y && rect.y <= window.bottom();
            return if inside_x && inside_y { 1.0 } else { 0.0 };
        }

        let overlap_w =
            (rect.right().min(window.right()) as i32 - rect.x.max(window.x) as i32).max(0);
        let overlap_h =
            (rect.bottom().min(window.bottom()) as i32 - rect.y.max(window.y) as i32).max(0);
        let overlap = (overlap_w * overlap_h) as f32;

        overlap / rect.area() as f32
    }
}

// =============================================================================
// INTERSECTION WATCHER
// =============================================================================

/// Watches element rects for crossing the visibility threshold.
///
/// One-shot per element: once an element has reported, it is removed,
/// so scrolling away and back produces nothing new. Elements keep
/// observation order, which keeps reporting deterministic.
#[derive(Debug, Default)]
pub struct IntersectionWatcher {
    observed: Vec<usize>,
}

impl IntersectionWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start watching an element. Watching one twice is a no-op.
    pub fn observe(&mut self, index: usize) {
        if !self.observed.contains(&index) {
            self.observed.push(index);
        }
    }

    /// Stop watching an element.
    pub fn unobserve(&mut self, index: usize) {
        self.observed.retain(|&i| i != index);
    }

    /// Whether an element is currently watched.
    pub fn is_observing(&self, index: usize) -> bool {
        self.observed.contains(&index)
    }

    /// Number of elements currently watched.
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Elements whose visible fraction has reached
    /// [`INTERSECTION_THRESHOLD`]. Reported elements stop being watched.
    pub fn take_crossed(&mut self, viewport: &Viewport) -> Vec<usize> {
        let crossed: Vec<usize> = self
            .observed
            .iter()
            .copied()
            .filter(|&index| {
                viewport.visible_fraction(arrays::get_rect(index)) >= INTERSECTION_THRESHOLD
            })
            .collect();

        self.observed.retain(|index| !crossed.contains(index));
        crossed
    }
}
