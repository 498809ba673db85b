//! Core types for flourish-tui.
//!
//! These types define the foundation that everything builds on.
//! They flow through the document registry and define what the behavior
//! controllers read and write.

// =============================================================================
// Rect - Cell geometry
// =============================================================================

/// A rectangle in terminal cell coordinates.
///
/// Using integers for exact comparison - cells are discrete, there is no
/// sub-cell geometry. The horizontal span is `[x, x + width)` and the
/// vertical span is `[y, y + height)`, so the right and bottom edges are
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The empty rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Total cell count. Zero when either dimension is zero.
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// First row below the rectangle.
    pub const fn bottom(&self) -> u16 {
        self.y + self.height
    }

    /// First column right of the rectangle.
    pub const fn right(&self) -> u16 {
        self.x + self.width
    }

    /// Whether the cell at (x, y) lies inside. Edges are half-open, so a
    /// zero-sized rectangle contains nothing.
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Position of a point relative to the rectangle, as fractions of its
    /// size. The left/top edge maps to 0.0 and the right/bottom edge
    /// approaches 1.0. Meaningful when the point lies inside; a degenerate
    /// rectangle maps everything to 0.0.
    pub fn normalized(&self, x: u16, y: u16) -> (f32, f32) {
        if self.width == 0 || self.height == 0 {
            return (0.0, 0.0);
        }
        let nx = (x as i32 - self.x as i32) as f32 / self.width as f32;
        let ny = (y as i32 - self.y as i32) as f32 / self.height as f32;
        (nx, ny)
    }

    /// Position of a point relative to the rectangle's center, in the range
    /// [-0.5, 0.5) per axis. The center maps to (0.0, 0.0).
    pub fn centered(&self, x: u16, y: u16) -> (f32, f32) {
        let (nx, ny) = self.normalized(x, y);
        (nx - 0.5, ny - 0.5)
    }
}

// =============================================================================
// Role - What a registered element is for
// =============================================================================

/// Structural role of a registered element.
///
/// Behaviors find their targets by role instead of holding direct
/// references, the way a stylesheet selector finds nodes by class.
/// Elements that no behavior targets are `Generic` - they still
/// participate in hit testing, containment, and focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Plain content with no behavior attached.
    #[default]
    Generic,
    /// The scrollable region the page is shown through. At most one.
    Viewport,
    /// Collapsible navigation region.
    NavRegion,
    /// Control that opens and closes the navigation region.
    NavToggle,
    /// Element revealed when it scrolls into view.
    Reveal,
    /// Scrolling strip that pauses under the pointer or focus.
    Marquee,
    /// The moving track inside a marquee.
    MarqueeContent,
    /// Pointer-tracking banner region hosting parallax layers.
    Hero,
    /// Decorative layer inside a hero.
    HeroLayer,
    /// Card that tilts toward the pointer.
    Card,
}

// =============================================================================
// StyleFlags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Presentation flags as a bitfield for efficient storage and comparison.
    ///
    /// Behaviors raise and lower these; a renderer maps them to styling.
    /// Combine with bitwise OR: `StyleFlags::NAV_OPEN | StyleFlags::REVEALED`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const NONE = 0;
        /// The navigation region is expanded.
        const NAV_OPEN = 1 << 0;
        /// The element has entered the viewport at least once. Never lowered.
        const REVEALED = 1 << 1;
        /// Document-level: the user is navigating by keyboard.
        const USING_KEYBOARD = 1 << 2;
    }
}

// =============================================================================
// Animation - Play state of an element's ambient animation
// =============================================================================

/// Play state for an element's ambient animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    /// Advancing normally.
    #[default]
    Running,
    /// Frozen at its current phase, resumable.
    Paused,
    /// Disabled entirely. Used when the user prefers reduced motion.
    Off,
}

// =============================================================================
// Transform - Visual displacement applied on top of layout
// =============================================================================

/// Depth hint a renderer applies when projecting [`Transform::Tilted`].
/// Larger values flatten the tilt, smaller values exaggerate it.
pub const TILT_PERSPECTIVE: f32 = 600.0;

/// A visual transform applied on top of an element's laid-out position.
///
/// Transforms are presentation only - they never move an element's
/// registered rectangle, so hit testing and intersection keep using
/// the untransformed geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    /// Translated by (x, y) cells and rotated by `rotate` degrees.
    /// Fractional offsets let a renderer interpolate between cells.
    Shifted { x: f32, y: f32, rotate: f32 },
    /// Rotated `rotate_x` degrees around the horizontal axis and
    /// `rotate_y` degrees around the vertical axis, projected with
    /// [`TILT_PERSPECTIVE`].
    Tilted { rotate_x: f32, rotate_y: f32 },
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_is_half_open() {
        let r = Rect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 3)); // right edge exclusive
        assert!(!r.contains(2, 5)); // bottom edge exclusive
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn zero_sized_rect_contains_nothing() {
        let r = Rect::new(5, 5, 0, 0);
        assert!(!r.contains(5, 5));
        assert_eq!(r.area(), 0);
    }

    #[test]
    fn rect_area_and_edges() {
        let r = Rect::new(1, 2, 10, 4);
        assert_eq!(r.area(), 40);
        assert_eq!(r.right(), 11);
        assert_eq!(r.bottom(), 6);
    }

    #[test]
    fn normalized_maps_origin_and_interior() {
        let r = Rect::new(4, 4, 4, 4);
        assert_eq!(r.normalized(4, 4), (0.0, 0.0));
        assert_eq!(r.normalized(5, 7), (0.25, 0.75));
    }

    #[test]
    fn centered_maps_corners_symmetrically() {
        let r = Rect::new(0, 0, 4, 4);
        assert_eq!(r.centered(0, 0), (-0.5, -0.5));
        assert_eq!(r.centered(2, 2), (0.0, 0.0));
        assert_eq!(r.centered(3, 1), (0.25, -0.25));
    }

    #[test]
    fn degenerate_rect_normalizes_to_origin() {
        let r = Rect::new(3, 3, 0, 5);
        assert_eq!(r.normalized(3, 4), (0.0, 0.0));
    }

    #[test]
    fn style_flags_combine() {
        let mut flags = StyleFlags::NAV_OPEN | StyleFlags::REVEALED;
        assert!(flags.contains(StyleFlags::NAV_OPEN));
        flags.remove(StyleFlags::NAV_OPEN);
        assert!(!flags.contains(StyleFlags::NAV_OPEN));
        assert!(flags.contains(StyleFlags::REVEALED));
        assert_eq!(StyleFlags::default(), StyleFlags::NONE);
    }

    #[test]
    fn animation_defaults_to_running() {
        assert_eq!(Animation::default(), Animation::Running);
    }

    #[test]
    fn transforms_compare_exactly() {
        let a = Transform::Tilted {
            rotate_x: 3.0,
            rotate_y: -3.0,
        };
        let b = Transform::Tilted {
            rotate_x: 3.0,
            rotate_y: -3.0,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            Transform::Shifted {
                x: 0.0,
                y: 0.0,
                rotate: 0.0
            }
        );
    }
}
