//! Pointer Events - Types, click synthesis, and enter/leave tracking
//!
//! Raw pointer input arrives as move/down/up at a cell coordinate. The
//! two helpers here rebuild the higher-level notions the behaviors
//! actually consume:
//!
//! - [`ClickTracker`] turns a down/up pair on the same target into a
//!   [`Click`], matching how a click only counts when press and release
//!   land on the same element with the same button.
//! - [`Containment`] turns a stream of "is the pointer inside" samples
//!   into enter/leave crossings, one cell per tracked region.

// =============================================================================
// TYPES
// =============================================================================

/// Pointer action type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Move,
    Down,
    Up,
}

/// Pointer button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
    #[default]
    None,
}

/// Pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    /// Action type (move, down, up)
    pub kind: PointerKind,
    /// Button pressed, if any
    pub button: PointerButton,
    /// X coordinate (0-indexed)
    pub x: u16,
    /// Y coordinate (0-indexed)
    pub y: u16,
}

impl PointerEvent {
    /// Create a pointer down event
    pub fn down(button: PointerButton, x: u16, y: u16) -> Self {
        Self { kind: PointerKind::Down, button, x, y }
    }

    /// Create a pointer up event
    pub fn up(button: PointerButton, x: u16, y: u16) -> Self {
        Self { kind: PointerKind::Up, button, x, y }
    }

    /// Create a pointer move event
    pub fn move_to(x: u16, y: u16) -> Self {
        Self { kind: PointerKind::Move, button: PointerButton::None, x, y }
    }
}

// =============================================================================
// CLICK SYNTHESIS
// =============================================================================

/// A synthesized click: press and release on the same target with the
/// same button. Coordinates are in page coordinates, from the release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    /// Element under the pointer, or None over empty page area.
    pub target: Option<usize>,
    pub button: PointerButton,
    pub x: u16,
    pub y: u16,
}

/// Tracks the pressed target between pointer down and up.
#[derive(Debug, Default)]
pub struct ClickTracker {
    pressed: Option<(Option<usize>, PointerButton)>,
}

impl ClickTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pointer press on a target.
    pub fn press(&mut self, target: Option<usize>, button: PointerButton) {
        self.pressed = Some((target, button));
    }

    /// Record a pointer release. Returns a [`Click`] when the release
    /// lands on the same target with the same button as the press.
    /// Always clears the pressed state.
    pub fn release(
        &mut self,
        target: Option<usize>,
        button: PointerButton,
        x: u16,
        y: u16,
    ) -> Option<Click> {
        let pressed = self.pressed.take()?;
        if pressed == (target, button) {
            Some(Click { target, button, x, y })
        } else {
            None
        }
    }
}

// =============================================================================
// ENTER/LEAVE TRACKING
// =============================================================================

/// A containment boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entered,
    Left,
}

/// One region's pointer-containment state.
///
/// Feed it a containment sample per pointer move; it reports the edge
/// transitions and swallows everything else.
#[derive(Debug, Default)]
pub struct Containment {
    inside: bool,
}

impl Containment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with the latest containment sample.
    pub fn update(&mut self, inside: bool) -> Option<Crossing> {
        match (self.inside, inside) {
            (false, true) => {
                self.inside = true;
                Some(Crossing::Entered)
            }
            (true, false) => {
                self.inside = false;
                Some(Crossing::Left)
            }
            _ => None,
        }
    }

    /// Whether the last sample was inside.
    pub fn is_inside(&self) -> bool {
        self.inside
    }
}
