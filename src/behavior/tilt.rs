//! Tilt - Cards leaning toward the pointer
//!
//! Each card tilts around both axes while the pointer is over it,
//! proportional to the pointer's distance from the card's center. The
//! full traverse of the card spans [`TILT_RANGE_DEG`] degrees, so the
//! center is flat and each edge leans half the range toward the
//! pointer. Leaving the card clears the transform.
//!
//! Every card gets its own controller with its own enter/leave state;
//! hovering one card never disturbs another.

use crate::document::{self, arrays};
use crate::events::pointer::{Containment, Crossing};
use crate::types::{Role, Transform};

use super::context::PageContext;

/// Degrees of rotation across a card's full width or height.
pub const TILT_RANGE_DEG: f32 = 6.0;

/// Tilt controller for one card.
#[derive(Debug)]
pub struct Tilt {
    card: usize,
    pointer: Containment,
}

impl Tilt {
    /// Install one controller per registered card. Empty under reduced
    /// motion; the cards then stay flat.
    pub fn install_all(ctx: &PageContext) -> Vec<Self> {
        if ctx.reduced_motion {
            return Vec::new();
        }
        document::all_with_role(Role::Card)
            .into_iter()
            .map(|card| Self {
                card,
                pointer: Containment::new(),
            })
            .collect()
    }

    /// The card this controller tilts.
    pub fn card(&self) -> usize {
        self.card
    }

    /// Pointer moved to a page coordinate.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        let rect = arrays::get_rect(self.card);
        let inside = rect.contains(x, y);
        match self.pointer.update(inside) {
            Some(Crossing::Left) => arrays::set_transform(self.card, None),
            _ if inside => {
                let (px, py) = rect.normalized(x, y);
                arrays::set_transform(
                    self.card,
                    Some(Transform::Tilted {
                        rotate_x: (py - 0.5) * TILT_RANGE_DEG,
                        rotate_y: (px - 0.5) * -TILT_RANGE_DEG,
                    }),
                );
            }
            _ => {}
        }
    }
}
