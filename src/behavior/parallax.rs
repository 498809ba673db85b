//! Parallax - Pointer-tracking hero layers
//!
//! While the pointer is inside the hero region, every decorative layer
//! shifts with it. A layer's travel grows with its index, so deeper
//! layers move further for the same pointer offset, and each layer
//! carries a fixed base rotation that alternates direction down the
//! stack. Leaving the hero snaps all layers back by clearing their
//! transforms.
//!
//! Layer descriptors are computed once at install from document order;
//! pointer moves only read geometry and write transforms.

use crate::document::{self, arrays};
use crate::events::pointer::{Containment, Crossing};
use crate::types::{Rect, Role, Transform};

use super::context::PageContext;

/// Travel in cells per unit of centered pointer offset, per layer step.
pub const LAYER_DEPTH_STEP: f32 = 6.0;

/// Base rotation for even-indexed layers, in degrees.
pub const LAYER_ROTATION_EVEN: f32 = 6.0;

/// Base rotation for odd-indexed layers, in degrees.
pub const LAYER_ROTATION_ODD: f32 = -12.0;

/// One decorative layer's precomputed motion parameters.
#[derive(Debug)]
struct Layer {
    element: usize,
    depth: f32,
    base_rotation: f32,
}

/// Pointer-tracking controller for the hero region.
#[derive(Debug)]
pub struct Parallax {
    hero: usize,
    layers: Vec<Layer>,
    pointer: Containment,
}

impl Parallax {
    /// Install against the first hero region and its layers. None when
    /// there is no hero or the user prefers reduced motion; the layers
    /// then simply never move.
    pub fn install(ctx: &PageContext) -> Option<Self> {
        if ctx.reduced_motion {
            return None;
        }
        let hero = document::first_with_role(Role::Hero)?;

        let layers = document::descendants_with_role(hero, Role::HeroLayer)
            .into_iter()
            .enumerate()
            .map(|(i, element)| Layer {
                element,
                depth: (i as f32 + 1.0) * LAYER_DEPTH_STEP,
                base_rotation: if i % 2 == 0 {
                    LAYER_ROTATION_EVEN
                } else {
                    LAYER_ROTATION_ODD
                },
            })
            .collect();

        Some(Self {
            hero,
            layers,
            pointer: Containment::new(),
        })
    }

    /// Number of layers under control.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Pointer moved to a page coordinate.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        let rect = arrays::get_rect(self.hero);
        let inside = rect.contains(x, y);
        match self.pointer.update(inside) {
            Some(Crossing::Left) => self.reset_layers(),
            _ if inside => self.track(rect, x, y),
            _ => {}
        }
    }

    /// Shift every layer toward the pointer's centered offset.
    fn track(&self, rect: Rect, x: u16, y: u16) {
        let (offset_x, offset_y) = rect.centered(x, y);
        for layer in &self.layers {
            arrays::set_transform(
                layer.element,
                Some(Transform::Shifted {
                    x: offset_x * layer.depth,
                    y: offset_y * layer.depth,
                    rotate: layer.base_rotation,
                }),
            );
        }
    }

    fn reset_layers(&self) {
        for layer in &self.layers {
            arrays::set_transform(layer.element, None);
        }
    }
}
