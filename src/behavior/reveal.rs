//! Reveal on Scroll - One-shot visibility styling
//!
//! Elements registered with [`Role::Reveal`] start unstyled and gain the
//! `REVEALED` flag the first time enough of them is inside the viewport.
//! The flag is never taken away; scrolling back up changes nothing.
//!
//! Two degraded paths reveal everything at install time instead of
//! watching: the user prefers reduced motion, or there is no viewport
//! to watch against. Either way the page never hides content behind a
//! missing animation.

use tracing::debug;

use crate::document::{self, arrays};
use crate::types::{Role, StyleFlags};
use crate::viewport::{IntersectionWatcher, Viewport};

use super::context::PageContext;

/// Controller revealing elements as they scroll into view.
#[derive(Debug)]
pub struct RevealOnScroll {
    watcher: IntersectionWatcher,
}

impl RevealOnScroll {
    /// Install over all reveal targets.
    ///
    /// With motion allowed and a viewport present, targets are watched
    /// and anything already inside the initial window reveals
    /// immediately. Otherwise every target reveals eagerly and nothing
    /// is ever watched.
    pub fn install(ctx: &PageContext, viewport: Option<&Viewport>) -> Self {
        let targets = document::all_with_role(Role::Reveal);
        let mut watcher = IntersectionWatcher::new();

        let vp = match viewport {
            Some(vp) if !ctx.reduced_motion && ctx.capabilities.intersection => vp,
            _ => {
                for &target in &targets {
                    arrays::add_flag(target, StyleFlags::REVEALED);
                }
                debug!("reveal: eager, {} elements shown at install", targets.len());
                return Self { watcher };
            }
        };

        for target in targets {
            // Re-watching something already revealed would waste a slot
            if !arrays::get_flags(target).contains(StyleFlags::REVEALED) {
                watcher.observe(target);
            }
        }

        let mut controller = Self { watcher };
        controller.sweep(vp);
        controller
    }

    /// Re-evaluate after the viewport scrolled or resized.
    pub fn on_viewport_change(&mut self, viewport: &Viewport) {
        self.sweep(viewport);
    }

    /// Number of elements still waiting to reveal.
    pub fn watching(&self) -> usize {
        self.watcher.observed_count()
    }

    fn sweep(&mut self, viewport: &Viewport) {
        for index in self.watcher.take_crossed(viewport) {
            arrays::add_flag(index, StyleFlags::REVEALED);
            debug!("revealed element {index}");
        }
    }
}
