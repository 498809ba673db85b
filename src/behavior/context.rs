//! Page Context - Environment facts probed once at install
//!
//! Controllers never probe the environment themselves. The page probes
//! once, after the host has registered its elements, and passes the
//! frozen result down. That makes every controller's activation decision
//! explicit and testable: construct a context literal and install.

use crate::document;
use crate::types::Role;

use super::motion;

/// What the environment can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// A viewport element exists, so visibility of scrolled content can
    /// be watched. Without it the reveal controller falls back to
    /// showing everything eagerly.
    pub intersection: bool,
}

/// Facts the behavior controllers are installed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    /// The user prefers reduced motion.
    pub reduced_motion: bool,
    pub capabilities: Capabilities,
}

impl PageContext {
    /// Probe the environment. Call after the host has registered its
    /// elements; the intersection capability depends on a registered
    /// viewport.
    pub fn probe() -> Self {
        Self {
            reduced_motion: motion::reduced_motion(),
            capabilities: Capabilities {
                intersection: document::first_with_role(Role::Viewport).is_some(),
            },
        }
    }

    /// Context with full capabilities and no reduced-motion preference.
    pub fn full_motion() -> Self {
        Self {
            reduced_motion: false,
            capabilities: Capabilities { intersection: true },
        }
    }

    /// Context with the reduced-motion preference set.
    pub fn reduced() -> Self {
        Self {
            reduced_motion: true,
            capabilities: Capabilities { intersection: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{register_element, reset_document, ElementProps};
    use crate::types::Rect;

    #[test]
    fn test_probe_reflects_registered_viewport() {
        reset_document();
        assert!(!PageContext::probe().capabilities.intersection);

        register_element(ElementProps {
            role: Role::Viewport,
            rect: Rect::new(0, 0, 80, 24),
            ..Default::default()
        });
        assert!(PageContext::probe().capabilities.intersection);
    }

    #[test]
    fn test_preset_contexts() {
        assert!(!PageContext::full_motion().reduced_motion);
        assert!(PageContext::reduced().reduced_motion);
        assert!(PageContext::reduced().capabilities.intersection);
    }
}
