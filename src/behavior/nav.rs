//! Navigation Toggle - Collapsible nav with dismissal
//!
//! One toggle control opens and closes one navigation region. Three
//! things close an open nav: activating the toggle again, a click whose
//! target is outside both the nav and the toggle, and Escape.
//!
//! A click on the toggle is consumed by [`NavToggle::on_click`]; the
//! page coordinator must then skip [`NavToggle::on_document_click`] for
//! that click, otherwise the same press would toggle and immediately
//! close again.
//!
//! State is announced two ways on every transition: the `NAV_OPEN` flag
//! on the nav region (styling) and the toggle's expanded value
//! (assistive tech). Both always agree with [`NavToggle::is_open`].

use tracing::debug;

use crate::document::{self, arrays};
use crate::events::pointer::Click;
use crate::types::{Role, StyleFlags};

/// Open/closed state of the navigation region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Closed,
    Open,
}

/// Controller for the page's collapsible navigation.
#[derive(Debug)]
pub struct NavToggle {
    nav: usize,
    toggle: usize,
    state: NavState,
}

impl NavToggle {
    /// Install against the registered nav region and toggle control.
    /// Returns None when either is missing; the page then has no nav
    /// behavior at all.
    pub fn install() -> Option<Self> {
        let nav = document::first_with_role(Role::NavRegion)?;
        let toggle = document::first_with_role(Role::NavToggle)?;

        // Announce the initial collapsed state right away so the
        // disclosure is never ambiguous
        arrays::set_expanded(toggle, Some(false));

        Some(Self {
            nav,
            toggle,
            state: NavState::Closed,
        })
    }

    /// Current state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Whether the nav region is open.
    pub fn is_open(&self) -> bool {
        self.state == NavState::Open
    }

    /// The toggle control's element index.
    pub fn toggle_element(&self) -> usize {
        self.toggle
    }

    /// Flip the nav state, as if the toggle control were activated.
    /// Works for pointer and keyboard activation alike.
    pub fn activate_toggle(&mut self) {
        match self.state {
            NavState::Closed => self.open(),
            NavState::Open => self.close(),
        }
    }

    /// Offer a click to the toggle control. Returns true when the click
    /// landed on the toggle (or inside it) and was consumed.
    pub fn on_click(&mut self, click: &Click) -> bool {
        let Some(target) = click.target else {
            return false;
        };
        if document::is_within(target, self.toggle) {
            self.activate_toggle();
            return true;
        }
        false
    }

    /// Document-level dismissal: close an open nav when the click target
    /// sits outside both the nav region and the toggle. Clicks inside
    /// the nav (its links, for instance) leave it open.
    pub fn on_document_click(&mut self, click: &Click) {
        if self.state != NavState::Open {
            return;
        }
        let outside = match click.target {
            None => true,
            Some(target) => {
                !document::is_within(target, self.nav)
                    && !document::is_within(target, self.toggle)
            }
        };
        if outside {
            self.close();
        }
    }

    /// Escape closes an open nav and does nothing otherwise.
    pub fn on_escape(&mut self) {
        if self.state == NavState::Open {
            self.close();
        }
    }

    fn open(&mut self) {
        self.state = NavState::Open;
        arrays::add_flag(self.nav, StyleFlags::NAV_OPEN);
        arrays::set_expanded(self.toggle, Some(true));
        debug!("nav opened");
    }

    fn close(&mut self) {
        self.state = NavState::Closed;
        arrays::remove_flag(self.nav, StyleFlags::NAV_OPEN);
        arrays::set_expanded(self.toggle, Some(false));
        debug!("nav closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{register_element, reset_document, ElementProps};
    use crate::events::pointer::PointerButton;
    use crate::types::Rect;

    struct Page {
        nav: usize,
        toggle: usize,
        link: usize,
        outside: usize,
    }

    fn setup() -> (Page, NavToggle) {
        reset_document();

        let nav = register_element(ElementProps {
            role: Role::NavRegion,
            rect: Rect::new(0, 1, 80, 6),
            ..Default::default()
        });
        let link = register_element(ElementProps {
            parent: Some(nav),
            rect: Rect::new(2, 2, 10, 1),
            focusable: true,
            ..Default::default()
        });
        let toggle = register_element(ElementProps {
            role: Role::NavToggle,
            rect: Rect::new(76, 0, 4, 1),
            focusable: true,
            ..Default::default()
        });
        let outside = register_element(ElementProps {
            rect: Rect::new(0, 10, 80, 10),
            ..Default::default()
        });

        let controller = NavToggle::install().unwrap();
        (Page { nav, toggle, link, outside }, controller)
    }

    fn click_on(target: usize) -> Click {
        Click {
            target: Some(target),
            button: PointerButton::Left,
            x: 0,
            y: 0,
        }
    }

    /// Open state, nav flag, and announced expansion move together.
    fn assert_consistent(page: &Page, controller: &NavToggle) {
        let open = controller.is_open();
        assert_eq!(arrays::has_flag(page.nav, StyleFlags::NAV_OPEN), open);
        assert_eq!(arrays::get_expanded(page.toggle), Some(open));
    }

    #[test]
    fn test_install_requires_both_elements() {
        reset_document();
        assert!(NavToggle::install().is_none());

        register_element(ElementProps {
            role: Role::NavRegion,
            ..Default::default()
        });
        assert!(NavToggle::install().is_none());

        register_element(ElementProps {
            role: Role::NavToggle,
            ..Default::default()
        });
        assert!(NavToggle::install().is_some());
    }

    #[test]
    fn test_install_announces_collapsed() {
        let (page, controller) = setup();
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_toggle_click_flips_state() {
        let (page, mut controller) = setup();

        assert!(controller.on_click(&click_on(page.toggle)));
        assert!(controller.is_open());
        assert_consistent(&page, &controller);

        assert!(controller.on_click(&click_on(page.toggle)));
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_click_elsewhere_is_not_consumed() {
        let (page, mut controller) = setup();
        assert!(!controller.on_click(&click_on(page.outside)));
        assert!(!controller.on_click(&Click {
            target: None,
            button: PointerButton::Left,
            x: 0,
            y: 0,
        }));
    }

    #[test]
    fn test_outside_click_closes_open_nav() {
        let (page, mut controller) = setup();

        controller.activate_toggle();
        assert!(controller.is_open());

        controller.on_document_click(&click_on(page.outside));
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_click_on_empty_area_closes() {
        let (page, mut controller) = setup();

        controller.activate_toggle();
        controller.on_document_click(&Click {
            target: None,
            button: PointerButton::Left,
            x: 40,
            y: 22,
        });
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_click_inside_nav_keeps_it_open() {
        let (page, mut controller) = setup();

        controller.activate_toggle();
        controller.on_document_click(&click_on(page.nav));
        assert!(controller.is_open());

        // A link nested in the nav counts as inside too
        controller.on_document_click(&click_on(page.link));
        assert!(controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let (page, mut controller) = setup();

        controller.on_document_click(&click_on(page.outside));
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let (page, mut controller) = setup();

        controller.on_escape();
        assert!(!controller.is_open());

        controller.activate_toggle();
        controller.on_escape();
        assert!(!controller.is_open());
        assert_consistent(&page, &controller);
    }
}
