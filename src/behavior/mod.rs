//! Behavior Module - Page behavior controllers and their coordinator
//!
//! Seven independent controllers, one shared event stream:
//!
//! - **Motion** - Reduced-motion preference probe
//! - **Context** - Environment facts frozen at install
//! - **Nav** - Collapsible navigation with dismissal
//! - **Reveal** - One-shot visibility styling on scroll
//! - **Marquee** - Pause scrolling strips under attention
//! - **Parallax** - Pointer-tracking hero layers
//! - **Tilt** - Cards leaning toward the pointer
//! - **Modality** - Keyboard vs pointer styling flag
//!
//! [`PageBehaviors`] owns all of them plus the viewport and fans each
//! input event out in a fixed order. Controllers never talk to each
//! other; anything shared (focus, click synthesis, scroll position)
//! lives here and is handed down as plain values.

use tracing::debug;

use crate::document::{self, arrays};
use crate::events::focus::{self, FocusChange};
use crate::events::input::InputEvent;
use crate::events::keys::{KeyEvent, KeyState};
use crate::events::pointer::{Click, ClickTracker, PointerEvent, PointerKind};
use crate::viewport::{Viewport, LINE_SCROLL, WHEEL_SCROLL};

mod context;
mod marquee;
mod modality;
pub mod motion;
mod nav;
mod parallax;
mod reveal;
mod tilt;

pub use context::{Capabilities, PageContext};
pub use marquee::MarqueePause;
pub use modality::ModalityTracker;
pub use nav::{NavState, NavToggle};
pub use parallax::{Parallax, LAYER_DEPTH_STEP, LAYER_ROTATION_EVEN, LAYER_ROTATION_ODD};
pub use reveal::RevealOnScroll;
pub use tilt::{Tilt, TILT_RANGE_DEG};

// =============================================================================
// PAGE BEHAVIORS
// =============================================================================

/// All behavior controllers for one page, wired to one event stream.
pub struct PageBehaviors {
    ctx: PageContext,
    viewport: Option<Viewport>,
    nav: Option<NavToggle>,
    reveal: RevealOnScroll,
    marquees: Vec<MarqueePause>,
    parallax: Option<Parallax>,
    tilts: Vec<Tilt>,
    modality: ModalityTracker,
    clicks: ClickTracker,
}

impl PageBehaviors {
    /// Install every controller against the registered document.
    ///
    /// Call after the host has registered its elements; controllers
    /// whose elements are missing simply stay absent.
    pub fn install(ctx: PageContext) -> Self {
        let viewport = Viewport::find();
        let nav = NavToggle::install();
        let reveal = RevealOnScroll::install(&ctx, viewport.as_ref());
        let marquees = MarqueePause::install_all(&ctx);
        let parallax = Parallax::install(&ctx);
        let tilts = Tilt::install_all(&ctx);

        debug!(
            nav = nav.is_some(),
            watching = reveal.watching(),
            marquees = marquees.len(),
            parallax = parallax.is_some(),
            tilts = tilts.len(),
            reduced_motion = ctx.reduced_motion,
            "page behaviors installed"
        );

        Self {
            ctx,
            viewport,
            nav,
            reveal,
            marquees,
            parallax,
            tilts,
            modality: ModalityTracker::new(),
            clicks: ClickTracker::new(),
        }
    }

    /// Probe the environment and install.
    pub fn install_probed() -> Self {
        Self::install(PageContext::probe())
    }

    // =========================================================================
    // Event dispatch
    // =========================================================================

    /// Feed one input event through every interested controller.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Pointer(pointer) => self.handle_pointer(pointer),
            InputEvent::Key(key) if key.state != KeyState::Release => self.handle_key(key),
            InputEvent::Key(_) => {}
            InputEvent::Scroll(notches) => {
                self.scroll_lines(notches * WHEEL_SCROLL as i32);
            }
            // The host relayouts on resize and rects are read live, so
            // only the reveal sweep needs a nudge
            InputEvent::Resize(_, _) => self.sweep_reveals(),
            InputEvent::None => {}
        }
    }

    fn handle_pointer(&mut self, event: &PointerEvent) {
        let (x, y) = self.to_page(event.x, event.y);
        match event.kind {
            PointerKind::Move => {
                if let Some(parallax) = &mut self.parallax {
                    parallax.on_pointer_move(x, y);
                }
                for tilt in &mut self.tilts {
                    tilt.on_pointer_move(x, y);
                }
                for marquee in &mut self.marquees {
                    marquee.on_pointer_move(x, y);
                }
            }
            PointerKind::Down => {
                self.modality.on_pointer_down();
                let target = document::hit_test(x, y);
                // Focus follows the press: a focusable target takes
                // focus, anything else blurs
                let change = match target {
                    Some(t) if arrays::get_focusable(t) => focus::focus(t),
                    _ => focus::blur(),
                };
                if let Some(change) = change {
                    self.notify_focus_change(&change);
                }
                self.clicks.press(target, event.button);
            }
            PointerKind::Up => {
                let target = document::hit_test(x, y);
                if let Some(click) = self.clicks.release(target, event.button, x, y) {
                    self.handle_click(&click);
                }
            }
        }
    }

    /// One click, one dispatch: the toggle sees it first and consuming
    /// it keeps the outside-dismissal from seeing the same click.
    fn handle_click(&mut self, click: &Click) {
        let consumed = self
            .nav
            .as_mut()
            .is_some_and(|nav| nav.on_click(click));
        if consumed {
            return;
        }
        if let Some(nav) = &mut self.nav {
            nav.on_document_click(click);
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) {
        self.modality.on_key_press(event);

        match event.key.as_str() {
            "Tab" => {
                let change = if event.modifiers.shift {
                    focus::focus_previous()
                } else {
                    focus::focus_next()
                };
                if let Some(change) = change {
                    self.notify_focus_change(&change);
                }
            }
            "Escape" => {
                if let Some(nav) = &mut self.nav {
                    nav.on_escape();
                }
            }
            // Keyboard activation of the focused toggle control
            "Enter" | " " => {
                if let Some(nav) = &mut self.nav {
                    if focus::focused() == Some(nav.toggle_element()) {
                        nav.activate_toggle();
                    }
                }
            }
            "ArrowDown" => self.scroll_lines(LINE_SCROLL as i32),
            "ArrowUp" => self.scroll_lines(-(LINE_SCROLL as i32)),
            "PageDown" => self.scroll_pages(1),
            "PageUp" => self.scroll_pages(-1),
            _ => {}
        }
    }

    fn notify_focus_change(&mut self, change: &FocusChange) {
        for marquee in &mut self.marquees {
            marquee.on_focus_change(change);
        }
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    fn scroll_lines(&mut self, lines: i32) {
        if let Some(viewport) = &mut self.viewport {
            if viewport.scroll_by(lines) {
                self.reveal.on_viewport_change(viewport);
            }
        }
    }

    fn scroll_pages(&mut self, direction: i32) {
        if let Some(viewport) = &mut self.viewport {
            if viewport.scroll_page(direction) {
                self.reveal.on_viewport_change(viewport);
            }
        }
    }

    fn sweep_reveals(&mut self) {
        if let Some(viewport) = &self.viewport {
            self.reveal.on_viewport_change(viewport);
        }
    }

    fn to_page(&self, x: u16, y: u16) -> (u16, u16) {
        match &self.viewport {
            Some(viewport) => viewport.to_page(x, y),
            None => (x, y),
        }
    }

    // =========================================================================
    // State queries
    // =========================================================================

    /// The context this page was installed against.
    pub fn context(&self) -> &PageContext {
        &self.ctx
    }

    /// Whether the navigation region is open. False when there is none.
    pub fn nav_open(&self) -> bool {
        self.nav.as_ref().is_some_and(|nav| nav.is_open())
    }

    /// Whether the last navigation input was the keyboard.
    pub fn using_keyboard(&self) -> bool {
        self.modality.using_keyboard()
    }

    /// Number of reveal targets still waiting to reveal.
    pub fn watching_reveals(&self) -> usize {
        self.reveal.watching()
    }

    /// Number of marquee pause controllers installed.
    pub fn marquee_count(&self) -> usize {
        self.marquees.len()
    }

    /// Current scroll offset, 0 without a viewport.
    pub fn scroll_y(&self) -> u16 {
        self.viewport.as_ref().map_or(0, |vp| vp.scroll_y())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{register_element, reset_document, ElementProps};
    use crate::events::pointer::PointerButton;
    use crate::types::{Animation, Rect, Role, StyleFlags};

    /// A small page: viewport, nav with toggle, marquee, reveal below
    /// the fold, and a free-standing focusable link.
    struct Page {
        nav: usize,
        toggle: usize,
        marquee_content: usize,
        reveal: usize,
        link: usize,
    }

    fn setup_page() -> Page {
        reset_document();
        focus::reset_focus_state();

        let _viewport = register_element(ElementProps {
            role: Role::Viewport,
            rect: Rect::new(0, 0, 80, 10),
            ..Default::default()
        });
        let nav = register_element(ElementProps {
            role: Role::NavRegion,
            rect: Rect::new(0, 1, 60, 5),
            ..Default::default()
        });
        let toggle = register_element(ElementProps {
            role: Role::NavToggle,
            rect: Rect::new(76, 0, 4, 1),
            focusable: true,
            ..Default::default()
        });
        let marquee = register_element(ElementProps {
            role: Role::Marquee,
            rect: Rect::new(0, 7, 80, 2),
            ..Default::default()
        });
        let marquee_content = register_element(ElementProps {
            role: Role::MarqueeContent,
            parent: Some(marquee),
            rect: Rect::new(0, 7, 80, 1),
            ..Default::default()
        });
        let reveal = register_element(ElementProps {
            role: Role::Reveal,
            rect: Rect::new(0, 14, 80, 8),
            ..Default::default()
        });
        let link = register_element(ElementProps {
            rect: Rect::new(0, 24, 10, 1),
            focusable: true,
            ..Default::default()
        });
        let _footer = register_element(ElementProps {
            rect: Rect::new(0, 30, 80, 10),
            ..Default::default()
        });

        Page { nav, toggle, marquee_content, reveal, link }
    }

    fn install() -> (Page, PageBehaviors) {
        let page = setup_page();
        let behaviors = PageBehaviors::install(PageContext::full_motion());
        (page, behaviors)
    }

    fn click_at(behaviors: &mut PageBehaviors, x: u16, y: u16) {
        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::down(
            PointerButton::Left,
            x,
            y,
        )));
        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::up(
            PointerButton::Left,
            x,
            y,
        )));
    }

    #[test]
    fn test_install_on_empty_document() {
        reset_document();
        focus::reset_focus_state();

        let mut behaviors = PageBehaviors::install(PageContext::probe());
        assert!(!behaviors.nav_open());
        assert_eq!(behaviors.marquee_count(), 0);

        // Events on an empty page are harmless
        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::move_to(5, 5)));
        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Escape")));
        behaviors.handle_event(&InputEvent::Scroll(1));
    }

    #[test]
    fn test_toggle_click_opens_without_instant_dismiss() {
        let (page, mut behaviors) = install();

        // The toggle click is consumed, so the outside-dismissal never
        // sees it and the nav stays open
        click_at(&mut behaviors, 77, 0);
        assert!(behaviors.nav_open());
        assert!(arrays::has_flag(page.nav, StyleFlags::NAV_OPEN));

        click_at(&mut behaviors, 77, 0);
        assert!(!behaviors.nav_open());
    }

    #[test]
    fn test_outside_click_closes_nav() {
        let (_page, mut behaviors) = install();

        click_at(&mut behaviors, 77, 0);
        assert!(behaviors.nav_open());

        // Empty page area far from nav and toggle
        click_at(&mut behaviors, 70, 9);
        assert!(!behaviors.nav_open());
    }

    #[test]
    fn test_click_inside_nav_keeps_it_open() {
        let (_page, mut behaviors) = install();

        click_at(&mut behaviors, 77, 0);
        click_at(&mut behaviors, 5, 3);
        assert!(behaviors.nav_open());
    }

    #[test]
    fn test_escape_closes_nav() {
        let (_page, mut behaviors) = install();

        click_at(&mut behaviors, 77, 0);
        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Escape")));
        assert!(!behaviors.nav_open());
    }

    #[test]
    fn test_keyboard_activation_of_focused_toggle() {
        let (page, mut behaviors) = install();

        // Tab until the toggle has focus (it is the first focusable)
        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Tab")));
        assert!(focus::is_focused(page.toggle));

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Enter")));
        assert!(behaviors.nav_open());

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new(" ")));
        assert!(!behaviors.nav_open());
    }

    #[test]
    fn test_enter_without_toggle_focus_does_nothing() {
        let (_page, mut behaviors) = install();
        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Enter")));
        assert!(!behaviors.nav_open());
    }

    #[test]
    fn test_tab_drives_modality_and_marquee() {
        let (page, mut behaviors) = install();
        assert!(!behaviors.using_keyboard());

        // First Tab focuses the toggle: keyboard modality, marquee
        // unaffected
        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("Tab")));
        assert!(behaviors.using_keyboard());
        assert!(arrays::document_flags().contains(StyleFlags::USING_KEYBOARD));
        assert_eq!(arrays::get_animation(page.marquee_content), Animation::Running);

        // Pointer press clears the modality again
        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::down(
            PointerButton::Left,
            70,
            9,
        )));
        assert!(!behaviors.using_keyboard());
        assert!(!arrays::document_flags().contains(StyleFlags::USING_KEYBOARD));
    }

    #[test]
    fn test_hovering_marquee_pauses_it() {
        let (page, mut behaviors) = install();

        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::move_to(10, 7)));
        assert_eq!(arrays::get_animation(page.marquee_content), Animation::Paused);

        behaviors.handle_event(&InputEvent::Pointer(PointerEvent::move_to(10, 0)));
        assert_eq!(arrays::get_animation(page.marquee_content), Animation::Running);
    }

    #[test]
    fn test_wheel_scroll_reveals_below_fold() {
        let (page, mut behaviors) = install();
        assert!(!arrays::has_flag(page.reveal, StyleFlags::REVEALED));
        assert_eq!(behaviors.watching_reveals(), 1);

        // Three notches at three lines each scrolls to line 9; the
        // window is then 9..19 and five of the reveal's eight rows are
        // visible, well past the threshold
        behaviors.handle_event(&InputEvent::Scroll(3));
        assert_eq!(behaviors.scroll_y(), 9);
        assert!(arrays::has_flag(page.reveal, StyleFlags::REVEALED));
        assert_eq!(behaviors.watching_reveals(), 0);
    }

    #[test]
    fn test_arrow_and_page_keys_scroll() {
        let (_page, mut behaviors) = install();

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("ArrowDown")));
        assert_eq!(behaviors.scroll_y(), 1);

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("ArrowUp")));
        assert_eq!(behaviors.scroll_y(), 0);

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("PageDown")));
        assert_eq!(behaviors.scroll_y(), 9);

        behaviors.handle_event(&InputEvent::Key(KeyEvent::new("PageUp")));
        assert_eq!(behaviors.scroll_y(), 0);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (_page, mut behaviors) = install();

        let mut release = KeyEvent::new("Tab");
        release.state = KeyState::Release;
        behaviors.handle_event(&InputEvent::Key(release));
        assert!(!behaviors.using_keyboard());
    }

    #[test]
    fn test_click_focus_follows_press() {
        let (page, mut behaviors) = install();

        click_at(&mut behaviors, 5, 24);
        assert!(focus::is_focused(page.link));

        // Clicking empty area blurs
        click_at(&mut behaviors, 70, 9);
        assert!(!focus::has_focus());
    }

    #[test]
    fn test_reduced_motion_page() {
        let page = setup_page();
        let behaviors = PageBehaviors::install(PageContext::reduced());

        // Marquee off, reveals shown, nothing watched or tracked
        assert_eq!(arrays::get_animation(page.marquee_content), Animation::Off);
        assert!(arrays::has_flag(page.reveal, StyleFlags::REVEALED));
        assert_eq!(behaviors.watching_reveals(), 0);
        assert_eq!(behaviors.marquee_count(), 0);
    }
}
