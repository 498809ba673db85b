//! Marquee Pause - Freeze scrolling strips under attention
//!
//! A marquee's content track animates until someone is looking at it
//! closely: pointer hovering over the region, or focus resting anywhere
//! inside it. The track is paused exactly while either condition holds,
//! so hover-in followed by focus-in followed by hover-out stays paused.
//!
//! Under reduced motion the track never animates at all. No controller
//! is installed for it, its play state is `Off`, and any transform left
//! on it is cleared, so the strip just sits at its resting position.

use tracing::debug;

use crate::document::{self, arrays};
use crate::events::focus::FocusChange;
use crate::events::pointer::Containment;
use crate::types::{Animation, Role};

use super::context::PageContext;

/// Pause controller for one marquee region and its content track.
#[derive(Debug)]
pub struct MarqueePause {
    region: usize,
    content: usize,
    hovered: Containment,
    focus_within: bool,
    paused: bool,
}

impl MarqueePause {
    /// Install one controller per marquee region with a content track.
    ///
    /// Regions with no track are skipped entirely. Under reduced motion
    /// the tracks are switched off instead and the returned list is
    /// empty.
    pub fn install_all(ctx: &PageContext) -> Vec<Self> {
        let mut controllers = Vec::new();

        for region in document::all_with_role(Role::Marquee) {
            let Some(content) = document::descendants_with_role(region, Role::MarqueeContent)
                .into_iter()
                .next()
            else {
                debug!("marquee {region}: no content track, skipping");
                continue;
            };

            if ctx.reduced_motion {
                arrays::set_animation(content, Animation::Off);
                arrays::set_transform(content, None);
                continue;
            }

            controllers.push(Self {
                region,
                content,
                hovered: Containment::new(),
                focus_within: false,
                paused: false,
            });
        }

        controllers
    }

    /// The marquee region this controller watches.
    pub fn region(&self) -> usize {
        self.region
    }

    /// Whether the track is currently paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pointer moved to a page coordinate.
    pub fn on_pointer_move(&mut self, x: u16, y: u16) {
        let inside = arrays::get_rect(self.region).contains(x, y);
        if self.hovered.update(inside).is_some() {
            self.sync();
        }
    }

    /// Focus moved somewhere in the document.
    pub fn on_focus_change(&mut self, change: &FocusChange) {
        let focus_within = change
            .to
            .is_some_and(|target| document::is_within(target, self.region));
        if focus_within != self.focus_within {
            self.focus_within = focus_within;
            self.sync();
        }
    }

    fn sync(&mut self) {
        let paused = self.hovered.is_inside() || self.focus_within;
        if paused == self.paused {
            return;
        }
        self.paused = paused;
        arrays::set_animation(
            self.content,
            if paused { Animation::Paused } else { Animation::Running },
        );
        debug!("marquee {}: {}", self.region, if paused { "paused" } else { "running" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{register_element, reset_document, ElementProps};
    use crate::types::Rect;

    struct Strip {
        region: usize,
        content: usize,
        inner_link: usize,
        outside_link: usize,
    }

    fn setup_page() -> Strip {
        reset_document();

        let region = register_element(ElementProps {
            role: Role::Marquee,
            rect: Rect::new(0, 10, 80, 3),
            ..Default::default()
        });
        let content = register_element(ElementProps {
            role: Role::MarqueeContent,
            parent: Some(region),
            rect: Rect::new(0, 11, 80, 1),
            ..Default::default()
        });
        let inner_link = register_element(ElementProps {
            parent: Some(content),
            rect: Rect::new(4, 11, 10, 1),
            focusable: true,
            ..Default::default()
        });
        let outside_link = register_element(ElementProps {
            rect: Rect::new(0, 20, 10, 1),
            focusable: true,
            ..Default::default()
        });

        Strip { region, content, inner_link, outside_link }
    }

    fn install_one() -> (Strip, MarqueePause) {
        let strip = setup_page();
        let mut controllers = MarqueePause::install_all(&PageContext::full_motion());
        assert_eq!(controllers.len(), 1);
        (strip, controllers.pop().unwrap())
    }

    fn focus_moved(to: Option<usize>) -> FocusChange {
        FocusChange { from: None, to }
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let (strip, mut marquee) = install_one();
        assert_eq!(arrays::get_animation(strip.content), Animation::Running);

        marquee.on_pointer_move(10, 11);
        assert!(marquee.is_paused());
        assert_eq!(arrays::get_animation(strip.content), Animation::Paused);

        // Moving inside keeps it paused
        marquee.on_pointer_move(30, 12);
        assert!(marquee.is_paused());

        marquee.on_pointer_move(10, 20);
        assert!(!marquee.is_paused());
        assert_eq!(arrays::get_animation(strip.content), Animation::Running);
    }

    #[test]
    fn test_focus_within_pauses() {
        let (strip, mut marquee) = install_one();

        marquee.on_focus_change(&focus_moved(Some(strip.inner_link)));
        assert!(marquee.is_paused());

        marquee.on_focus_change(&focus_moved(Some(strip.outside_link)));
        assert!(!marquee.is_paused());
    }

    #[test]
    fn test_blur_releases_focus_pause() {
        let (strip, mut marquee) = install_one();

        marquee.on_focus_change(&focus_moved(Some(strip.inner_link)));
        marquee.on_focus_change(&FocusChange { from: Some(strip.inner_link), to: None });
        assert!(!marquee.is_paused());
    }

    #[test]
    fn test_either_condition_keeps_it_paused() {
        let (strip, mut marquee) = install_one();

        // Hover in, focus in, hover out: still paused on focus alone
        marquee.on_pointer_move(10, 11);
        marquee.on_focus_change(&focus_moved(Some(strip.inner_link)));
        marquee.on_pointer_move(0, 0);
        assert!(marquee.is_paused());
        assert_eq!(arrays::get_animation(strip.content), Animation::Paused);

        // Focus leaves too: now it runs again
        marquee.on_focus_change(&focus_moved(Some(strip.outside_link)));
        assert!(!marquee.is_paused());
    }

    #[test]
    fn test_region_without_track_is_skipped() {
        reset_document();
        register_element(ElementProps {
            role: Role::Marquee,
            rect: Rect::new(0, 0, 80, 3),
            ..Default::default()
        });

        let controllers = MarqueePause::install_all(&PageContext::full_motion());
        assert!(controllers.is_empty());
    }

    #[test]
    fn test_reduced_motion_switches_track_off() {
        let strip = setup_page();

        let controllers = MarqueePause::install_all(&PageContext::reduced());

        assert!(controllers.is_empty());
        assert_eq!(arrays::get_animation(strip.content), Animation::Off);
        assert_eq!(arrays::get_transform(strip.content), None);
    }

    #[test]
    fn test_two_marquees_pause_independently() {
        let first = setup_page();
        let second_region = register_element(ElementProps {
            role: Role::Marquee,
            rect: Rect::new(0, 30, 80, 3),
            ..Default::default()
        });
        let second_content = register_element(ElementProps {
            role: Role::MarqueeContent,
            parent: Some(second_region),
            rect: Rect::new(0, 31, 80, 1),
            ..Default::default()
        });

        let mut controllers = MarqueePause::install_all(&PageContext::full_motion());
        assert_eq!(controllers.len(), 2);

        for marquee in &mut controllers {
            marquee.on_pointer_move(5, 31);
        }

        assert_eq!(arrays::get_animation(first.content), Animation::Running);
        assert_eq!(arrays::get_animation(second_content), Animation::Paused);
    }
}
