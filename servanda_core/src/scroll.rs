//! Section tracking for the long-scrolling page.
//!
//! The browser runtime measures the page on every (coalesced) scroll tick
//! and on intersection notifications for the navigation bars, and feeds
//! the numbers through [`ScrollTracker::reduce`]. The tracker never reads
//! the DOM itself, so tests drive it with made-up geometry.

use crate::sections::SectionId;

/// Remaining scroll distance below which the scroll-to-top button shows.
pub const SCROLL_TO_TOP_THRESHOLD_PX: f64 = 100.0;

/// Intersection ratio at which a navigation bar counts as on screen.
pub const NAV_VISIBILITY_RATIO: f64 = 0.01;

/// Vertical extent of a section, relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    /// Top edge (`getBoundingClientRect().top`)
    pub top: f64,
    /// Bottom edge (`getBoundingClientRect().bottom`)
    pub bottom: f64,
}

impl SectionBounds {
    /// Whether the horizontal line at `y` crosses the section (edges included).
    pub fn straddles(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// One measurement of the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewportGeometry {
    /// `window.scrollY`
    pub scroll_y: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
    /// `document.documentElement.scrollHeight`
    pub document_height: f64,
    /// Bounds of every section present in the document, any order
    pub sections: Vec<(SectionId, SectionBounds)>,
}

impl ViewportGeometry {
    /// Vertical middle of the viewport.
    pub fn midline(&self) -> f64 {
        self.viewport_height / 2.0
    }

    /// Distance left to scroll before the bottom of the document.
    pub fn remaining_scroll(&self) -> f64 {
        self.document_height - (self.scroll_y + self.viewport_height)
    }

    /// Bounds of `section`, if it is in the document.
    pub fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.sections
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, bounds)| *bounds)
    }

    /// First section in page order that straddles the midline.
    pub fn section_at_midline(&self) -> Option<SectionId> {
        let mid = self.midline();
        SectionId::ORDER
            .into_iter()
            .find(|&section| self.bounds(section).is_some_and(|b| b.straddles(mid)))
    }

    /// Document offset to scroll to for bringing `section` to the top.
    ///
    /// `None` when the section is not in the document; callers skip the scroll.
    pub fn scroll_offset_of(&self, section: SectionId) -> Option<f64> {
        self.bounds(section).map(|b| b.top + self.scroll_y)
    }
}

/// Which navigation bar an intersection notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    /// Wide-screen bar
    Desktop,
    /// Narrow-screen bar with the drawer toggle
    Mobile,
}

impl NavTarget {
    /// Both bars.
    pub const ALL: [NavTarget; 2] = [NavTarget::Desktop, NavTarget::Mobile];

    /// Element id of the bar.
    pub fn element_id(&self) -> &'static str {
        match self {
            NavTarget::Desktop => "main-nav",
            NavTarget::Mobile => "main-nav-mobile",
        }
    }
}

/// Inputs to the tracker.
#[derive(Debug, Clone, PartialEq)]
pub enum ScrollEvent {
    /// Page mounted (after the scroll position was reset to the top).
    Mounted(ViewportGeometry),
    /// Scroll tick.
    Scrolled(ViewportGeometry),
    /// A navigation bar entered or left the viewport.
    NavIntersection {
        /// Which bar
        target: NavTarget,
        /// Visible ratio reached [`NAV_VISIBILITY_RATIO`]
        is_intersecting: bool,
    },
}

/// UI state derived from scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTracker {
    current_section: SectionId,
    show_scroll_to_top: bool,
    desktop_nav_visible: bool,
    mobile_nav_visible: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self {
            current_section: SectionId::first(),
            show_scroll_to_top: false,
            desktop_nav_visible: true,
            mobile_nav_visible: true,
        }
    }
}

impl ScrollTracker {
    /// Apply one event.
    pub fn reduce(self, event: ScrollEvent) -> Self {
        match event {
            ScrollEvent::Mounted(geometry) => Self {
                desktop_nav_visible: self.desktop_nav_visible,
                mobile_nav_visible: self.mobile_nav_visible,
                ..Self::default()
            }
            .measure(&geometry),
            ScrollEvent::Scrolled(geometry) => self.measure(&geometry),
            ScrollEvent::NavIntersection {
                target,
                is_intersecting,
            } => match target {
                NavTarget::Desktop => Self {
                    desktop_nav_visible: is_intersecting,
                    ..self
                },
                NavTarget::Mobile => Self {
                    mobile_nav_visible: is_intersecting,
                    ..self
                },
            },
        }
    }

    fn measure(self, geometry: &ViewportGeometry) -> Self {
        let current_section = match geometry.section_at_midline() {
            Some(section) => section,
            None if geometry.scroll_y <= 0.0 => SectionId::first(),
            None => self.current_section,
        };

        Self {
            current_section,
            show_scroll_to_top: geometry.remaining_scroll() < SCROLL_TO_TOP_THRESHOLD_PX,
            ..self
        }
    }

    /// Section currently under the viewport midline.
    pub fn current_section(&self) -> SectionId {
        self.current_section
    }

    /// Whether the floating scroll-to-top button shows.
    pub fn show_scroll_to_top(&self) -> bool {
        self.show_scroll_to_top
    }

    /// Whether any navigation bar is on screen.
    pub fn nav_visible(&self) -> bool {
        self.desktop_nav_visible || self.mobile_nav_visible
    }

    /// Whether the "jump to next section" arrow of `section` shows.
    ///
    /// Arrows stand in for the navigation links while the bar is scrolled
    /// away. The arrow into the contact section only shows while the news
    /// section is the current one.
    pub fn jump_arrow_visible(&self, section: SectionId) -> bool {
        match section.jump_target() {
            None => false,
            Some(_) if self.nav_visible() => false,
            Some(SectionId::Contact) => self.current_section == SectionId::News,
            Some(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: f64 = 800.0;
    const SECTION_HEIGHT: f64 = 1000.0;

    /// Six stacked sections of equal height, scrolled to `scroll_y`.
    fn page(scroll_y: f64) -> ViewportGeometry {
        let sections = SectionId::ORDER
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let top = i as f64 * SECTION_HEIGHT - scroll_y;
                (id, SectionBounds { top, bottom: top + SECTION_HEIGHT })
            })
            .collect();
        ViewportGeometry {
            scroll_y,
            viewport_height: VIEWPORT,
            document_height: SECTION_HEIGHT * 6.0,
            sections,
        }
    }

    fn scrolled(tracker: ScrollTracker, scroll_y: f64) -> ScrollTracker {
        tracker.reduce(ScrollEvent::Scrolled(page(scroll_y)))
    }

    #[test]
    fn starts_at_hero_with_nav_visible() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.current_section(), SectionId::Hero);
        assert!(!tracker.show_scroll_to_top());
        assert!(tracker.nav_visible());
    }

    #[test]
    fn current_section_follows_the_midline() {
        let mut tracker = ScrollTracker::default();
        for (scroll_y, expected) in [
            (0.0, SectionId::Hero),
            (700.0, SectionId::Product),
            (2100.0, SectionId::Security),
            (3000.0, SectionId::Team),
            (4000.0, SectionId::News),
            (5200.0, SectionId::Contact),
        ] {
            tracker = scrolled(tracker, scroll_y);
            assert_eq!(tracker.current_section(), expected, "scroll_y={scroll_y}");
        }
    }

    #[test]
    fn first_match_in_page_order_wins() {
        // Midline sits exactly on the product/security boundary (both edges inclusive).
        let tracker = scrolled(ScrollTracker::default(), 1600.0);
        assert_eq!(tracker.current_section(), SectionId::Product);
    }

    #[test]
    fn order_of_measured_sections_does_not_matter() {
        let mut geometry = page(1600.0);
        geometry.sections.reverse();
        let tracker = ScrollTracker::default().reduce(ScrollEvent::Scrolled(geometry));
        assert_eq!(tracker.current_section(), SectionId::Product);
    }

    #[test]
    fn no_match_keeps_last_section() {
        let tracker = scrolled(ScrollTracker::default(), 3000.0);
        let gap = ViewportGeometry {
            scroll_y: 2500.0,
            viewport_height: VIEWPORT,
            document_height: 6000.0,
            sections: vec![],
        };
        let tracker = tracker.reduce(ScrollEvent::Scrolled(gap));
        assert_eq!(tracker.current_section(), SectionId::Team);
    }

    #[test]
    fn no_match_at_top_is_hero() {
        let tracker = scrolled(ScrollTracker::default(), 2100.0);
        let top = ViewportGeometry {
            scroll_y: 0.0,
            viewport_height: VIEWPORT,
            document_height: 6000.0,
            sections: vec![(
                SectionId::Hero,
                SectionBounds { top: 500.0, bottom: 1500.0 },
            )],
        };
        let tracker = tracker.reduce(ScrollEvent::Scrolled(top));
        assert_eq!(tracker.current_section(), SectionId::Hero);
    }

    #[test]
    fn scroll_to_top_only_near_the_bottom() {
        // Document 6000, viewport 800: bottom reached at 5200.
        for (scroll_y, expected) in [
            (0.0, false),
            (3000.0, false),
            (5100.0, false),
            (5100.5, true),
            (5150.0, true),
            (5200.0, true),
        ] {
            let tracker = scrolled(ScrollTracker::default(), scroll_y);
            assert_eq!(tracker.show_scroll_to_top(), expected, "scroll_y={scroll_y}");
        }
    }

    #[test]
    fn scroll_to_top_hides_again_when_scrolling_up() {
        let tracker = scrolled(ScrollTracker::default(), 5200.0);
        assert!(tracker.show_scroll_to_top());
        let tracker = scrolled(tracker, 4000.0);
        assert!(!tracker.show_scroll_to_top());
    }

    #[test]
    fn nav_visible_if_either_bar_is() {
        let tracker = ScrollTracker::default().reduce(ScrollEvent::NavIntersection {
            target: NavTarget::Mobile,
            is_intersecting: false,
        });
        assert!(tracker.nav_visible());

        let tracker = tracker.reduce(ScrollEvent::NavIntersection {
            target: NavTarget::Desktop,
            is_intersecting: false,
        });
        assert!(!tracker.nav_visible());

        let tracker = tracker.reduce(ScrollEvent::NavIntersection {
            target: NavTarget::Desktop,
            is_intersecting: true,
        });
        assert!(tracker.nav_visible());
    }

    #[test]
    fn mount_resets_section_but_keeps_nav_state() {
        let hidden = ScrollTracker::default()
            .reduce(ScrollEvent::NavIntersection {
                target: NavTarget::Desktop,
                is_intersecting: false,
            })
            .reduce(ScrollEvent::NavIntersection {
                target: NavTarget::Mobile,
                is_intersecting: false,
            });
        let tracker = scrolled(hidden, 4000.0).reduce(ScrollEvent::Mounted(page(0.0)));
        assert_eq!(tracker.current_section(), SectionId::Hero);
        assert!(!tracker.nav_visible());
    }

    #[test]
    fn jump_arrows_hide_while_nav_is_on_screen() {
        let tracker = scrolled(ScrollTracker::default(), 700.0);
        assert!(!tracker.jump_arrow_visible(SectionId::Product));
    }

    #[test]
    fn jump_arrows_once_nav_scrolled_away() {
        let away = ScrollTracker::default()
            .reduce(ScrollEvent::NavIntersection {
                target: NavTarget::Desktop,
                is_intersecting: false,
            })
            .reduce(ScrollEvent::NavIntersection {
                target: NavTarget::Mobile,
                is_intersecting: false,
            });

        let on_team = scrolled(away, 3000.0);
        assert!(on_team.jump_arrow_visible(SectionId::Product));
        assert!(on_team.jump_arrow_visible(SectionId::Team));
        assert!(!on_team.jump_arrow_visible(SectionId::News));
        assert!(!on_team.jump_arrow_visible(SectionId::Hero));
        assert!(!on_team.jump_arrow_visible(SectionId::Contact));

        let on_news = scrolled(away, 4000.0);
        assert!(on_news.jump_arrow_visible(SectionId::News));
    }

    #[test]
    fn scroll_offset_of_section() {
        let geometry = page(700.0);
        assert_eq!(geometry.scroll_offset_of(SectionId::Team), Some(3000.0));

        let empty = ViewportGeometry::default();
        assert_eq!(empty.scroll_offset_of(SectionId::Team), None);
    }
}
