//! Section tracking.
//!
//! Scroll events only schedule work; the tracker is recomputed at most once
//! per animation frame. Intersection callbacks for the two navigation bars
//! feed the same reducer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use servanda_core::scroll::NAV_VISIBILITY_RATIO;
use servanda_core::{NavTarget, ScrollEvent, ScrollTracker, SectionId};
use web_sys::Element;

use crate::dom;
use crate::listeners::{EventListenerGuard, FrameGuard, ObserverGuard};

/// Elements whose state follows the tracker.
struct Controls {
    scroll_top: Option<Element>,
    jump_arrows: Vec<(SectionId, Element)>,
    nav_links: Vec<(SectionId, Element)>,
}

impl Controls {
    fn find() -> Self {
        let tagged = |selector: &str, attribute: &str| {
            dom::query_document(selector)
                .into_iter()
                .filter_map(|element| {
                    let section = element.get_attribute(attribute)?.parse::<SectionId>().ok()?;
                    Some((section, element))
                })
                .collect::<Vec<_>>()
        };

        Self {
            scroll_top: dom::by_id(servanda_render::components::SCROLL_TOP_ID),
            jump_arrows: tagged("[data-jump-from]", "data-jump-from"),
            nav_links: tagged(".nav-link[data-scroll-target]", "data-scroll-target"),
        }
    }

    fn render(&self, tracker: &ScrollTracker) {
        if let Some(button) = &self.scroll_top {
            dom::set_hidden(button, !tracker.show_scroll_to_top());
        }
        for (section, arrow) in &self.jump_arrows {
            dom::set_hidden(arrow, !tracker.jump_arrow_visible(*section));
        }
        for (section, link) in &self.nav_links {
            dom::toggle_class(link, "is-current", *section == tracker.current_section());
        }
    }
}

struct Inner {
    tracker: Cell<ScrollTracker>,
    controls: Controls,
    frame_pending: Cell<bool>,
    frame: RefCell<Option<FrameGuard>>,
}

impl Inner {
    fn dispatch(&self, event: ScrollEvent) {
        let next = self.tracker.get().reduce(event);
        if next != self.tracker.get() {
            self.tracker.set(next);
            self.controls.render(&next);
        }
    }

    fn measure(&self) {
        if let Some(geometry) = dom::viewport_geometry() {
            self.dispatch(ScrollEvent::Scrolled(geometry));
        }
    }
}

/// Live scroll tracking for the page.
pub struct ScrollBinding {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListenerGuard>,
    _observer: Option<ObserverGuard>,
}

impl ScrollBinding {
    /// Reset to the top, measure once and start listening.
    pub fn mount() -> Option<Self> {
        let window = dom::window()?;
        dom::scroll_window_to(0.0, false);

        let inner = Rc::new(Inner {
            tracker: Cell::new(ScrollTracker::default()),
            controls: Controls::find(),
            frame_pending: Cell::new(false),
            frame: RefCell::new(None),
        });
        if let Some(geometry) = dom::viewport_geometry() {
            inner.dispatch(ScrollEvent::Mounted(geometry));
        }
        inner.controls.render(&inner.tracker.get());

        let mut listeners = Vec::new();
        for event in ["scroll", "resize"] {
            let weak = Rc::downgrade(&inner);
            listeners.extend(EventListenerGuard::passive(&window, event, move |_| {
                let Some(inner) = weak.upgrade() else { return };
                if inner.frame_pending.replace(true) {
                    return;
                }
                let weak = Rc::downgrade(&inner);
                let frame = FrameGuard::new(move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.frame_pending.set(false);
                        inner.measure();
                    }
                });
                if frame.is_none() {
                    inner.frame_pending.set(false);
                }
                // Replacing drops the previous guard, whose frame already ran.
                *inner.frame.borrow_mut() = frame;
            }));
        }
        listeners.extend(bind_section_links());

        let bars: Vec<Element> = NavTarget::ALL
            .into_iter()
            .filter_map(|target| dom::by_id(target.element_id()))
            .collect();
        let weak = Rc::downgrade(&inner);
        let observer = ObserverGuard::new(&bars, NAV_VISIBILITY_RATIO, move |entry| {
            let Some(inner) = weak.upgrade() else { return };
            let id = entry.target().id();
            let Some(target) = NavTarget::ALL.into_iter().find(|t| t.element_id() == id) else {
                return;
            };
            inner.dispatch(ScrollEvent::NavIntersection {
                target,
                is_intersecting: entry.intersection_ratio() >= NAV_VISIBILITY_RATIO,
            });
        });

        Some(Self {
            _inner: inner,
            _listeners: listeners,
            _observer: observer,
        })
    }
}

/// Smooth scrolling for section links, jump arrows and the top button.
///
/// Drawer links are handled by the drawer, which delays the scroll until it
/// has closed.
fn bind_section_links() -> Vec<EventListenerGuard> {
    let mut guards: Vec<EventListenerGuard> = dom::query_document("[data-scroll-target]:not(.drawer-link)")
        .into_iter()
        .filter_map(|element| {
            let section: SectionId = element.get_attribute("data-scroll-target")?.parse().ok()?;
            EventListenerGuard::new(&element, "click", move |event| {
                event.prevent_default();
                dom::scroll_to_section(section);
            })
        })
        .collect();

    if let Some(button) = dom::by_id(servanda_render::components::SCROLL_TOP_ID) {
        guards.extend(EventListenerGuard::new(&button, "click", |_| {
            dom::scroll_window_to(0.0, true);
        }));
    }
    guards
}
