//! Mobile drawer and client-side tabs.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use servanda_core::SectionId;
use web_sys::Element;

use crate::dom;
use crate::listeners::{EventListenerGuard, TimeoutGuard};

/// Delay between closing the drawer and scrolling, so the scroll starts
/// from the settled layout.
pub const DRAWER_SCROLL_DELAY_MS: i32 = 300;

struct Drawer {
    panel: Element,
    toggles: Vec<Element>,
    open: Cell<bool>,
    pending_scroll: RefCell<Option<TimeoutGuard>>,
}

impl Drawer {
    fn set_open(&self, open: bool) {
        self.open.set(open);
        dom::set_hidden(&self.panel, !open);
        for toggle in &self.toggles {
            let _ = toggle.set_attribute("aria-expanded", if open { "true" } else { "false" });
        }
    }
}

/// Drawer toggle and delayed scrolling for drawer links.
pub struct DrawerBinding {
    _drawer: Rc<Drawer>,
    _listeners: Vec<EventListenerGuard>,
}

impl DrawerBinding {
    /// Bind to `[data-drawer]`. Returns `None` when the page has no drawer.
    pub fn mount() -> Option<Self> {
        let panel = dom::query_document("[data-drawer]").into_iter().next()?;
        let toggles = dom::query_document("[data-drawer-toggle]");
        let links = dom::query_all(&panel, ".drawer-link[data-scroll-target]");

        let drawer = Rc::new(Drawer {
            panel,
            toggles: toggles.clone(),
            open: Cell::new(false),
            pending_scroll: RefCell::new(None),
        });

        let mut listeners = Vec::new();
        for toggle in &toggles {
            let weak = Rc::downgrade(&drawer);
            listeners.extend(EventListenerGuard::new(toggle, "click", move |_| {
                if let Some(drawer) = weak.upgrade() {
                    drawer.set_open(!drawer.open.get());
                }
            }));
        }
        for link in &links {
            let Some(section) = link
                .get_attribute("data-scroll-target")
                .and_then(|id| id.parse::<SectionId>().ok())
            else {
                continue;
            };
            let weak = Rc::downgrade(&drawer);
            listeners.extend(EventListenerGuard::new(link, "click", move |event| {
                event.prevent_default();
                let Some(drawer) = weak.upgrade() else { return };
                drawer.set_open(false);
                let scroll = TimeoutGuard::new(DRAWER_SCROLL_DELAY_MS, move || {
                    dom::scroll_to_section(section);
                });
                // A newer tap replaces a scroll that has not fired yet.
                *drawer.pending_scroll.borrow_mut() = scroll;
            }));
        }

        Some(Self {
            _drawer: drawer,
            _listeners: listeners,
        })
    }
}

/// Switch tabs within the button's section.
fn activate_tab(button: &Element) {
    let Some(tab) = button.get_attribute("data-tab") else {
        return;
    };
    let Ok(Some(scope)) = button.closest("section") else {
        return;
    };
    // Buttons and panels share the `{scope}-{name}` id.
    for (selector, attribute) in [("[data-tab]", "data-tab"), ("[data-tab-panel]", "data-tab-panel")] {
        for element in dom::query_all(&scope, selector) {
            let active = element.get_attribute(attribute).as_deref() == Some(tab.as_str());
            dom::toggle_class(&element, "active", active);
        }
    }
}

/// Bind every tab button on the page.
pub fn bind_tabs() -> Vec<EventListenerGuard> {
    dom::query_document("[data-tab]")
        .into_iter()
        .filter_map(|button| {
            let target = button.clone();
            EventListenerGuard::new(&button, "click", move |_| activate_tab(&target))
        })
        .collect()
}
