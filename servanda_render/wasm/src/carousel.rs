//! Versions strip binding.

use std::cell::Cell;
use std::rc::Rc;

use servanda_core::carousel::MAJORITY_VISIBLE;
use servanda_core::{CarouselCommand, CarouselController, CarouselEvent, CarouselLayout, SectionId, StripMetrics};
use servanda_render::types::ClientConfig;
use wasm_bindgen::JsCast;
use web_sys::{Element, TouchEvent};

use crate::dom;
use crate::listeners::{EventListenerGuard, ObserverGuard};

struct Inner {
    controller: Cell<CarouselController>,
    strip: Element,
    cards: Vec<Element>,
    touch_start_x: Cell<Option<f64>>,
}

impl Inner {
    fn metrics(&self) -> StripMetrics {
        let viewport_width = dom::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|width| width.as_f64())
            .unwrap_or_default();
        StripMetrics {
            container_width: f64::from(self.strip.client_width()),
            scroll_width: f64::from(self.strip.scroll_width()),
            viewport_width,
        }
    }

    fn dispatch(&self, event: CarouselEvent) {
        let before = self.controller.get();
        let (next, command) = before.reduce(event);
        self.controller.set(next);

        if next.active_index() != before.active_index() {
            self.render();
        }
        if let Some(CarouselCommand::ScrollTo { offset, smooth }) = command {
            dom::scroll_element_to(&self.strip, offset, smooth);
        }
    }

    fn render(&self) {
        let controller = self.controller.get();
        for (index, card) in self.cards.iter().enumerate() {
            card.set_class_name(controller.emphasis(index).class());
        }
    }
}

fn listen(
    inner: &Rc<Inner>,
    target: &Element,
    event: &'static str,
    passive: bool,
    handler: impl Fn(&Inner, &web_sys::Event) + 'static,
) -> Option<EventListenerGuard> {
    let weak = Rc::downgrade(inner);
    let callback = move |event: web_sys::Event| {
        if let Some(inner) = weak.upgrade() {
            handler(&inner, &event);
        }
    };
    if passive {
        EventListenerGuard::passive(target, event, callback)
    } else {
        EventListenerGuard::new(target, event, callback)
    }
}

fn touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// Live carousel for the versions strip.
pub struct CarouselBinding {
    _inner: Rc<Inner>,
    _listeners: Vec<EventListenerGuard>,
    _observer: Option<ObserverGuard>,
}

impl CarouselBinding {
    /// Bind to `[data-carousel]`. Returns `None` when the page has no strip.
    pub fn mount(config: &ClientConfig) -> Option<Self> {
        let root = dom::query_document("[data-carousel]").into_iter().next()?;
        let strip = dom::query_all(&root, "[data-carousel-strip]").into_iter().next()?;
        let cards = dom::query_all(&strip, "[data-carousel-index]");
        let controller = CarouselController::new(
            cards.len(),
            config.default_version,
            CarouselLayout::default(),
        );

        let inner = Rc::new(Inner {
            controller: Cell::new(controller),
            strip: strip.clone(),
            cards,
            touch_start_x: Cell::new(None),
        });
        inner.render();
        inner.dispatch(CarouselEvent::Mounted(inner.metrics()));

        let mut listeners = Vec::new();
        listeners.extend(listen(&inner, &strip, "scroll", true, |inner, _| {
            let offset = f64::from(inner.strip.scroll_left());
            inner.dispatch(CarouselEvent::Scrolled {
                offset,
                metrics: inner.metrics(),
            });
        }));
        for grab in ["wheel", "pointerdown"] {
            listeners.extend(listen(&inner, &strip, grab, true, |inner, _| {
                inner.dispatch(CarouselEvent::UserScrollStarted);
            }));
        }
        listeners.extend(listen(&inner, &strip, "touchstart", true, |inner, event| {
            inner.touch_start_x.set(touch_x(event));
            inner.dispatch(CarouselEvent::UserScrollStarted);
        }));
        listeners.extend(listen(&inner, &strip, "touchend", true, |inner, event| {
            let (Some(start), Some(end)) = (inner.touch_start_x.take(), touch_x(event)) else {
                return;
            };
            inner.dispatch(CarouselEvent::Swipe {
                delta_x: end - start,
                metrics: inner.metrics(),
            });
        }));

        for button in dom::query_all(&root, "[data-carousel-prev]") {
            listeners.extend(listen(&inner, &button, "click", false, |inner, _| {
                inner.dispatch(CarouselEvent::Previous(inner.metrics()));
            }));
        }
        for button in dom::query_all(&root, "[data-carousel-next]") {
            listeners.extend(listen(&inner, &button, "click", false, |inner, _| {
                inner.dispatch(CarouselEvent::Next(inner.metrics()));
            }));
        }
        for (index, card) in inner.cards.iter().enumerate() {
            listeners.extend(listen(&inner, card, "click", false, move |inner, _| {
                inner.dispatch(CarouselEvent::Select {
                    index,
                    metrics: inner.metrics(),
                });
            }));
        }

        let observer = dom::by_id(SectionId::News.id()).and_then(|section| {
            let weak = Rc::downgrade(&inner);
            ObserverGuard::new(&[section], MAJORITY_VISIBLE, move |entry| {
                if let Some(inner) = weak.upgrade() {
                    inner.dispatch(CarouselEvent::SectionVisibility {
                        ratio: entry.intersection_ratio(),
                        metrics: inner.metrics(),
                    });
                }
            })
        });

        Some(Self {
            _inner: inner,
            _listeners: listeners,
            _observer: observer,
        })
    }
}
