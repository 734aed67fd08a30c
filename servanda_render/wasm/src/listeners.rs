//! Scoped browser registrations.
//!
//! Every listener, observer, timer and animation frame the runtime creates
//! is owned by one of these guards. Dropping the guard deregisters the
//! callback and frees the closure, so tearing the page down is a matter of
//! dropping the owning [`crate::Page`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::dom;

/// An event listener that is removed on drop.
pub struct EventListenerGuard {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListenerGuard {
    /// Listen for `event` on `target`.
    pub fn new(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        Self::register(target, event, handler, None)
    }

    /// Listen with `{ passive: true }`, for scroll and touch events.
    pub fn passive(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Option<Self> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        Self::register(target, event, handler, Some(options))
    }

    fn register(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
        options: Option<AddEventListenerOptions>,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let callback = closure.as_ref().unchecked_ref();
        let result = match options {
            Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(
                event, callback, &options,
            ),
            None => target.add_event_listener_with_callback(event, callback),
        };
        if let Err(err) = result {
            dom::warn(&format!("could not listen for {event}"), &err);
            return None;
        }

        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for EventListenerGuard {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// An intersection observer that disconnects on drop.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverGuard {
    /// Observe `targets` with a single threshold.
    pub fn new(
        targets: &[web_sys::Element],
        threshold: f64,
        mut handler: impl FnMut(&IntersectionObserverEntry) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |entries: js_sys::Array, _: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    handler(&entry);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                dom::warn("IntersectionObserver unavailable", &err);
                return None;
            }
        };
        for target in targets {
            observer.observe(target);
        }

        Some(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// A one-shot `setTimeout` that is cleared on drop.
pub struct TimeoutGuard {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl TimeoutGuard {
    /// Run `callback` once after `millis`.
    pub fn new(millis: i32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(closure.as_ref().unchecked_ref(), millis)
            .ok()?;

        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for TimeoutGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.handle);
        }
    }
}

/// A pending `requestAnimationFrame` callback, cancelled on drop.
pub struct FrameGuard {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl FrameGuard {
    /// Run `callback` on the next frame.
    pub fn new(callback: impl FnOnce() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let mut callback = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(callback) = callback.take() {
                callback();
            }
        }) as Box<dyn FnMut()>);
        let handle = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()?;

        Some(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for FrameGuard {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.handle);
        }
    }
}
