//! Browser glue: window access plus RAII handles for intervals, window
//! listeners and intersection observers.
//!
//! Each handle implements [`Teardown`] so it can sit inside a
//! [`crate::state::Subscription`]; the JS closure lives as long as the handle
//! and is dropped only after the registration is released.

use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, Event, IntersectionObserver, IntersectionObserverEntry, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::error::{PageError, Result};
use crate::state::{Teardown, normalize_offset};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(PageError::NoWindow)
}

/// Current vertical scroll distance from the top of the document.
pub fn scroll_offset() -> Result<f64> {
    window()?
        .scroll_y()
        .map(normalize_offset)
        .map_err(|e| PageError::js("window.scrollY", e))
}

pub fn smooth_scroll_to_top() -> Result<()> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Calendar year from the visitor's clock, for the copyright line.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

/// A `setInterval` registration.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(period: Duration, callback: impl FnMut() + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut()>::new(callback);
        let millis = i32::try_from(period.as_millis()).unwrap_or(i32::MAX);
        let id = window()?
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|e| PageError::js("setInterval", e))?;
        log::debug!("interval {id} started ({millis} ms)");
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Teardown for Interval {
    fn teardown(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
            log::debug!("interval {} cleared", self.id);
        }
    }
}

/// An event listener registered on `window`.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn attach(event: &'static str, callback: impl FnMut(Event) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| PageError::js("addEventListener", e))?;
        log::debug!("window `{event}` listener attached");
        Ok(Self { event, callback })
    }
}

impl Teardown for WindowListener {
    fn teardown(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            Ok(()) => log::debug!("window `{}` listener removed", self.event),
            Err(e) => log::warn!("{}", PageError::js("removeEventListener", e)),
        }
    }
}

/// Returned by a visibility callback to keep or stop watching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Watch {
    Continue,
    Stop,
}

/// An `IntersectionObserver` watching a single element.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityObserver {
    /// Calls `on_change` with `isIntersecting` for every entry the browser
    /// reports, including the initial one. Returning [`Watch::Stop`]
    /// disconnects the observer.
    pub fn observe(
        target: &Element,
        mut on_change: impl FnMut(bool) -> Watch + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if on_change(entry.is_intersecting()) == Watch::Stop {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );
        let observer = IntersectionObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| PageError::js("new IntersectionObserver", e))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Teardown for VisibilityObserver {
    fn teardown(&mut self) {
        self.observer.disconnect();
    }
}
