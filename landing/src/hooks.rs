//! Reactive wrappers that tie `dom` handles to the calling component.
//!
//! Each hook parks its [`Subscription`] in a local `StoredValue`. When the
//! component's owner is disposed the value is dropped, which ends the
//! liveness flag and releases the browser registration.

use std::time::Duration;

use leptos::html::Div;
use leptos::prelude::*;

use crate::dom::{self, Interval, VisibilityObserver, Watch, WindowListener};
use crate::state::{Liveness, RevealLatch, Subscription};

/// Runs `on_tick` every `period` while the component is mounted.
pub fn use_interval(period: Duration, mut on_tick: impl FnMut() + 'static) {
    let liveness = Liveness::new();
    let mut tick = liveness.guard(move |()| on_tick());
    match Interval::start(period, move || tick(())) {
        Ok(interval) => {
            StoredValue::new_local(Subscription::new(interval, liveness));
        }
        Err(err) => log::warn!("interval not started: {err}"),
    }
}

/// Runs `on_event` for every `event` dispatched on `window` while the
/// component is mounted.
pub fn use_window_event(event: &'static str, on_event: impl FnMut(web_sys::Event) + 'static) {
    let liveness = Liveness::new();
    let mut guarded = liveness.guard(on_event);
    match WindowListener::attach(event, move |e| guarded(e)) {
        Ok(listener) => {
            StoredValue::new_local(Subscription::new(listener, liveness));
        }
        Err(err) => log::warn!("window `{event}` listener not attached: {err}"),
    }
}

/// Vertical scroll offset of the window, updated on every `scroll` event.
///
/// Starts at 0 and is not read until the first event fires.
pub fn use_scroll_offset() -> ReadSignal<f64> {
    let (offset, set_offset) = signal(0.0);
    use_window_event("scroll", move |_| match dom::scroll_offset() {
        Ok(y) => set_offset.set(y),
        Err(err) => log::warn!("scroll offset unavailable: {err}"),
    });
    offset
}

/// `true` from the first time `target` intersects the viewport onwards.
pub fn use_reveal(target: NodeRef<Div>) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let slot = StoredValue::new_local(None::<Subscription<VisibilityObserver>>);

    Effect::new(move || {
        let Some(element) = target.get() else {
            return;
        };
        if slot.with_value(Option::is_some) {
            return;
        }

        let liveness = Liveness::new();
        let live = liveness.clone();
        let mut latch = RevealLatch::default();
        let observed = VisibilityObserver::observe(&element, move |intersecting| {
            if !live.is_live() {
                return Watch::Stop;
            }
            if latch.observe(intersecting) {
                set_revealed.set(true);
                log::debug!("section revealed");
                Watch::Stop
            } else {
                Watch::Continue
            }
        });

        match observed {
            Ok(observer) => {
                slot.update_value(|s| *s = Some(Subscription::new(observer, liveness)));
            }
            Err(err) => {
                // Without an observer the block would stay invisible forever.
                log::warn!("reveal observer unavailable, showing immediately: {err}");
                set_revealed.set(true);
            }
        }
    });

    revealed
}
