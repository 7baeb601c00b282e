//! Lifetime binding for timers, listeners and observers.
//!
//! A [`Subscription`] owns a browser registration and a [`Liveness`] flag
//! shared with the registered callback. Dropping the subscription first marks
//! the flag dead, then releases the registration, so a callback the browser
//! already queued sees a dead flag and returns without touching state.

use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn end(&self) {
        self.0.set(false);
    }

    /// Wraps `f` so it only runs while the flag is live.
    pub fn guard<A, F>(&self, mut f: F) -> impl FnMut(A) + use<A, F>
    where
        F: FnMut(A),
    {
        let live = self.clone();
        move |arg| {
            if live.is_live() {
                f(arg);
            }
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// A registration that can be released exactly once.
pub trait Teardown {
    fn teardown(&mut self);
}

/// Owns a registration; releases it on drop or on [`Subscription::cancel`].
pub struct Subscription<H: Teardown> {
    handle: Option<H>,
    liveness: Liveness,
}

impl<H: Teardown> Subscription<H> {
    pub fn new(handle: H, liveness: Liveness) -> Self {
        Self {
            handle: Some(handle),
            liveness,
        }
    }

    pub fn cancel(&mut self) {
        self.liveness.end();
        if let Some(mut handle) = self.handle.take() {
            handle.teardown();
        }
    }
}

impl<H: Teardown> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Stand-in for a browser registration that keeps its callback around
    /// after teardown, the way a queued event can.
    struct FakeTimer {
        released: Rc<Cell<u32>>,
    }

    impl Teardown for FakeTimer {
        fn teardown(&mut self) {
            self.released.set(self.released.get() + 1);
        }
    }

    fn fixture() -> (Rc<Cell<u32>>, Rc<Cell<u32>>, Liveness) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)), Liveness::new())
    }

    #[test]
    fn callbacks_run_while_mounted() {
        let (released, fired, liveness) = fixture();
        let counter = fired.clone();
        let mut callback = liveness.guard(move |_: ()| counter.set(counter.get() + 1));
        let _sub = Subscription::new(FakeTimer { released: released.clone() }, liveness);

        callback(());
        callback(());
        assert_eq!(fired.get(), 2);
        assert_eq!(released.get(), 0);
    }

    #[test]
    fn no_invocations_after_drop() {
        let (released, fired, liveness) = fixture();
        let counter = fired.clone();
        let mut callback = liveness.guard(move |_: ()| counter.set(counter.get() + 1));
        let sub = Subscription::new(FakeTimer { released: released.clone() }, liveness);

        callback(());
        drop(sub);
        for _ in 0..5 {
            callback(());
        }
        assert_eq!(fired.get(), 1);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn cancel_is_idempotent() {
        let (released, _, liveness) = fixture();
        let mut sub = Subscription::new(FakeTimer { released: released.clone() }, liveness);
        sub.cancel();
        sub.cancel();
        assert_eq!(released.get(), 1);
        drop(sub);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn repeated_mount_cycles_leave_nothing_running() {
        let released = Rc::new(Cell::new(0));
        let fired = Rc::new(Cell::new(0));
        let mut stale = Vec::new();

        for _ in 0..3 {
            let liveness = Liveness::new();
            let counter = fired.clone();
            let callback = liveness.guard(move |_: ()| counter.set(counter.get() + 1));
            let sub = Subscription::new(FakeTimer { released: released.clone() }, liveness);
            stale.push(callback);
            drop(sub);
        }

        for callback in stale.iter_mut() {
            callback(());
        }
        assert_eq!(fired.get(), 0);
        assert_eq!(released.get(), 3);
    }
}
