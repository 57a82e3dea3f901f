use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Trailing-edge throttle. The first trigger in a window arms a timer;
/// further triggers are absorbed until it fires. The callback reads the
/// world when it runs, so the last position in the window is what counts.
pub struct Throttle {
    window_ms: u32,
    pending: Rc<Cell<bool>>,
    timer: RefCell<Option<Timeout>>,
}

impl Throttle {
    pub fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            pending: Rc::new(Cell::new(false)),
            timer: RefCell::new(None),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Returns false when the trigger was absorbed by a pending run.
    pub fn trigger<F>(&self, run: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        if self.pending.get() {
            return false;
        }
        self.pending.set(true);
        let pending = self.pending.clone();
        // The timer being replaced has already fired.
        self.timer.replace(Some(Timeout::new(self.window_ms, move || {
            pending.set(false);
            run();
        })));
        true
    }

    /// Drops any pending run without executing it.
    pub fn cancel(&self) {
        self.pending.set(false);
        if let Some(timeout) = self.timer.take() {
            timeout.cancel();
        }
    }
}

impl Drop for Throttle {
    fn drop(&mut self) {
        self.cancel();
    }
}
