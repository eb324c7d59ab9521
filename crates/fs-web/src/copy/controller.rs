use parking_lot::Mutex;
use std::sync::{Arc, Weak};

use super::platform::{Clipboard, PageClipboard, PageTimers, Timers};
use super::state::{CONFIRMATION_WINDOW, CopyMachine, CopyState, ResetToken};

/// Called with the new state on every Idle <-> Confirming transition.
pub type Observer = Arc<dyn Fn(CopyState) + Send + Sync>;

/// Shared handle to one copy button: its value, its state machine, and the
/// clipboard/timers it talks to. Cheap to clone; clones drive the same button.
pub struct Copier<C = PageClipboard, T = PageTimers> {
    inner: Arc<Inner<C, T>>,
}

struct Inner<C, T> {
    machine: Mutex<CopyMachine>,
    clipboard: C,
    timers: T,
    observer: Option<Observer>,
}

impl<C, T> Clone for Copier<C, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Copier {
    /// Copier bound to the page clipboard and timers.
    pub fn for_page(value: impl Into<String>) -> Self {
        Self::new(value, PageClipboard, PageTimers)
    }
}

impl<C: Clipboard, T: Timers> Copier<C, T> {
    pub fn new(value: impl Into<String>, clipboard: C, timers: T) -> Self {
        Self::build(value.into(), clipboard, timers, None)
    }

    pub fn with_observer(
        value: impl Into<String>,
        clipboard: C,
        timers: T,
        observer: impl Fn(CopyState) + Send + Sync + 'static,
    ) -> Self {
        Self::build(value.into(), clipboard, timers, Some(Arc::new(observer)))
    }

    fn build(value: String, clipboard: C, timers: T, observer: Option<Observer>) -> Self {
        Self {
            inner: Arc::new(Inner {
                machine: Mutex::new(CopyMachine::new(value)),
                clipboard,
                timers,
                observer,
            }),
        }
    }

    pub fn value(&self) -> String {
        self.inner.machine.lock().value().to_owned()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.inner.machine.lock().set_value(value);
    }

    pub fn state(&self) -> CopyState {
        self.inner.machine.lock().state()
    }

    /// Whether the button is currently showing its "just copied" state.
    pub fn confirmation(&self) -> bool {
        self.state().is_confirming()
    }

    /// Copy the current value and (re)start the confirmation window.
    ///
    /// The state flips synchronously; the clipboard write is not awaited and
    /// its outcome does not affect the state.
    pub fn activate(&self) {
        let (value, token, entered) = {
            let mut machine = self.inner.machine.lock();
            let entered = !machine.state().is_confirming();
            let token = machine.activate();
            (machine.value().to_owned(), token, entered)
        };

        self.inner.clipboard.write_text(&value);
        if entered {
            self.inner.notify(CopyState::Confirming);
        }

        let weak = Arc::downgrade(&self.inner);
        self.inner
            .timers
            .defer(CONFIRMATION_WINDOW, Box::new(move || Inner::expire(&weak, token)));
    }
}

impl<C, T> Inner<C, T> {
    fn notify(&self, state: CopyState) {
        if let Some(observer) = &self.observer {
            observer(state);
        }
    }

    // Weak so a reset firing after the button is gone does nothing.
    fn expire(weak: &Weak<Self>, token: ResetToken) {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        let changed = inner.machine.lock().expire(token);
        if changed {
            inner.notify(CopyState::Idle);
        }
    }
}
