//! Clipboard and timer access for the copy controller.
//!
//! In the browser (`hydrate`) these go to `navigator.clipboard` and
//! `setTimeout`. Server and plain builds get no-op versions: the server only
//! renders markup and never dispatches click events.

use std::time::Duration;

/// Somewhere text can be copied to. Writes are fire-and-forget.
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str);
}

/// Deferred-callback primitive. Must not block the caller.
pub trait Timers: Send + Sync + 'static {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce() + Send>);
}

/// The page's system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageClipboard;

/// The page's event-loop timers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageTimers;

#[cfg(feature = "hydrate")]
impl Clipboard for PageClipboard {
    fn write_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Promise is dropped on purpose: a rejected write shows up as an
        // unhandled rejection and leaves the button state alone.
        let _ = window.navigator().clipboard().write_text(text);
    }
}

#[cfg(feature = "hydrate")]
impl Timers for PageTimers {
    fn defer(&self, delay: Duration, task: Box<dyn FnOnce() + Send>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, task).forget();
    }
}

// Fallback for when the page isn't running in a browser (SSR, cargo check)
#[cfg(not(feature = "hydrate"))]
impl Clipboard for PageClipboard {
    fn write_text(&self, _text: &str) {}
}

#[cfg(not(feature = "hydrate"))]
impl Timers for PageTimers {
    fn defer(&self, _delay: Duration, _task: Box<dyn FnOnce() + Send>) {}
}
