//! Copy-to-clipboard behaviour, independent of how the button is drawn.

mod controller;
mod platform;
mod state;

pub use controller::{Copier, Observer};
pub use platform::{Clipboard, PageClipboard, PageTimers, Timers};
pub use state::{CONFIRMATION_WINDOW, CopyMachine, CopyState, ResetToken};
