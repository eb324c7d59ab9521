use leptos::prelude::*;

use crate::copy::{Copier, CopyState, PageClipboard, PageTimers};

/// Tag name of the element `CopyButton` renders; the stylesheet targets it.
/// No custom element is registered, so a bare `<copy-button>` written into
/// HTML outside of `CopyButton` stays inert.
pub const COPY_BUTTON_TAG: &str = "copy-button";

/// Icon button that copies `value` to the clipboard and shows a tick for two
/// seconds afterwards.
///
/// The current state is mirrored to `data-state` (`idle` / `confirming`) on the
/// host element for styling. The button is only live when rendered through
/// this component.
#[component]
pub fn CopyButton(
    /// The exact text to copy when clicked
    #[prop(into, default = Signal::derive(String::new))]
    value: Signal<String>,
    /// Accessible name for the icon-only button
    #[prop(into, default = "Copy to clipboard".to_string())]
    label: String,
) -> impl IntoView {
    let state = RwSignal::new(CopyState::Idle);
    let copier = Copier::with_observer(value.get_untracked(), PageClipboard, PageTimers, move |s| {
        // The button may be gone by the time a reset fires.
        let _ = state.try_set(s);
    });

    let on_click = move |_| {
        copier.set_value(value.get_untracked());
        copier.activate();
    };

    view! {
        <copy-button value=move || value.get() data-state=move || state.get().as_str()>
            <button type="button" part="button" aria-label=label.clone() title=label on:click=on_click></button>
            <span class="sr-only" aria-live="polite">
                {move || state.get().is_confirming().then_some("Copied")}
            </span>
        </copy-button>
    }
}
