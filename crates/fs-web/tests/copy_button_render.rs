//! Server-side rendering of the copy button.

#![cfg(feature = "ssr")]

use fs_web::components::{COPY_BUTTON_TAG, CopyButton};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn render<V: RenderHtml>(view: impl FnOnce() -> V) -> String {
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

#[test]
fn renders_host_element_with_value() {
    let html = render(|| view! { <CopyButton value="hello" /> });
    assert!(html.contains(&format!("<{COPY_BUTTON_TAG}")));
    assert!(html.contains(r#"value="hello""#));
}

#[test]
fn starts_in_idle_state() {
    let html = render(|| view! { <CopyButton value="hello" /> });
    assert!(html.contains(r#"data-state="idle""#));
    assert!(!html.contains("Copied"));
}

#[test]
fn renders_clickable_button_without_value() {
    let html = render(|| view! { <CopyButton /> });
    assert!(html.contains(r#"<button type="button""#));
    assert!(html.contains(r#"aria-label="Copy to clipboard""#));
}

#[test]
fn custom_label() {
    let html = render(|| view! { <CopyButton value="x" label="Copy site address" /> });
    assert!(html.contains(r#"aria-label="Copy site address""#));
}
