use leptos::prelude::*;

/// Link that opens in a new tab
#[component]
pub fn ExternalLink(
    #[prop(into)] href: String,
    #[prop(into)] label: String,
    /// Tooltip / accessible description
    #[prop(into, optional)]
    title: Option<String>,
) -> impl IntoView {
    view! {
        <a href=href title=title target="_blank" rel="noopener noreferrer" class="external-link">
            {label}
        </a>
    }
}
