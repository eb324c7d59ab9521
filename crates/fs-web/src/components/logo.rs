use leptos::prelude::*;

use crate::config::SiteConfig;

/// Site logo linking home; falls back to the text title when the logo is off.
#[component]
pub fn SiteLogo(config: &'static SiteConfig) -> impl IntoView {
    let title = config.site.title;

    view! {
        <a href="/" class="site-logo" aria-label=title>
            {match config.logo_path() {
                Some(src) => view! { <img src=src alt=title width=config.logo.width.to_string() /> }.into_any(),
                None => view! { <span class="site-title">{title}</span> }.into_any(),
            }}
        </a>
    }
}
