use chrono::Datelike;
use leptos::prelude::*;

use crate::components::SocialLinks;
use crate::config::SiteConfig;

#[component]
pub fn SiteFooter(config: &'static SiteConfig) -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <SocialLinks config=config />
            <div class="copyright">"\u{00A9} " {year} " " {config.site.author}</div>
        </footer>
    }
}
