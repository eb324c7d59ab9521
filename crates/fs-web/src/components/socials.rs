use leptos::prelude::*;

use crate::components::ExternalLink;
use crate::config::SiteConfig;

/// The site's active social links, in configured order.
#[component]
pub fn SocialLinks(config: &'static SiteConfig) -> impl IntoView {
    view! {
        <ul class="social-links">
            {config
                .active_socials()
                .map(|social| {
                    view! {
                        <li>
                            <ExternalLink
                                href=social.href
                                label=social.name
                                title=social.link_title.trim().to_string()
                            />
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
