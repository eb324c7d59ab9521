use leptos::prelude::*;
use leptos_meta::{MetaTags, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::config::CONFIG;
use crate::pages::{HomePage, NotFoundPage};

/// Every path the router serves, as listed in the sitemap.
pub const SITE_ROUTES: &[&str] = &["/"];

/// Full HTML document the server renders around [`App`].
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let color_scheme = if CONFIG.site.light_and_dark_mode { "light dark" } else { "light" };

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="color-scheme" content=color_scheme />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <link rel="sitemap" href="/sitemap.xml" />
                <link rel="stylesheet" href="/pkg/fs-web.css" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
