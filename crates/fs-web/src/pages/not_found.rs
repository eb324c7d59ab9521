use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Tell the server renderer to answer with a 404 status
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="404 - Page not found" />
        <main class="page">
            <h1>"404 - Page not found"</h1>
            <a href="/">"\u{2190} back to home"</a>
        </main>
    }
}
