use leptos::prelude::*;

/// Titled page section with an anchor link to itself
#[component]
pub fn Section(#[prop(into)] id: String, #[prop(into)] title: String, children: Children) -> impl IntoView {
    let anchor_href = format!("#{}", id);

    view! {
        <section id=id class="mb-8">
            <h2 class="section-title">
                {title}
                <a href=anchor_href class="section-anchor" aria-hidden="true">" #"</a>
            </h2>
            <div class="section-body">{children()}</div>
        </section>
    }
}
