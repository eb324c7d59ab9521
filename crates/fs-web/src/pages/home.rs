use crate::config::CONFIG;
use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::components::{CopyButton, Section, SiteFooter, SiteLogo};

#[component]
pub fn HomePage() -> impl IntoView {
    let site = &CONFIG.site;
    let canonical = CONFIG.canonical_url("/");

    view! {
        <Title text=site.title />
        <Meta name="description" content=site.desc />
        <Meta name="author" content=site.author />
        <Meta property="og:title" content=site.title />
        <Meta property="og:image" content=CONFIG.og_image_url() />
        <Link rel="canonical" href=canonical />
        <main class="page">
            <header class="site-header">
                <SiteLogo config=&CONFIG />
                <p class="site-desc">{site.desc}</p>
            </header>

            <Section id="about" title="About">
                <p>
                    <strong>{site.title}</strong> " is written by " {site.author} ". " {site.desc} "."
                </p>
            </Section>

            // Share the site address
            <Section id="share" title="Share">
                <div class="copy-row">
                    <code>{site.website}</code>
                    <CopyButton value=site.website label="Copy site address" />
                </div>
            </Section>

            <SiteFooter config=&CONFIG />
        </main>
    }
}
