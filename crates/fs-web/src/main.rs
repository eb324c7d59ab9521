#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use clap::Parser;
    use fs_web::app::{App, shell};
    use fs_web::settings::{Args, Settings};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use tower_http::compression::CompressionLayer;

    let settings = Settings::resolve(Args::parse())?;
    fs_web::telemetry::init(settings.log.as_deref());

    let conf = get_configuration(None).context("Failed to load Leptos configuration")?;
    let mut leptos_options = conf.leptos_options;
    settings.apply(&mut leptos_options);

    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(fs_web::legacy::routes())
        .merge(fs_web::sitemap::routes())
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The browser entry point is `fs_web::hydrate`
}
