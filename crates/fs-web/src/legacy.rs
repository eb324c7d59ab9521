//! Posts used to live under `/posts/<slug>`; they are now served from
//! `/<slug>`. Old links get a permanent redirect.

/// New location for a legacy post slug (may contain nested segments).
///
/// `slug` must still be percent-encoded as it appeared in the request.
pub fn post_target(slug: &str) -> String {
    format!("/{}", slug.trim_start_matches('/'))
}

#[cfg(feature = "ssr")]
mod ssr {
    use axum::Router;
    use axum::http::Uri;
    use axum::response::Redirect;
    use axum::routing::get;

    /// Redirect routes, mergeable into the app router.
    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new().route("/posts/{*slug}", get(redirect_post))
    }

    // Works on the raw request path so the slug stays percent-encoded and
    // the Location header is always a valid URI reference.
    async fn redirect_post(uri: Uri) -> Redirect {
        let path = uri.path();
        let slug = path.strip_prefix("/posts").unwrap_or(path);
        let target = super::post_target(slug);
        tracing::debug!(%slug, %target, "legacy post redirect");
        Redirect::permanent(&target)
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;
