//! `sitemap.xml` for the site's routes.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://fullystacked.net/</loc>
//!   </url>
//! </urlset>
//! ```

use std::borrow::Cow;

use crate::config::SiteConfig;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render a sitemap listing `paths` under the configured site URL.
pub fn render(config: &SiteConfig, paths: &[&str]) -> String {
    let mut xml = String::with_capacity(256 + paths.len() * 64);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for path in paths {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&config.canonical_url(path)));
        xml.push_str("</loc>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(feature = "ssr")]
mod ssr {
    use axum::Router;
    use axum::http::header;
    use axum::response::IntoResponse;
    use axum::routing::get;

    use crate::app::SITE_ROUTES;
    use crate::config::CONFIG;

    pub fn routes<S>() -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        Router::new().route("/sitemap.xml", get(sitemap_xml))
    }

    async fn sitemap_xml() -> impl IntoResponse {
        let xml = super::render(&CONFIG, SITE_ROUTES);
        tracing::debug!(urls = SITE_ROUTES.len(), "served sitemap");
        ([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml)
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("plain"), "plain");
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_xml(r#"'q' "q""#), "&apos;q&apos; &quot;q&quot;");
    }

    #[test]
    fn empty_sitemap() {
        let xml = render(&CONFIG, &[]);
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn lists_each_path_once() {
        let xml = render(&CONFIG, &["/", "/about", "/q?a=1&b=2"]);
        assert!(xml.contains("<loc>https://fullystacked.net/</loc>"));
        assert!(xml.contains("<loc>https://fullystacked.net/about</loc>"));
        assert!(xml.contains("<loc>https://fullystacked.net/q?a=1&amp;b=2</loc>"));
        assert_eq!(xml.matches("<url>").count(), 3);
    }
}
