//! tracing setup for the server binary.

#[cfg(feature = "ssr")]
mod ssr {
    use tracing_subscriber::EnvFilter;

    const DEFAULT_FILTER: &str = "info";

    /// Install the global fmt subscriber.
    ///
    /// An explicit `filter` wins, then `RUST_LOG`, then `info`.
    pub fn init(filter: Option<&str>) {
        let filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        };

        tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;
