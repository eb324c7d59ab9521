//! Server settings: CLI flags and environment, an optional TOML file, then
//! the cargo-leptos defaults. Earlier sources win.
//!
//! ```toml
//! [server]
//! addr = "0.0.0.0:8080"
//! site_root = "/srv/fully-stacked/site"
//! log = "info,fs_web=debug"
//! ```

#[cfg(feature = "ssr")]
mod ssr {
    use anyhow::{Context, Result};
    use clap::Parser;
    use leptos::prelude::LeptosOptions;
    use serde::Deserialize;
    use std::net::SocketAddr;
    use std::path::{Path, PathBuf};
    use std::sync::Arc;

    #[derive(Debug, Default, Parser)]
    #[command(name = "fs-web", about = "Serve the Fully Stacked blog")]
    pub struct Args {
        /// TOML file with a [server] section
        #[arg(long, env = "FS_CONFIG")]
        pub config: Option<PathBuf>,

        /// Address to listen on (overrides LEPTOS_SITE_ADDR)
        #[arg(long, env = "FS_ADDR")]
        pub addr: Option<SocketAddr>,

        /// Directory holding the built site (pkg/, static assets)
        #[arg(long, env = "FS_SITE_ROOT")]
        pub site_root: Option<String>,

        /// tracing filter, e.g. "info" or "fs_web=debug"
        #[arg(long, env = "FS_LOG")]
        pub log: Option<String>,
    }

    // ── TOML shape ────────────────────────────────────────────────────────────

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct FileConfig {
        #[serde(default)]
        server: ServerSection,
    }

    #[derive(Debug, Default, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ServerSection {
        #[serde(default)]
        addr: Option<SocketAddr>,
        #[serde(default)]
        site_root: Option<String>,
        #[serde(default)]
        log: Option<String>,
    }

    // ── Resolved settings ─────────────────────────────────────────────────────

    #[derive(Debug, Default, Clone, PartialEq, Eq)]
    pub struct Settings {
        pub addr: Option<SocketAddr>,
        pub site_root: Option<String>,
        /// Explicit log filter; `None` defers to `RUST_LOG`, then `info`.
        pub log: Option<String>,
    }

    impl Settings {
        /// Merge CLI/env arguments over the config file named by `--config`.
        pub fn resolve(args: Args) -> Result<Self> {
            let file = match &args.config {
                Some(path) => load_file(path)?,
                None => FileConfig::default(),
            };
            let server = file.server;

            Ok(Self {
                addr: args.addr.or(server.addr),
                site_root: args.site_root.or(server.site_root),
                log: args.log.or(server.log),
            })
        }

        /// Override the cargo-leptos options with whatever was set explicitly.
        pub fn apply(&self, options: &mut LeptosOptions) {
            if let Some(addr) = self.addr {
                options.site_addr = addr;
            }
            if let Some(root) = &self.site_root {
                options.site_root = Arc::from(root.as_str());
            }
        }
    }

    fn load_file(path: &Path) -> Result<FileConfig> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use std::io::Write;

        fn config_file(contents: &str) -> tempfile::NamedTempFile {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            file.write_all(contents.as_bytes()).unwrap();
            file
        }

        #[test]
        fn defaults_are_empty() {
            let s = Settings::resolve(Args::default()).unwrap();
            assert_eq!(s, Settings::default());
        }

        #[test]
        fn file_values_used_when_flags_absent() {
            let file = config_file(
                r#"
                [server]
                addr = "0.0.0.0:8080"
                site_root = "/srv/site"
                log = "debug"
                "#,
            );
            let args = Args {
                config: Some(file.path().to_path_buf()),
                ..Args::default()
            };
            let s = Settings::resolve(args).unwrap();
            assert_eq!(s.addr, Some("0.0.0.0:8080".parse().unwrap()));
            assert_eq!(s.site_root.as_deref(), Some("/srv/site"));
            assert_eq!(s.log.as_deref(), Some("debug"));
        }

        #[test]
        fn flags_beat_file() {
            let file = config_file("[server]\naddr = \"0.0.0.0:8080\"\n");
            let args = Args {
                config: Some(file.path().to_path_buf()),
                addr: Some("127.0.0.1:9000".parse().unwrap()),
                ..Args::default()
            };
            let s = Settings::resolve(args).unwrap();
            assert_eq!(s.addr, Some("127.0.0.1:9000".parse().unwrap()));
        }

        #[test]
        fn empty_file_is_fine() {
            let file = config_file("");
            let args = Args {
                config: Some(file.path().to_path_buf()),
                ..Args::default()
            };
            assert_eq!(Settings::resolve(args).unwrap(), Settings::default());
        }

        #[test]
        fn unknown_key_is_an_error() {
            let file = config_file("[server]\nport = 80\n");
            let args = Args {
                config: Some(file.path().to_path_buf()),
                ..Args::default()
            };
            let err = Settings::resolve(args).unwrap_err();
            assert!(format!("{err:#}").contains("Failed to parse config"));
        }

        #[test]
        fn missing_file_is_an_error() {
            let args = Args {
                config: Some(PathBuf::from("/nonexistent/fs-web.toml")),
                ..Args::default()
            };
            let err = Settings::resolve(args).unwrap_err();
            assert!(err.to_string().contains("Failed to read config"));
        }

        #[test]
        fn apply_overrides_leptos_options() {
            let mut options = LeptosOptions::builder().output_name("fs-web").build();
            let settings = Settings {
                addr: Some("127.0.0.1:4000".parse().unwrap()),
                site_root: Some("dist".into()),
                log: None,
            };
            settings.apply(&mut options);
            assert_eq!(options.site_addr, "127.0.0.1:4000".parse::<SocketAddr>().unwrap());
            assert_eq!(&*options.site_root, "dist");
        }
    }
}

#[cfg(feature = "ssr")]
pub use ssr::*;
