//! Configuration Module
//!
//! Handles loading server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Default HTTP port when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// Default directory holding the landing page and other static files.
///
/// Anchored to the crate directory so the page is found whatever the
/// working directory of the process.
pub const DEFAULT_STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory served at `/` and as the fallback for unmatched paths
    pub static_dir: PathBuf,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `STATIC_DIR` - Static file directory (default: `public/` in the crate directory)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            static_dir: env::var("STATIC_DIR")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    }

    #[test]
    fn test_default_static_dir_independent_of_cwd() {
        let dir = Config::default().static_dir;
        assert!(dir.is_absolute());
        assert!(dir.join("index.html").is_file());
    }

    // Single test touching the process environment, so no other test races it.
    #[test]
    fn test_config_from_env() {
        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");
        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));

        env::set_var("PORT", "not-a-port");
        assert_eq!(Config::from_env().server_port, 3000);

        env::set_var("PORT", "8081");
        env::set_var("STATIC_DIR", "/srv/www");
        let config = Config::from_env();
        assert_eq!(config.server_port, 8081);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));

        env::remove_var("PORT");
        env::remove_var("STATIC_DIR");
    }
}
