//! Configuration handling for the hosts (CLI and HTTP).
//!
//! The engine itself is configured only by the lookup service URL; the hosts
//! add where to listen and whether to hand the result to the system browser.
//! `Config::from_env` loads everything with development defaults.

use std::env;

use thiserror::Error;
use url::Url;

use crate::lookup::DEFAULT_LOOKUP_URL;

/// Environment variable names.
pub const ENV_LOOKUP_URL: &str = "HONDOKO_LOOKUP_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_OPEN_BROWSER: &str = "HONDOKO_OPEN_BROWSER";

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    lookup_url: Url,
    bind_addr: String,
    open_browser: bool,
}

impl Config {
    /// Create a new config explicitly, validating the lookup URL.
    pub fn new(
        lookup_url: &str,
        bind_addr: impl Into<String>,
        open_browser: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            lookup_url: parse_lookup_url(lookup_url)?,
            bind_addr: bind_addr.into(),
            open_browser,
        })
    }

    /// Load from environment variables, falling back to development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let lookup_url = env::var(ENV_LOOKUP_URL).unwrap_or_else(|_| DEFAULT_LOOKUP_URL.to_string());
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let open_browser = match env::var(ENV_OPEN_BROWSER) {
            Ok(value) => parse_flag(ENV_OPEN_BROWSER, &value)?,
            Err(_) => false,
        };

        Self::new(&lookup_url, bind_addr, open_browser)
    }

    /// Replace the lookup service URL.
    pub fn with_lookup_url(mut self, lookup_url: &str) -> Result<Self, ConfigError> {
        self.lookup_url = parse_lookup_url(lookup_url)?;
        Ok(self)
    }

    pub fn with_open_browser(mut self, open_browser: bool) -> Self {
        self.open_browser = open_browser;
        self
    }

    /// Base URL of the lookup service; the ISBN is attached as `isbn=`.
    pub fn lookup_url(&self) -> &Url {
        &self.lookup_url
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    /// Whether the CLI launches the system browser on success.
    pub fn open_browser(&self) -> bool {
        self.open_browser
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_url: Url::parse(DEFAULT_LOOKUP_URL).expect("default lookup url is valid"),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            open_browser: false,
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

fn parse_lookup_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::InvalidValue {
        field: ENV_LOOKUP_URL,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: ENV_LOOKUP_URL,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

fn parse_flag(field: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a boolean, got '{}'", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Ensure environment-variable manipulating tests run serially.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for key in [ENV_LOOKUP_URL, ENV_BIND_ADDR, ENV_OPEN_BROWSER] {
            unsafe {
                env::remove_var(key);
            }
        }
    }

    #[test]
    fn defaults_when_env_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.lookup_url().as_str(), DEFAULT_LOOKUP_URL);
        assert_eq!(cfg.bind_addr(), super::DEFAULT_BIND_ADDR);
        assert!(!cfg.open_browser());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn overrides_when_env_present() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_LOOKUP_URL, "http://localhost:3000/lookup");
            env::set_var(ENV_BIND_ADDR, "0.0.0.0:9000");
            env::set_var(ENV_OPEN_BROWSER, "yes");
        }
        let cfg = Config::from_env().unwrap();
        assert_eq!(cfg.lookup_url().as_str(), "http://localhost:3000/lookup");
        assert_eq!(cfg.bind_addr(), "0.0.0.0:9000");
        assert!(cfg.open_browser());
        clear_env();
    }

    #[test]
    fn rejects_invalid_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        unsafe {
            env::set_var(ENV_OPEN_BROWSER, "sometimes");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidValue { field: ENV_OPEN_BROWSER, .. })
        ));

        clear_env();
        unsafe {
            env::set_var(ENV_LOOKUP_URL, "hondoko");
        }
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidValue { field: ENV_LOOKUP_URL, .. })
        ));
        clear_env();
    }

    #[test]
    fn lookup_url_must_be_web_url() {
        let err = Config::default().with_lookup_url("ftp://files.example/").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for 'HONDOKO_LOOKUP_URL': unsupported scheme 'ftp'"
        );
    }
}
