//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

/// Invalid or missing host settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL of the events API that `/api/*` is forwarded to.
    pub backend_url: String,
    /// Overrides the Leptos site root when set.
    pub site_root: Option<String>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Required:
    /// - `BACKEND_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: Leptos site root (defaults to the cargo-leptos setting)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("BACKEND_URL").ok().as_deref(),
            std::env::var("SITE_ROOT").ok().as_deref(),
        )
    }

    fn from_vars(port: Option<&str>, backend_url: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.to_owned() })?,
            None => DEFAULT_PORT,
        };

        let backend_url = backend_url
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing("BACKEND_URL"))?;
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "BACKEND_URL", value: backend_url.to_owned() });
        }

        let site_root = site_root.map(str::trim).filter(|s| !s.is_empty()).map(str::to_owned);

        Ok(Self { port, backend_url: backend_url.to_owned(), site_root })
    }
}
