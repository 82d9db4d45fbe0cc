//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in with `option_env!` when the crate is compiled. Everything else
//! falls back to the defaults the backend and auth collaborator expect.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage key holding the interest/attendance snapshot.
pub const DEFAULT_PREFERENCES_KEY: &str = "user_events";
/// Storage key written by the external auth collaborator.
pub const DEFAULT_AUTH_TOKEN_KEY: &str = "auth_token";
/// Events per page on the list view.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Typed client settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every backend request; empty means same-origin.
    pub api_base: String,
    pub preferences_key: String,
    pub auth_token_key: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            preferences_key: DEFAULT_PREFERENCES_KEY.to_owned(),
            auth_token_key: DEFAULT_AUTH_TOKEN_KEY.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time overrides.
    ///
    /// Optional:
    /// - `RAVE_API_BASE`: backend base URL (trailing `/` trimmed)
    /// - `RAVE_PREFERENCES_KEY`: storage key for the preference snapshot
    /// - `RAVE_PAGE_SIZE`: events per page, default 12
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("RAVE_API_BASE"),
            option_env!("RAVE_PREFERENCES_KEY"),
            option_env!("RAVE_PAGE_SIZE"),
        )
    }

    fn from_overrides(api_base: Option<&str>, preferences_key: Option<&str>, page_size: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: api_base
                .map(|base| base.trim().trim_end_matches('/').to_owned())
                .unwrap_or(defaults.api_base),
            preferences_key: preferences_key
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map_or(defaults.preferences_key, str::to_owned),
            auth_token_key: defaults.auth_token_key,
            page_size: page_size
                .and_then(|raw| raw.trim().parse::<u32>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
        }
    }
}
