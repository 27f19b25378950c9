//! Client configuration resolved from the build-time environment.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so values are
//! captured with `option_env!` when the crate is compiled and parsed here.
//! `App` provides the resolved config as context.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api/v1";
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash.
    pub api_base_url: String,
    /// Quiet period before a filter edit turns into a remote search.
    pub search_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            search_delay: Duration::from_millis(DEFAULT_SEARCH_DELAY_MS),
        }
    }
}

impl ClientConfig {
    /// Build config from values captured at compile time.
    ///
    /// Optional:
    /// - `LIBRARY_API_URL`: default `http://localhost:3000/api/v1`
    /// - `LIBRARY_SEARCH_DELAY_MS`: default 500
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("LIBRARY_API_URL"), option_env!("LIBRARY_SEARCH_DELAY_MS"))
    }

    /// Build config from raw optional strings, falling back to defaults for
    /// anything missing or unparseable.
    pub fn from_raw(api_url: Option<&str>, delay_ms: Option<&str>) -> Self {
        Self {
            api_base_url: parse_base_url(api_url),
            search_delay: Duration::from_millis(parse_u64(delay_ms, DEFAULT_SEARCH_DELAY_MS)),
        }
    }

    /// Join an API path (leading slash included) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base_url)
    }
}

fn parse_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(url) if !url.is_empty() => url.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE_URL.to_owned(),
    }
}

fn parse_u64(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|v| v.trim().parse::<u64>().ok()).unwrap_or(default)
}
