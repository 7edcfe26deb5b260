//! Session client configuration.
//!
//! A WASM bundle has no process environment, so the API base URL is baked in
//! at build time through `METHASOFT_API_URL`.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:4000";
pub const CURRENT_USER_KEY: &str = "currentUser";
pub const DEFAULT_WELCOME_DELAY_MS: u64 = 2500;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub api_url: String,
    pub storage_key: String,
    pub welcome_delay: Duration,
}

impl AuthConfig {
    /// Build config from build-time environment.
    ///
    /// Optional:
    /// - `METHASOFT_API_URL`: default `http://localhost:4000`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::default().with_api_url(option_env!("METHASOFT_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    #[must_use]
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_owned();
        self
    }

    #[must_use]
    pub fn with_welcome_delay(mut self, delay: Duration) -> Self {
        self.welcome_delay = delay;
        self
    }

    /// Full URL of the credential exchange endpoint.
    pub fn authenticate_url(&self) -> String {
        format!("{}/users/authenticate", self.api_url)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            storage_key: CURRENT_USER_KEY.to_owned(),
            welcome_delay: Duration::from_millis(DEFAULT_WELCOME_DELAY_MS),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
