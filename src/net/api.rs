//! REST transport for the credential exchange.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stub returning `AuthError::Unavailable` since the
//! endpoint is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Connectivity, status and decode failures are mapped into `AuthError` and
//! returned as-is; nothing here retries or swallows them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde_json::Value;

use super::types::Credentials;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Posts credentials to the authentication endpoint and yields the raw body.
pub trait AuthTransport {
    fn authenticate(&self, credentials: &Credentials) -> impl Future<Output = Result<Value, AuthError>>;
}

/// `POST {api_url}/users/authenticate` over the browser fetch API.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(config: &AuthConfig) -> Self {
        Self { endpoint: config.authenticate_url() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16) -> AuthError {
    AuthError::Status { status }
}

impl AuthTransport for HttpTransport {
    async fn authenticate(&self, credentials: &Credentials) -> Result<Value, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint)
                .json(credentials)
                .map_err(|e| AuthError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| AuthError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(resp.status()));
            }
            resp.json::<Value>().await.map_err(|e| AuthError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(AuthError::Unavailable)
        }
    }
}
