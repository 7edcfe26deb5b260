//! Error type for the login path.
//!
//! Storage, cookie and notification calls never fail from the caller's
//! point of view, so only the network exchange produces an `AuthError`.

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("authentication request failed: {0}")]
    Transport(String),
    #[error("authentication request failed with status {status}")]
    Status { status: u16 },
    #[error("invalid authentication response: {0}")]
    Decode(String),
    #[error("authentication not available on server")]
    Unavailable,
}
