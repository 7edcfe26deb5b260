//! # methasoft-session
//!
//! Browser-side session holder for the MethaSoft web client.
//!
//! The crate posts credentials to the authentication endpoint, persists the
//! returned user record in `localStorage`, exposes the current user as an
//! observable value, and clears session state on logout. Browser glue
//! (`gloo-net`, `web-sys`, `gloo-timers`) is compiled only with the `hydrate`
//! feature; every seam also has an in-memory implementation so the same
//! service runs on the server and in tests.

pub mod config;
pub mod error;
pub mod net;
pub mod services;
pub mod state;
pub mod util;

pub use config::AuthConfig;
pub use error::AuthError;
pub use net::types::{Credentials, Role, User};
pub use services::authentication::AuthenticationService;

/// Install the console logger and panic hook for the browser bundle.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
