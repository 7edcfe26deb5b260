//! Browser/environment helpers behind the session service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each module isolates one browser concern (storage, cookies, timers, the
//! Leptos bridge) so the service logic stays testable off the browser.

pub mod auth;
pub mod clock;
pub mod cookies;
pub mod schedule;
pub mod storage;
