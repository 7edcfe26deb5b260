//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the current user; `toast` holds notifications waiting to
//! be rendered.

pub mod session;
pub mod toast;
