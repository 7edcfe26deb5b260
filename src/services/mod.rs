//! Application services.
//!
//! SYSTEM CONTEXT
//! ==============
//! `authentication` owns the session lifecycle; UI code calls it and observes
//! its session slot.

pub mod authentication;
