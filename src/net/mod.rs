//! Networking for the credential exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST call and `types` defines the wire schema.

pub mod api;
pub mod types;
