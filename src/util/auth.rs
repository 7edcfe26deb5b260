//! Leptos bridge for the session slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the current user from a signal rather than the raw
//! stream, so user-aware views re-render on login and logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::session::SessionSlot;

/// Signal mirroring `slot`.
///
/// Seeded with the current value; in the browser a local task keeps it in
/// step with every later publish.
pub fn session_signal(slot: &SessionSlot) -> RwSignal<Option<User>> {
    let signal = RwSignal::new(slot.value());
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;

        let mut updates = slot.observe();
        leptos::task::spawn_local(async move {
            while let Some(user) = updates.next().await {
                signal.set(user);
            }
        });
    }
    signal
}
