//! Login/logout and ownership of the current-user session slot.
//!
//! ARCHITECTURE
//! ============
//! The service is the only writer of the `SessionSlot`. The persisted
//! `currentUser` record is written and cleared in the same transitions that
//! publish to the slot, so a reload restores exactly what was last published.
//!
//! TRADE-OFFS
//! ==========
//! The welcome toast is a fire-and-forget timer. It is never cancelled, so it
//! can fire after a quick logout or a page teardown; that only shows a stale
//! toast.

#[cfg(test)]
#[path = "authentication_test.rs"]
mod authentication_test;

use std::rc::Rc;

use chrono::Utc;
use futures::Stream;
use serde_json::Value;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::net::api::{AuthTransport, HttpTransport};
use crate::net::types::{Credentials, User, has_token};
use crate::state::session::SessionSlot;
use crate::state::toast::{Notifier, Toast, ToastQueue};
use crate::util::clock::format_logout_time;
use crate::util::cookies::{CookieJar, DocumentCookies, expire_all_cookies};
use crate::util::schedule::{Scheduler, TimerScheduler};
use crate::util::storage::{BrowserStorage, SessionStorage, load_user, save_json};

pub struct AuthenticationService<T> {
    config: AuthConfig,
    transport: T,
    storage: Rc<dyn SessionStorage>,
    cookies: Rc<dyn CookieJar>,
    notifier: Rc<dyn Notifier>,
    scheduler: Rc<dyn Scheduler>,
    session: SessionSlot,
}

impl AuthenticationService<HttpTransport> {
    /// Service wired to `localStorage`, `document.cookie`, browser timers and
    /// the given toast queue.
    pub fn browser(config: AuthConfig, toasts: ToastQueue) -> Self {
        let transport = HttpTransport::new(&config);
        Self::new(
            config,
            transport,
            Rc::new(BrowserStorage),
            Rc::new(DocumentCookies),
            Rc::new(toasts),
            Rc::new(TimerScheduler),
        )
    }
}

impl<T: AuthTransport> AuthenticationService<T> {
    /// Build the service and seed the session slot from the persisted record.
    pub fn new(
        config: AuthConfig,
        transport: T,
        storage: Rc<dyn SessionStorage>,
        cookies: Rc<dyn CookieJar>,
        notifier: Rc<dyn Notifier>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        let restored = load_user(storage.as_ref(), &config.storage_key);
        match &restored {
            Some(user) => log::debug!("restored session for {} ({})", user.first_name, user.role),
            None => log::debug!("no persisted session"),
        }
        Self {
            config,
            transport,
            storage,
            cookies,
            notifier,
            scheduler,
            session: SessionSlot::new(restored),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Read-only handle on the session slot.
    pub fn session(&self) -> &SessionSlot {
        &self.session
    }

    pub fn current_user_value(&self) -> Option<User> {
        self.session.value()
    }

    /// Current user followed by every later login/logout.
    pub fn current_user(&self) -> impl Stream<Item = Option<User>> + Unpin + use<T> {
        self.session.observe()
    }

    pub fn is_admin(&self) -> bool {
        self.session.is_admin()
    }

    pub fn is_client(&self) -> bool {
        self.session.is_client()
    }

    /// Exchange credentials for a session.
    ///
    /// Returns the raw response body. A body without a truthy `token` leaves
    /// the session untouched and is still returned as `Ok`.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures from the transport, unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, AuthError> {
        self.notifier.notify(Toast::privacy_notice());

        let credentials = Credentials::new(email, password);
        let body = self.transport.authenticate(&credentials).await?;

        if !has_token(&body) {
            log::info!("login for {email} returned no token");
            return Ok(body);
        }
        let user = match serde_json::from_value::<User>(body.clone()) {
            Ok(user) => user,
            Err(e) => {
                log::warn!("login for {email} returned a token but an unreadable user: {e}");
                return Ok(body);
            }
        };

        save_json(self.storage.as_ref(), &self.config.storage_key, &body);
        self.schedule_welcome(&user);
        log::info!("logged in {} as {}", user.first_name, user.role);
        self.session.publish(Some(user));
        Ok(body)
    }

    fn schedule_welcome(&self, user: &User) {
        let notifier = Rc::clone(&self.notifier);
        let toast = Toast::welcome(&user.role.to_string(), &user.first_name);
        self.scheduler.schedule(self.config.welcome_delay, Box::new(move || notifier.notify(toast)));
    }

    /// End the session: goodbye toast, wipe storage and cookies, publish none.
    pub fn logout(&self) {
        let time = format_logout_time(Utc::now());
        self.notifier.notify(Toast::goodbye(&time));

        self.storage.clear();
        let expired = expire_all_cookies(self.cookies.as_ref());
        log::info!("logged out at {time}; expired {expired} cookies");

        self.session.publish(None);
    }
}
