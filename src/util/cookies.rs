//! Script-visible cookie access and logout expiry.
//!
//! `DocumentCookies` reads and writes `document.cookie` (hydrate only).
//! `MemoryCookies` emulates the same string interface: writing a cookie
//! whose expiry is already past removes it.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use chrono::{DateTime, Utc};

pub const EXPIRED_AT: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

pub trait CookieJar {
    /// The `name=value; name2=value2` string visible to scripts.
    fn cookie_string(&self) -> String;
    /// Write one cookie using `document.cookie` assignment syntax.
    fn set_cookie(&self, raw: &str);
}

/// `document.cookie`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

impl CookieJar for DocumentCookies {
    fn cookie_string(&self) -> String {
        #[cfg(feature = "hydrate")]
        {
            html_document().and_then(|doc| doc.cookie().ok()).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            String::new()
        }
    }

    fn set_cookie(&self, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(doc) = html_document() else {
                return;
            };
            if doc.set_cookie(raw).is_err() {
                log::warn!("document rejected cookie write");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
        }
    }
}

/// In-memory cookie jar. Clones share the same cookies.
#[derive(Clone, Debug, Default)]
pub struct MemoryCookies {
    cookies: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryCookies {
    fn cookie_string(&self) -> String {
        self.cookies
            .borrow()
            .iter()
            .map(|(name, value)| if name.is_empty() { value.clone() } else { format!("{name}={value}") })
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&self, raw: &str) {
        let mut parts = raw.split(';');
        let Some(pair) = parts.next() else {
            return;
        };
        let (name, value) = pair.split_once('=').unwrap_or(("", pair));
        let name = name.trim();
        let expired = parts.any(|attr| attribute_expires(attr.trim()));
        let mut cookies = self.cookies.borrow_mut();
        if expired {
            cookies.remove(name);
        } else {
            cookies.insert(name.to_owned(), value.trim().to_owned());
        }
    }
}

fn attribute_expires(attr: &str) -> bool {
    let Some((key, value)) = attr.split_once('=') else {
        return false;
    };
    if key.eq_ignore_ascii_case("expires") {
        return DateTime::parse_from_rfc2822(value.trim()).is_ok_and(|at| at.with_timezone(&Utc) <= Utc::now());
    }
    if key.eq_ignore_ascii_case("max-age") {
        return value.trim().parse::<i64>().is_ok_and(|secs| secs <= 0);
    }
    false
}

/// Cookie names in a `document.cookie` string, in order.
pub fn cookie_names(cookie_string: &str) -> Vec<String> {
    cookie_string
        .split(';')
        .map(|cookie| cookie.split_once('=').map_or(cookie, |(name, _)| name).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Assignment string that expires `name` at the root path.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=;expires={EXPIRED_AT};path=/;")
}

/// Expire every cookie visible in `jar`. Returns how many were expired.
pub fn expire_all_cookies(jar: &dyn CookieJar) -> usize {
    let names = cookie_names(&jar.cookie_string());
    for name in &names {
        jar.set_cookie(&expired_cookie(name));
    }
    names.len()
}
