//! Wire types for the authentication endpoint.
//!
//! DESIGN
//! ======
//! `User` keeps every field the backend returns (`extra`), so the persisted
//! record and the in-memory value serialize back to the original body.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account role reported by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Client,
    /// Any role this client has no special handling for.
    Other(String),
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Admin" => Self::Admin,
            "Client" => Self::Client,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => "Admin".to_owned(),
            Role::Client => "Client".to_owned(),
            Role::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("Admin"),
            Self::Client => f.write_str("Client"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// The authenticated user as returned by `POST /users/authenticate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Bearer token, kept as sent; any JSON type the backend uses is accepted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<Value>,
    pub role: Role,
    #[serde(rename = "firstName")]
    pub first_name: String,
    /// Remaining backend fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Whether this user carries a truthy token.
    pub fn has_token(&self) -> bool {
        self.token.as_ref().is_some_and(is_truthy)
    }
}

/// Login request payload.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self { email: email.to_owned(), password: password.to_owned() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// JavaScript truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Whether an authentication response carries a usable token.
pub fn has_token(body: &Value) -> bool {
    body.get("token").is_some_and(is_truthy)
}
