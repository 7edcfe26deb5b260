use super::*;
use crate::net::types::{Role, User};
use serde_json::json;

#[test]
fn memory_storage_set_get_and_clear() {
    let storage = MemoryStorage::new();
    let shared = storage.clone();
    storage.set_item("currentUser", "{}");
    storage.set_item("theme", "dark");

    assert_eq!(shared.get_item("currentUser").as_deref(), Some("{}"));
    assert_eq!(shared.len(), 2);

    shared.clear();
    assert!(storage.is_empty());
    assert!(storage.get_item("theme").is_none());
}

#[test]
fn load_json_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert!(load_json::<User>(&storage, "currentUser").is_none());
}

#[test]
fn load_user_missing_or_corrupt_is_none() {
    let storage = MemoryStorage::new();
    assert!(load_user(&storage, "currentUser").is_none());
    storage.set_item("currentUser", r#"{"token":"t1"}"#);
    assert!(load_user(&storage, "currentUser").is_none());
}

#[test]
fn load_json_corrupt_record_is_none() {
    let storage = MemoryStorage::new();
    storage.set_item("currentUser", "{not json");
    assert!(load_json::<User>(&storage, "currentUser").is_none());
}

#[test]
fn load_json_null_record_is_none() {
    let storage = MemoryStorage::new();
    storage.set_item("currentUser", "null");
    assert!(load_json::<Option<User>>(&storage, "currentUser").flatten().is_none());
}

#[test]
fn save_json_then_load_json_user() {
    let storage = MemoryStorage::new();
    let body = json!({ "token": "t1", "role": "Client", "firstName": "Bo" });
    save_json(&storage, "currentUser", &body);

    assert_eq!(storage.get_item("currentUser").unwrap(), serde_json::to_string(&body).unwrap());
    let user = load_user(&storage, "currentUser").unwrap();
    assert_eq!(user.role, Role::Client);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_noop_off_browser() {
    let storage = BrowserStorage;
    storage.set_item("currentUser", "{}");
    assert!(storage.get_item("currentUser").is_none());
    storage.clear();
}
