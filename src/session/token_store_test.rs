use std::sync::Arc;

use super::*;
use crate::session::storage::{MemoryStorage, SessionStorage};

fn profile(username: &str) -> Profile {
    Profile {
        id: 1,
        username: username.to_owned(),
        name: "Test User".to_owned(),
        email: format!("{username}@example.test"),
        role: "staff".to_owned(),
        permissions: vec!["reports.view".to_owned()],
        department: None,
        position: None,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
        updated_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

fn store_with_backing() -> (TokenStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (TokenStore::new(Arc::new(storage.clone())), storage)
}

#[test]
fn store_writes_the_documented_slot_layout() {
    let (store, storage) = store_with_backing();
    store.store(UserType::Admin, "tok-a", &profile("head"));

    assert_eq!(storage.get("admin_token").as_deref(), Some("tok-a"));
    let raw_user = storage.get("admin_user").expect("admin_user slot");
    let decoded: Profile = serde_json::from_str(&raw_user).expect("profile json");
    assert_eq!(decoded.username, "head");
    assert!(storage.get("staff_token").is_none());
}

#[test]
fn read_profile_round_trips() {
    let (store, _) = store_with_backing();
    store.store(UserType::Staff, "tok-s", &profile("ratna"));

    let read = store.read_profile(UserType::Staff).expect("profile");
    assert_eq!(read, profile("ratna"));
}

#[test]
fn read_profile_with_corrupt_slot_is_none() {
    let (store, storage) = store_with_backing();
    storage.set("staff_user", "{not json");
    assert!(store.read_profile(UserType::Staff).is_none());
}

#[test]
fn clear_is_idempotent() {
    let (store, storage) = store_with_backing();
    store.store(UserType::Staff, "tok-s", &profile("ratna"));

    store.clear(UserType::Staff);
    store.clear(UserType::Staff);

    assert!(storage.get("staff_token").is_none());
    assert!(storage.get("staff_user").is_none());
    assert!(!store.is_authenticated(UserType::Staff));
}

#[test]
fn slots_are_independent() {
    let (store, _) = store_with_backing();
    store.store(UserType::Admin, "tok-a", &profile("head"));
    store.store(UserType::Staff, "tok-s", &profile("ratna"));

    store.clear(UserType::Admin);

    assert!(!store.is_authenticated(UserType::Admin));
    assert!(store.is_authenticated(UserType::Staff));
    assert_eq!(store.read(UserType::Staff).as_deref(), Some("tok-s"));
}

#[test]
fn storing_one_slot_leaves_the_other_untouched() {
    let (store, _) = store_with_backing();
    store.store(UserType::Staff, "tok-s", &profile("ratna"));
    store.store(UserType::Admin, "tok-a", &profile("head"));

    assert_eq!(store.read(UserType::Staff).as_deref(), Some("tok-s"));
    assert_eq!(
        store.read_profile(UserType::Staff).expect("profile").username,
        "ratna"
    );
}

#[test]
fn current_user_type_prefers_admin() {
    let (store, _) = store_with_backing();
    store.store(UserType::Admin, "tok-a", &profile("head"));
    store.store(UserType::Staff, "tok-s", &profile("ratna"));
    assert_eq!(store.current_user_type(), UserType::Admin);
}

#[test]
fn current_user_type_falls_back_to_staff_token() {
    let (store, _) = store_with_backing();
    store.store(UserType::Staff, "tok-s", &profile("ratna"));
    assert_eq!(store.current_user_type(), UserType::Staff);
}

#[test]
fn current_user_type_defaults_to_staff_when_empty() {
    let (store, _) = store_with_backing();
    assert_eq!(store.current_user_type(), UserType::Staff);
}

#[test]
fn is_authenticated_needs_both_token_and_profile() {
    let (store, storage) = store_with_backing();

    storage.set("admin_token", "tok-a");
    assert!(!store.is_authenticated(UserType::Admin));

    storage.set("admin_user", "{}");
    assert!(store.is_authenticated(UserType::Admin));

    storage.set("admin_token", "");
    assert!(!store.is_authenticated(UserType::Admin));
}

#[test]
fn force_clear_all_sweeps_auth_like_keys_only() {
    let (store, storage) = store_with_backing();
    store.store(UserType::Admin, "tok-a", &profile("head"));
    store.store(UserType::Staff, "tok-s", &profile("ratna"));
    storage.set("legacy_user_cache", "stale");
    storage.set("theme", "dark");

    store.force_clear_all();

    assert!(storage.get("admin_token").is_none());
    assert!(storage.get("admin_user").is_none());
    assert!(storage.get("staff_token").is_none());
    assert!(storage.get("staff_user").is_none());
    assert!(storage.get("legacy_user_cache").is_none());
    assert_eq!(storage.get("theme").as_deref(), Some("dark"));
}
