use super::*;

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set("staff_token", "tok-1");
    assert_eq!(storage.get("staff_token").as_deref(), Some("tok-1"));
}

#[test]
fn memory_storage_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert!(storage.get("admin_token").is_none());
}

#[test]
fn memory_storage_remove_is_silent_on_missing_key() {
    let storage = MemoryStorage::new();
    storage.remove("nothing_here");
    assert!(storage.keys().is_empty());
}

#[test]
fn memory_storage_overwrites_existing_value() {
    let storage = MemoryStorage::new();
    storage.set("staff_token", "old");
    storage.set("staff_token", "new");
    assert_eq!(storage.get("staff_token").as_deref(), Some("new"));
    assert_eq!(storage.keys().len(), 1);
}

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set("admin_token", "tok-2");
    assert_eq!(other.get("admin_token").as_deref(), Some("tok-2"));
}

#[test]
fn memory_storage_lists_all_keys() {
    let storage = MemoryStorage::new();
    storage.set("admin_token", "a");
    storage.set("staff_token", "b");
    storage.set("theme", "dark");

    let keys = storage.keys();
    assert_eq!(keys, vec!["admin_token", "staff_token", "theme"]);
}
