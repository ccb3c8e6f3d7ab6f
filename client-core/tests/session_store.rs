mod common;

use client_core::storage::{FAVORITES_KEY, TOKEN_KEY, USER_KEY};
use client_core::{KeyValueStorage, MemoryStorage, SessionFlags, SessionStore, StorageError};

#[test]
fn test_hydrate_empty_storage_is_logged_out() {
    let (store, _) = common::empty_store();
    assert!(!store.is_logged_in());
    assert!(!store.is_admin());
    assert_eq!(store.token(), "");
    assert!(store.user().is_none());
    assert!(store.favorites().is_empty());
    assert_eq!(store.authorization_header(), None);
}

#[test]
fn test_hydrate_restores_persisted_session() -> anyhow::Result<()> {
    let user = serde_json::to_string(&common::user(true))?;
    let storage = MemoryStorage::with_entries([
        (TOKEN_KEY, "abc".to_owned()),
        (USER_KEY, user),
        (FAVORITES_KEY, r#"["m1","m2","m1"]"#.to_owned()),
    ]);

    let store = SessionStore::hydrate(storage);

    assert!(store.is_logged_in());
    assert!(store.is_admin());
    assert_eq!(store.user().map(|user| user.username.as_str()), Some("admin"));
    assert_eq!(store.favorites(), ["m1", "m2"]);
    assert_eq!(store.authorization_header().as_deref(), Some("Bearer abc"));
    Ok(())
}

#[test]
fn test_login_with_profile_from_me_endpoint() -> anyhow::Result<()> {
    let profile: shared::User =
        serde_json::from_str(r#"{"username":"alice","email":"a@x.io","is_admin":false}"#)?;
    let (mut store, storage) = common::empty_store();

    store.login("abc", profile.clone());

    assert!(store.is_logged_in());
    assert!(!store.is_admin());
    let restored = SessionStore::hydrate(storage);
    assert_eq!(restored.user(), Some(&profile));
    Ok(())
}

#[test]
fn test_hydrate_malformed_entries_default() {
    let storage = MemoryStorage::with_entries([
        (TOKEN_KEY, "abc"),
        (USER_KEY, "{not json"),
        (FAVORITES_KEY, r#"{"m1": true}"#),
    ]);

    let store = SessionStore::hydrate(storage);

    assert!(store.is_logged_in());
    assert!(store.user().is_none());
    assert!(!store.is_admin());
    assert!(store.favorites().is_empty());
}

#[test]
fn test_hydrate_null_user() {
    let storage = MemoryStorage::with_entries([(USER_KEY, "null"), (FAVORITES_KEY, "[]")]);
    let store = SessionStore::hydrate(storage);
    assert!(store.user().is_none());
    assert!(store.favorites().is_empty());
}

struct BrokenStorage;

impl KeyValueStorage for BrokenStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read {
            key: key.to_owned(),
            reason: "SecurityError".to_owned(),
        })
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_owned(),
            reason: "QuotaExceededError".to_owned(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("no storage".to_owned()))
    }
}

#[test]
fn test_failing_storage_never_breaks_the_session() {
    let mut store = SessionStore::hydrate(BrokenStorage);
    assert!(!store.is_logged_in());

    store.login("abc", common::user(false));
    assert!(store.add_to_favorites("m1"));
    assert!(store.is_logged_in());
    assert_eq!(store.favorites(), ["m1"]);

    store.logout();
    assert!(!store.is_logged_in());
    assert!(store.favorites().is_empty());
}

#[test]
fn test_set_token_and_user_are_persisted() -> anyhow::Result<()> {
    let (mut store, storage) = common::empty_store();

    store.set_token("abc");
    assert_eq!(storage.get(TOKEN_KEY)?.as_deref(), Some("abc"));
    assert!(store.is_logged_in());
    assert!(!store.is_admin());

    store.set_user(common::user(true));
    let persisted = storage.get(USER_KEY)?.unwrap_or_default();
    let persisted: shared::User = serde_json::from_str(&persisted)?;
    assert_eq!(persisted, common::user(true));
    assert!(store.is_admin());

    let reloaded = SessionStore::hydrate(storage.clone());
    assert_eq!(reloaded, store);
    Ok(())
}

#[test]
fn test_empty_token_is_logged_out() {
    let (mut store, _) = common::logged_in_store(false);
    store.set_token("");
    assert!(!store.is_logged_in());
}

#[test]
fn test_favorites_scenario() -> anyhow::Result<()> {
    let storage = MemoryStorage::with_entries([(FAVORITES_KEY, r#"["m1"]"#)]);
    let mut store = SessionStore::hydrate(storage.clone());
    store.login("abc", common::user(false));

    assert!(!store.add_to_favorites("m1"));
    assert_eq!(store.favorites(), ["m1"]);

    assert!(store.add_to_favorites("m2"));
    assert_eq!(store.favorites(), ["m1", "m2"]);

    assert!(store.remove_from_favorites("m1"));
    assert_eq!(store.favorites(), ["m2"]);
    assert_eq!(storage.get(FAVORITES_KEY)?.as_deref(), Some(r#"["m2"]"#));
    Ok(())
}

#[test]
fn test_noop_favorite_changes_do_not_touch_storage() -> anyhow::Result<()> {
    let (mut store, storage) = common::logged_in_store(false);
    store.add_to_favorites("m1");

    // A value no serializer would produce: any rewrite would replace it.
    storage.set(FAVORITES_KEY, r#"[ "m1" ]"#)?;

    assert!(!store.add_to_favorites("m1"));
    assert!(!store.remove_from_favorites("m9"));
    store.replace_favorites(["m1"]);

    assert_eq!(storage.get(FAVORITES_KEY)?.as_deref(), Some(r#"[ "m1" ]"#));
    Ok(())
}

#[test]
fn test_favorites_sequence_has_no_duplicates() {
    let (mut store, _) = common::logged_in_store(false);
    let operations = [
        (true, "a"),
        (true, "b"),
        (true, "a"),
        (false, "c"),
        (true, "c"),
        (false, "a"),
        (false, "a"),
        (true, "b"),
        (true, "a"),
    ];
    for (add, movie_id) in operations {
        if add {
            store.add_to_favorites(movie_id);
        } else {
            store.remove_from_favorites(movie_id);
        }
    }
    assert_eq!(store.favorites(), ["b", "c", "a"]);
}

#[test]
fn test_toggle_and_replace_favorites() {
    let (mut store, storage) = common::logged_in_store(false);

    assert!(store.toggle_favorite("m1"));
    assert!(store.is_favorite("m1"));
    assert!(!store.toggle_favorite("m1"));
    assert!(!store.is_favorite("m1"));

    store.replace_favorites(vec!["m3", "m4", "m3"]);
    assert_eq!(store.favorites(), ["m3", "m4"]);
    assert_eq!(SessionStore::hydrate(storage).favorites(), ["m3", "m4"]);
}

#[test]
fn test_revert_favorite_skips_when_toggled_again() {
    let (mut store, storage) = common::logged_in_store(false);

    // Add fails on the backend, but the user already clicked again to remove.
    assert!(store.add_to_favorites("m1"));
    assert!(store.remove_from_favorites("m1"));
    assert!(!store.revert_favorite("m1", true));
    assert!(!store.is_favorite("m1"));

    // Remove fails while nothing else touched the movie: restored.
    store.add_to_favorites("m2");
    store.remove_from_favorites("m2");
    assert!(store.revert_favorite("m2", false));
    assert!(store.is_favorite("m2"));
    assert_eq!(SessionStore::hydrate(storage).favorites(), ["m2"]);
}

#[test]
fn test_logout_clears_memory_and_storage() -> anyhow::Result<()> {
    let (mut store, storage) = common::logged_in_store(true);
    store.add_to_favorites("m1");
    assert_eq!(storage.len(), 3);

    store.logout();

    assert!(!store.is_logged_in());
    assert!(!store.is_admin());
    assert!(store.user().is_none());
    assert!(store.favorites().is_empty());
    for key in [TOKEN_KEY, USER_KEY, FAVORITES_KEY] {
        assert!(!storage.contains_key(key), "{key} still persisted");
    }

    // Logging out twice is harmless.
    store.logout();
    assert!(storage.is_empty());
    Ok(())
}
