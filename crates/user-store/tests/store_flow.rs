//! Store lifecycle tests: seeding, snapshots and refresh against a canned remote.

use user_store::{
    DraftForm, EditState, KeyValueStorage, MemoryStorage, Seed, StaticRemote, StoreError,
    UserRecord, UserStore,
};

fn ann() -> UserRecord {
    UserRecord::new(1, "Ann", "ann@x.com")
}

fn bo() -> UserRecord {
    UserRecord::new(5, "Bo", "bo@x.com")
}

fn stored_users(storage: &MemoryStorage) -> Vec<UserRecord> {
    let raw = storage.get("users").unwrap().expect("snapshot written");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn test_initialize_seeds_from_remote_when_storage_empty() {
    let remote = StaticRemote::ok(vec![ann()]);
    let mut store = UserStore::new(MemoryStorage::new());

    let seed = store.initialize(&remote).await.unwrap();

    assert_eq!(seed, Seed::Remote(1));
    assert_eq!(store.users(), &[ann()]);
    assert_eq!(stored_users(store.storage()), vec![ann()]);
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn test_initialize_prefers_local_snapshot() {
    let remote = StaticRemote::ok(vec![ann()]);
    let storage = MemoryStorage::with_entry("users", r#"[{"id":5,"name":"Bo","email":"bo@x.com"}]"#);
    let mut store = UserStore::new(storage);

    let seed = store.initialize(&remote).await.unwrap();

    assert_eq!(seed, Seed::Local(1));
    assert_eq!(store.users(), &[bo()]);
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_initialize_with_empty_snapshot_seeds_from_remote() {
    let remote = StaticRemote::ok(vec![ann()]);
    let mut store = UserStore::new(MemoryStorage::with_entry("users", ""));

    let seed = store.initialize(&remote).await.unwrap();

    assert_eq!(seed, Seed::Remote(1));
    assert_eq!(stored_users(store.storage()), vec![ann()]);
    assert_eq!(remote.calls(), 1);
}

#[tokio::test]
async fn test_initialize_with_failing_remote_leaves_store_empty() {
    let remote = StaticRemote::failing("connection refused");
    let mut store = UserStore::new(MemoryStorage::new());

    let seed = store.initialize(&remote).await.unwrap();

    assert_eq!(seed, Seed::Empty);
    assert!(store.is_empty());
    assert_eq!(store.storage().get("users").unwrap(), None);
}

#[tokio::test]
async fn test_initialize_with_malformed_snapshot_errors() {
    let remote = StaticRemote::ok(vec![ann()]);
    let mut store = UserStore::new(MemoryStorage::with_entry("users", "[{\"id\":"));

    let err = store.initialize(&remote).await.unwrap_err();

    assert!(matches!(err, StoreError::MalformedSnapshot { .. }));
    assert!(store.is_empty());
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_failed_load_keeps_existing_list() {
    let mut store = UserStore::new(MemoryStorage::new());
    store.add(DraftForm::new("Cy", "cy@x.com")).unwrap();
    let before = store.users().to_vec();

    let applied = store.load(&StaticRemote::failing("503")).await.unwrap();

    assert!(!applied);
    assert_eq!(store.users(), before.as_slice());
}

#[tokio::test]
async fn test_snapshot_survives_reload() {
    let mut store = UserStore::new(MemoryStorage::new());
    store.initialize(&StaticRemote::ok(vec![ann()])).await.unwrap();
    store.add(DraftForm::new("Cy", "cy@x.com")).unwrap();
    store.begin_edit(&ann());
    store.set_draft_email("ann@y.com");
    store.submit().unwrap();
    let expected = store.users().to_vec();

    let remote = StaticRemote::ok(vec![bo()]);
    let mut reloaded = UserStore::new(store.into_storage());
    let seed = reloaded.initialize(&remote).await.unwrap();

    assert_eq!(seed, Seed::Local(2));
    assert_eq!(reloaded.users(), expected.as_slice());
    assert_eq!(reloaded.find(1).unwrap().email, "ann@y.com");
    assert_eq!(remote.calls(), 0);
}

#[tokio::test]
async fn test_refresh_overwrites_local_snapshot() {
    let storage = MemoryStorage::with_entry("users", r#"[{"id":5,"name":"Bo","email":"bo@x.com"}]"#);
    let mut store = UserStore::new(storage);
    store.initialize(&StaticRemote::ok(vec![])).await.unwrap();
    store.begin_edit(&bo());

    let applied = store.refresh(&StaticRemote::ok(vec![ann()])).await.unwrap();

    assert!(applied);
    assert_eq!(store.users(), &[ann()]);
    assert_eq!(stored_users(store.storage()), vec![ann()]);
    assert_eq!(store.edit_state(), EditState::Idle);
}

#[tokio::test]
async fn test_refresh_keeps_draft_for_surviving_user() {
    let mut store = UserStore::new(MemoryStorage::new());
    store.initialize(&StaticRemote::ok(vec![ann(), bo()])).await.unwrap();
    store.begin_edit(&ann());

    store.refresh(&StaticRemote::ok(vec![ann()])).await.unwrap();

    assert_eq!(store.edit_state(), EditState::Editing(1));
}
