//! Unit tests for snapshot persistence and hydration.

use homeroom::slices::{Conversation, Message, Resource, Role, User};
use homeroom::storage::{KeyValueStorage, CURRENT_VERSION};
use homeroom::{
    derive_theme, AppState, AppStore, ColorScheme, HydrationOutcome, Language, MemoryStorage,
};
use serde_json::{json, Value};

const KEY: &str = "homeroom-storage";

fn populated_store(storage: &MemoryStorage) -> AppStore {
    let store = AppStore::new(storage.clone(), KEY);
    store.hydrate(|_| {});

    store.login(User::new("p1", "Dana", Role::Parent));
    store.set_large_font(true);
    store.set_voice_narration(true);
    store.set_language(Language::Portuguese);
    store.set_high_contrast(true);
    store.update(|s| s.settings.set_sms_notifications(true));
    store.add_resource(Resource::new("r1", "Calendar", "events"));
    store.add_conversation(Conversation::new("c1", "Coach"));
    store.add_message("c1", Message::draft("c1", "p1", "Practice at 4?"));
    store
}

fn reopen(storage: &MemoryStorage) -> (AppStore, HydrationOutcome) {
    let store = AppStore::new(storage.clone(), KEY);
    let mut result = None;
    store.hydrate(|outcome| result = Some(outcome.clone()));
    (store, result.expect("hydrate callback should run"))
}

fn stored_json(storage: &MemoryStorage) -> Value {
    let raw = storage.get_item(KEY).unwrap().expect("snapshot should exist");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_round_trip_restores_raw_fields() {
    let storage = MemoryStorage::new();
    let original = populated_store(&storage).state();

    let (restored, outcome) = reopen(&storage);
    assert!(matches!(outcome, HydrationOutcome::Restored { saved_at: Some(_) }));
    assert_eq!(restored.state(), original);
}

#[test]
fn test_snapshot_excludes_theme_tokens() {
    let storage = MemoryStorage::new();
    populated_store(&storage);

    let json = stored_json(&storage);
    assert_eq!(json["version"], CURRENT_VERSION);
    assert_eq!(
        json["state"]["theme"],
        json!({ "color_scheme": "light", "high_contrast": true })
    );
}

#[test]
fn test_reloaded_theme_follows_restored_inputs() {
    let storage = MemoryStorage::new();
    populated_store(&storage);

    // Flip the scheme in the stored snapshot behind the store's back.
    let mut json = stored_json(&storage);
    json["state"]["theme"]["color_scheme"] = json!("dark");
    storage.set_item(KEY, &json.to_string()).unwrap();

    let (restored, _) = reopen(&storage);
    assert_eq!(restored.read(|s| s.theme.color_scheme()), ColorScheme::Dark);
    assert_eq!(restored.theme_tokens(), derive_theme(ColorScheme::Dark, true));
}

#[test]
fn test_missing_snapshot_keeps_defaults() {
    let (store, outcome) = reopen(&MemoryStorage::new());
    assert_eq!(outcome, HydrationOutcome::Empty);
    assert_eq!(store.state(), AppState::default());
}

#[test]
fn test_corrupt_snapshot_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    storage.set_item(KEY, "{ not json").unwrap();

    let (store, outcome) = reopen(&storage);
    assert!(matches!(outcome, HydrationOutcome::Discarded { .. }));
    assert_eq!(store.state(), AppState::default());
}

#[test]
fn test_unsupported_version_falls_back_to_defaults() {
    let storage = MemoryStorage::new();
    let future = json!({ "version": CURRENT_VERSION + 1, "state": { "session": { "is_logged_in": true } } });
    storage.set_item(KEY, &future.to_string()).unwrap();

    let (store, outcome) = reopen(&storage);
    assert!(matches!(outcome, HydrationOutcome::Discarded { .. }));
    assert!(!store.read(|s| s.session.is_logged_in()));
}

#[test]
fn test_bad_slice_value_discards_snapshot() {
    let storage = MemoryStorage::new();
    let bad = json!({ "version": CURRENT_VERSION, "state": { "preferences": { "language": "xx" } } });
    storage.set_item(KEY, &bad.to_string()).unwrap();

    let (store, outcome) = reopen(&storage);
    assert!(matches!(outcome, HydrationOutcome::Discarded { .. }));
    assert_eq!(store.state(), AppState::default());
}

#[test]
fn test_legacy_snapshot_is_migrated_and_rewritten() {
    let storage = MemoryStorage::new();
    let legacy = json!({
        "state": {
            "isLoggedIn": true,
            "role": "teacher",
            "user": { "id": "t1", "name": "Lee", "role": "teacher", "email": "lee@school.example" },
            "isLargeFont": true,
            "language": "fr",
            "colorScheme": "dark",
            "isHighContrast": false,
            "theme": { "background": "#000000", "text": "#FFFFFF" },
            "resources": [{ "id": "r9", "title": "Handbook", "category": "policy" }]
        },
        "version": 0
    });
    storage.set_item(KEY, &legacy.to_string()).unwrap();

    let (store, outcome) = reopen(&storage);
    assert_eq!(outcome, HydrationOutcome::Migrated { from_version: 0 });

    store.read(|s| {
        assert!(s.session.is_logged_in());
        assert_eq!(s.session.role(), Some(Role::Teacher));
        assert_eq!(
            s.session.user().and_then(|u| u.email.as_deref()),
            Some("lee@school.example")
        );
        assert!(s.preferences.large_font());
        assert_eq!(s.preferences.language(), Language::French);
        assert_eq!(*s.theme.tokens(), derive_theme(ColorScheme::Dark, false));
        assert_eq!(s.resources.resource_by_id("r9").unwrap().title, "Handbook");
    });

    assert_eq!(stored_json(&storage)["version"], CURRENT_VERSION);
}

#[test]
fn test_write_failure_keeps_memory_state() {
    let storage = MemoryStorage::new();
    let store = populated_store(&storage);
    let persisted = stored_json(&storage);

    storage.set_fail_writes(true);
    store.set_language(Language::Chinese);

    assert_eq!(store.read(|s| s.preferences.language()), Language::Chinese);
    assert_eq!(stored_json(&storage), persisted);
    assert!(store.flush().is_err());

    storage.set_fail_writes(false);
    store.flush().unwrap();
    let (reopened, _) = reopen(&storage);
    assert_eq!(reopened.read(|s| s.preferences.language()), Language::Chinese);
}

#[test]
fn test_every_setter_persists() {
    let storage = MemoryStorage::new();
    let store = AppStore::new(storage.clone(), KEY);
    store.hydrate(|_| {});

    store.toggle_high_contrast();
    assert_eq!(stored_json(&storage)["state"]["theme"]["high_contrast"], true);

    store.logout();
    assert_eq!(stored_json(&storage)["state"]["session"]["is_logged_in"], false);
}
