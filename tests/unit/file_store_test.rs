//! Unit tests for the store over on-disk storage.

use homeroom::storage::config::{load_config_from, save_config_to};
use homeroom::{AppStore, ColorScheme, FileStorage, HomeroomConfig, Language};

#[test]
fn test_state_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    let mut config = HomeroomConfig::default();
    config.storage.dir = Some(dir.path().join("state"));
    let config_path = dir.path().join("config.toml");
    save_config_to(&config, &config_path).unwrap();

    let config = load_config_from(&config_path).unwrap();
    {
        let store = AppStore::new(
            FileStorage::new(config.storage.resolve_dir()),
            config.storage.key.clone(),
        );
        store.hydrate(|_| {});
        store.set_color_scheme(ColorScheme::Dark);
        store.set_language(Language::Spanish);
    }

    let snapshot = dir
        .path()
        .join("state")
        .join(format!("{}.json", config.storage.key));
    assert!(snapshot.exists());

    let store = AppStore::new(
        FileStorage::new(config.storage.resolve_dir()),
        config.storage.key.clone(),
    );
    let mut restored = false;
    store.hydrate(|outcome| restored = outcome.restored_state());

    assert!(restored);
    assert_eq!(store.read(|s| s.theme.color_scheme()), ColorScheme::Dark);
    assert_eq!(store.read(|s| s.preferences.language()), Language::Spanish);
}

#[test]
fn test_invalid_key_does_not_break_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let store = AppStore::new(FileStorage::new(dir.path()), "../escape");

    let mut discarded = false;
    store.hydrate(|outcome| discarded = !outcome.restored_state());
    assert!(discarded);

    store.set_large_font(true);
    assert!(store.read(|s| s.preferences.large_font()));
    assert!(store.flush().is_err());
}
