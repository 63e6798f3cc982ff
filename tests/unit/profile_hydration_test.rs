//! Unit tests for applying an external profile record.

use homeroom::slices::{PreferencesSlice, ProfileSettings, SettingsSlice};
use homeroom::{AppStore, Language, MemoryStorage};

fn store() -> AppStore {
    let store = AppStore::new(MemoryStorage::new(), "profile-test");
    store.hydrate(|_| {});
    store
}

#[test]
fn test_partial_profile_uses_defaults_for_missing_fields() {
    let store = store();
    store.update(|s| {
        s.settings.set_email_notifications(false);
        s.settings.set_weekly_digest(true);
        s.preferences.set_large_font(true);
    });

    let profile: ProfileSettings = serde_json::from_str(
        r#"{ "pushNotifications": false, "language": "es", "voiceNarration": true }"#,
    )
    .unwrap();
    store.hydrate_settings_from_profile(Some(&profile));

    let defaults = SettingsSlice::default();
    store.read(|s| {
        assert!(!s.settings.push_notifications());
        assert_eq!(s.settings.email_notifications(), defaults.email_notifications());
        assert_eq!(s.settings.sms_notifications(), defaults.sms_notifications());
        assert_eq!(s.settings.emergency_alerts(), defaults.emergency_alerts());
        assert_eq!(s.settings.weekly_digest(), defaults.weekly_digest());

        assert_eq!(s.preferences.language(), Language::Spanish);
        assert!(s.preferences.voice_narration());
        assert!(!s.preferences.large_font());
    });
}

#[test]
fn test_absent_profile_resets_to_defaults() {
    let store = store();
    store.update(|s| {
        s.settings.set_sms_notifications(true);
        s.preferences.set_language(Language::Chinese);
    });

    store.hydrate_settings_from_profile(None);

    let state = store.state();
    assert_eq!(state.settings, SettingsSlice::default());
    assert_eq!(state.preferences, PreferencesSlice::default());
}

#[test]
fn test_empty_profile_object_equals_defaults() {
    let store = store();
    let profile: ProfileSettings = serde_json::from_str("{}").unwrap();
    store.hydrate_settings_from_profile(Some(&profile));
    assert_eq!(store.state().settings, SettingsSlice::default());
}
