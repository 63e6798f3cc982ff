//! Unit tests for login and logout.

use homeroom::slices::{Role, SessionSlice, User};
use homeroom::{AppStore, ColorScheme, Language, MemoryStorage};

#[test]
fn test_logout_clears_session_only() {
    let store = AppStore::new(MemoryStorage::new(), "session-test");
    store.hydrate(|_| {});

    store.set_color_scheme(ColorScheme::Dark);
    store.set_high_contrast(true);
    store.set_language(Language::Vietnamese);
    store.update(|s| {
        s.session.set_logged_in(true);
        s.session.set_role(Some(Role::Parent));
        s.session.set_user(Some(User::new("u7", "Bao", Role::Parent)));
    });

    let theme_before = store.theme_tokens();

    store.update(|s| {
        s.session.set_logged_in(false);
        s.session.set_role(None);
        s.session.set_user(None);
    });

    store.read(|s| {
        assert!(!s.session.is_logged_in());
        assert_eq!(s.session.role(), None);
        assert!(s.session.user().is_none());
        assert_eq!(s.preferences.language(), Language::Vietnamese);
        assert_eq!(s.theme.color_scheme(), ColorScheme::Dark);
        assert!(s.theme.high_contrast());
    });
    assert_eq!(store.theme_tokens(), theme_before);
}

#[test]
fn test_login_sets_role_from_user() {
    let store = AppStore::new(MemoryStorage::new(), "session-test");
    store.hydrate(|_| {});

    store.login(User::new("t1", "Mr. Okafor", Role::Teacher));
    assert!(store.read(|s| s.session.is_logged_in()));
    assert_eq!(store.read(|s| s.session.role()), Some(Role::Teacher));

    store.logout();
    assert_eq!(store.state().session, SessionSlice::default());
}
