//! Persisted snapshot layout and migrations.
//!
//! Snapshots are stored as a versioned JSON envelope:
//!
//! ```json
//! { "version": 1, "saved_at": "2026-01-05T08:00:00Z", "state": { "theme": {...}, ... } }
//! ```
//!
//! Version 0 is the legacy unversioned layout written by earlier app builds:
//! `{ "state": { "isLoggedIn": true, "colorScheme": "dark", ... }, "version": 0 }`
//! with every slice flattened into one camelCase object. [`decode`] migrates
//! older layouts forward and refuses versions newer than [`CURRENT_VERSION`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::i18n::Language;
use crate::slices::{Conversation, ProfileSettings, Resource, Role, SettingsSlice, User};
use crate::store::AppState;

/// Current snapshot layout version.
pub const CURRENT_VERSION: u32 = 1;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    state: &'a AppState,
}

#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    version: u32,
    #[serde(default)]
    saved_at: Option<DateTime<Utc>>,
    state: Value,
}

/// A decoded snapshot, migrated to the current layout.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Version the snapshot was written with
    pub stored_version: u32,
    /// When the snapshot was written, if recorded
    pub saved_at: Option<DateTime<Utc>>,
    /// State object in the current layout, one entry per slice
    pub state: Map<String, Value>,
}

impl Decoded {
    pub fn was_migrated(&self) -> bool {
        self.stored_version < CURRENT_VERSION
    }
}

/// Serialize the state into a current-version envelope.
///
/// Derived fields are excluded by the slices' own `Serialize` impls.
pub fn encode(state: &AppState) -> Result<String, SchemaError> {
    let envelope = EnvelopeRef {
        version: CURRENT_VERSION,
        saved_at: Utc::now(),
        state,
    };
    serde_json::to_string(&envelope).map_err(|e| SchemaError::SerializationError(e.to_string()))
}

/// Parse an envelope and migrate its state to the current layout.
pub fn decode(raw: &str) -> Result<Decoded, SchemaError> {
    let envelope: RawEnvelope =
        serde_json::from_str(raw).map_err(|e| SchemaError::DeserializationError(e.to_string()))?;

    if envelope.version > CURRENT_VERSION {
        return Err(SchemaError::UnsupportedVersion(envelope.version));
    }

    let state = migrate(envelope.version, envelope.state)?;

    Ok(Decoded {
        stored_version: envelope.version,
        saved_at: envelope.saved_at,
        state,
    })
}

/// Run every migration step from `from_version` up to the current layout.
fn migrate(from_version: u32, state: Value) -> Result<Map<String, Value>, SchemaError> {
    let Value::Object(mut state) = state else {
        return Err(SchemaError::MigrationFailed(
            "snapshot state is not an object".to_string(),
        ));
    };

    if from_version < 1 {
        state = migrate_v0_to_v1(&state);
        tracing::info!("Migrated state snapshot from version 0 to 1");
    }

    // Future migrations would go here:
    // if from_version < 2 { ... }

    Ok(state)
}

/// Split the flat legacy object into per-slice objects.
///
/// Legacy fields are carried over one by one; a field that no longer parses
/// is dropped so the slice default applies instead of discarding the whole
/// snapshot. The legacy `theme` object is derived data and is not carried.
fn migrate_v0_to_v1(legacy: &Map<String, Value>) -> Map<String, Value> {
    let mut theme = Map::new();
    if let Some(scheme) = legacy
        .get("colorScheme")
        .and_then(Value::as_str)
        .filter(|s| matches!(*s, "light" | "dark"))
    {
        theme.insert("color_scheme".into(), Value::from(scheme));
    }
    copy_bool(legacy, "isHighContrast", &mut theme, "high_contrast");

    let mut session = Map::new();
    copy_bool(legacy, "isLoggedIn", &mut session, "is_logged_in");
    if let Some(role) = legacy
        .get("role")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<Role>().ok())
    {
        session.insert("role".into(), Value::from(role.as_str()));
    }
    copy_parsed::<User>(legacy, "user", &mut session, "user");

    let mut preferences = Map::new();
    copy_bool(legacy, "isLargeFont", &mut preferences, "large_font");
    copy_bool(legacy, "isVoiceNarration", &mut preferences, "voice_narration");
    if let Some(lang) = legacy
        .get("language")
        .and_then(Value::as_str)
        .and_then(Language::from_id)
    {
        preferences.insert("language".into(), Value::from(lang.id()));
    }

    let mut migrated = Map::new();
    migrated.insert("theme".into(), Value::Object(theme));
    migrated.insert("session".into(), Value::Object(session));
    migrated.insert("preferences".into(), Value::Object(preferences));

    if let Some(profile) = legacy
        .get("notificationSettings")
        .and_then(|v| serde_json::from_value::<ProfileSettings>(v.clone()).ok())
    {
        let mut settings = SettingsSlice::default();
        settings.hydrate_from_profile(Some(&profile));
        if let Ok(value) = serde_json::to_value(&settings) {
            migrated.insert("settings".into(), value);
        }
    }

    let mut chat = Map::new();
    copy_parsed::<Vec<Conversation>>(legacy, "chats", &mut chat, "conversations");
    migrated.insert("chat".into(), Value::Object(chat));

    let mut resources = Map::new();
    copy_parsed::<Vec<Resource>>(legacy, "resources", &mut resources, "resources");
    migrated.insert("resources".into(), Value::Object(resources));

    migrated
}

fn copy_bool(from: &Map<String, Value>, old: &str, to: &mut Map<String, Value>, new: &str) {
    if let Some(value) = from.get(old).and_then(Value::as_bool) {
        to.insert(new.to_string(), Value::Bool(value));
    }
}

/// Copy `old` to `new` only if it deserializes as `T`.
fn copy_parsed<T: serde::de::DeserializeOwned>(
    from: &Map<String, Value>,
    old: &str,
    to: &mut Map<String, Value>,
    new: &str,
) {
    let Some(value) = from.get(old).filter(|v| !v.is_null()) else {
        return;
    };
    match serde_json::from_value::<T>(value.clone()) {
        Ok(_) => {
            to.insert(new.to_string(), value.clone());
        }
        Err(e) => tracing::warn!("Dropping legacy field {} during migration: {}", old, e),
    }
}

/// Snapshot layout errors.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}
