use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{
    Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use super::{AppState, HydrationOutcome, HydrationStatus, StoreError};
use crate::i18n::Language;
use crate::slices::{Conversation, Message, ProfileSettings, Resource, User};
use crate::storage::{schema, KeyValueStorage};
use crate::theme::{ColorScheme, ThemeTokens};

type Listener = Arc<dyn Fn(&AppState) + Send + Sync>;

/// Handle returned by [`AppStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Shared handle to the client state container.
///
/// Clones refer to the same state. Every mutation goes through
/// [`AppStore::update`], which commits synchronously, writes the snapshot to
/// storage, then calls listeners with the new state.
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Inner>,
}

struct Inner {
    state: RwLock<AppState>,
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    status: Mutex<HydrationStatus>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl std::fmt::Debug for AppStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStore")
            .field("key", &self.inner.key)
            .field("status", &self.status())
            .finish_non_exhaustive()
    }
}

impl AppStore {
    /// Create a store with default slices over `storage`, persisting under `key`.
    pub fn new(storage: impl KeyValueStorage + 'static, key: impl Into<String>) -> Self {
        Self::with_storage(Arc::new(storage), key)
    }

    /// Create a store over an already shared storage backend.
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(AppState::default()),
                storage,
                key: key.into(),
                status: Mutex::new(HydrationStatus::Uninitialized),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    /// Storage key the snapshot is written under.
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    pub fn status(&self) -> HydrationStatus {
        *lock(&self.inner.status)
    }

    pub fn has_hydrated(&self) -> bool {
        self.status() == HydrationStatus::Hydrated
    }

    /// Cloned snapshot of the whole state.
    pub fn state(&self) -> AppState {
        read(&self.inner.state).clone()
    }

    /// Run `f` against the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&read(&self.inner.state))
    }

    /// Apply one mutation, persist, then notify listeners.
    ///
    /// The change is visible to `read`/`state` as soon as `f` returns. `f`
    /// must not call back into the store.
    pub fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = write(&self.inner.state);
            let result = f(&mut state);
            (result, state.clone())
        };

        if self.has_hydrated() {
            self.persist_state(&snapshot);
        } else {
            // Writing before the stored snapshot is read would overwrite it.
            tracing::debug!("Skipping persist before hydration");
        }

        self.notify(&snapshot);
        result
    }

    /// Register a listener called after every committed change.
    pub fn subscribe(&self, listener: impl Fn(&AppState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        let listener: Listener = Arc::new(listener);
        lock(&self.inner.listeners).push((id, listener));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = lock(&self.inner.listeners);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, state: &AppState) {
        // Listeners run without any store lock held so they may update again.
        let listeners: Vec<Listener> = lock(&self.inner.listeners)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(state);
        }
    }

    /// Write the current snapshot, logging and dropping any failure.
    ///
    /// The in-memory state stays authoritative when the write fails.
    pub fn persist(&self) {
        let snapshot = self.state();
        self.persist_state(&snapshot);
    }

    fn persist_state(&self, state: &AppState) {
        if let Err(e) = self.write_state(state) {
            tracing::warn!("Failed to persist state under {:?}: {}", self.inner.key, e);
        }
    }

    /// Write the current snapshot and report failure to the caller.
    pub fn flush(&self) -> Result<(), StoreError> {
        let snapshot = self.state();
        self.write_state(&snapshot)
    }

    fn write_state(&self, state: &AppState) -> Result<(), StoreError> {
        let encoded = schema::encode(state)?;
        self.inner.storage.set_item(&self.inner.key, &encoded)?;
        tracing::debug!("Persisted {} bytes under {:?}", encoded.len(), self.inner.key);
        Ok(())
    }

    /// Restore the stored snapshot into the live state, once.
    ///
    /// `on_finish` runs exactly once, on the first call, after the state and
    /// derived fields are in place. Later calls return the current status
    /// without touching state or calling `on_finish`. Missing or unreadable
    /// snapshots leave the slice defaults in place.
    pub fn hydrate(&self, on_finish: impl FnOnce(&HydrationOutcome)) -> HydrationStatus {
        {
            let mut status = lock(&self.inner.status);
            if *status != HydrationStatus::Uninitialized {
                tracing::debug!("Hydration already {:?}; ignoring", *status);
                return *status;
            }
            *status = HydrationStatus::Hydrating;
        }

        let outcome = self.restore();
        *lock(&self.inner.status) = HydrationStatus::Hydrated;

        match &outcome {
            HydrationOutcome::Empty => tracing::debug!("No stored state; using defaults"),
            HydrationOutcome::Restored { saved_at } => {
                tracing::info!("Restored stored state (saved at {:?})", saved_at)
            }
            HydrationOutcome::Migrated { from_version } => {
                tracing::info!("Restored stored state migrated from version {}", from_version);
                self.persist();
            }
            HydrationOutcome::Discarded { reason } => {
                tracing::warn!("Discarding stored state: {}", reason)
            }
        }

        if outcome.restored_state() {
            let snapshot = self.state();
            self.notify(&snapshot);
        }

        on_finish(&outcome);
        HydrationStatus::Hydrated
    }

    fn restore(&self) -> HydrationOutcome {
        let raw = match self.inner.storage.get_item(&self.inner.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return HydrationOutcome::Empty,
            Err(e) => {
                return HydrationOutcome::Discarded {
                    reason: e.to_string(),
                }
            }
        };

        let decoded = match schema::decode(&raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                return HydrationOutcome::Discarded {
                    reason: e.to_string(),
                }
            }
        };

        let migrated = decoded.was_migrated();
        let mut state = write(&self.inner.state);
        match merge_snapshot(&state, decoded.state) {
            Ok(merged) => *state = merged,
            Err(e) => {
                return HydrationOutcome::Discarded {
                    reason: e.to_string(),
                }
            }
        }

        if migrated {
            HydrationOutcome::Migrated {
                from_version: decoded.stored_version,
            }
        } else {
            HydrationOutcome::Restored {
                saved_at: decoded.saved_at,
            }
        }
    }

    /// Reset every slice to its defaults and remove the stored snapshot.
    ///
    /// Memory is reset and listeners are notified even when removing the
    /// stored entry fails; the storage error is returned afterwards.
    pub fn clear(&self) -> Result<(), StoreError> {
        let snapshot = {
            let mut state = write(&self.inner.state);
            *state = AppState::default();
            state.clone()
        };
        let removed = self.inner.storage.remove_item(&self.inner.key);
        self.notify(&snapshot);
        removed?;
        Ok(())
    }

    pub fn theme_tokens(&self) -> ThemeTokens {
        self.read(|s| *s.theme.tokens())
    }

    pub fn set_color_scheme(&self, scheme: ColorScheme) {
        self.update(|s| s.theme.set_color_scheme(scheme));
    }

    pub fn set_high_contrast(&self, enabled: bool) {
        self.update(|s| s.theme.set_high_contrast(enabled));
    }

    pub fn toggle_high_contrast(&self) {
        self.update(|s| s.theme.toggle_high_contrast());
    }

    pub fn set_language(&self, language: Language) {
        self.update(|s| s.preferences.set_language(language));
    }

    pub fn set_large_font(&self, enabled: bool) {
        self.update(|s| s.preferences.set_large_font(enabled));
    }

    pub fn set_voice_narration(&self, enabled: bool) {
        self.update(|s| s.preferences.set_voice_narration(enabled));
    }

    /// Record a successful authentication round-trip.
    pub fn login(&self, user: User) {
        self.update(|s| s.session.login(user));
    }

    /// Clear login flag, role, and user; other slices are untouched.
    pub fn logout(&self) {
        self.update(|s| s.session.logout());
    }

    /// Apply an externally fetched settings record to the settings and
    /// preference slices, with per-field default fallback.
    pub fn hydrate_settings_from_profile(&self, profile: Option<&ProfileSettings>) {
        self.update(|s| {
            s.settings.hydrate_from_profile(profile);
            s.preferences.hydrate_from_profile(profile);
        });
    }

    pub fn add_resource(&self, resource: Resource) {
        self.update(|s| s.resources.add_resource(resource));
    }

    pub fn resource_by_id(&self, id: &str) -> Option<Resource> {
        self.read(|s| s.resources.resource_by_id(id).cloned())
    }

    pub fn add_conversation(&self, conversation: Conversation) {
        self.update(|s| s.chat.add_conversation(conversation));
    }

    pub fn conversation_by_id(&self, id: &str) -> Option<Conversation> {
        self.read(|s| s.chat.conversation_by_id(id).cloned())
    }

    /// Append a message to a cached conversation; `false` if it is not cached.
    pub fn add_message(&self, conversation_id: &str, message: Message) -> bool {
        self.update(|s| s.chat.add_message(conversation_id, message))
    }
}

/// Overlay the stored slices on the live state, slice by slice.
///
/// Slices missing from the snapshot keep their live values.
fn merge_snapshot(
    current: &AppState,
    snapshot: Map<String, Value>,
) -> Result<AppState, serde_json::Error> {
    let mut merged = match serde_json::to_value(current)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    merged.extend(snapshot);

    let mut state: AppState = serde_json::from_value(Value::Object(merged))?;
    state.recompute_derived();
    Ok(state)
}
