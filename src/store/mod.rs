//! The composed client state and the store that owns it.
//!
//! [`AppState`] nests one struct per slice. [`AppStore`] is the single
//! mutable container: it is built once at startup and handed to whoever
//! needs it, persists after every committed update, and notifies listeners.

mod app_store;
mod hydration;

use serde::{Deserialize, Serialize};

use crate::slices::{
    ChatSlice, PreferencesSlice, ResourceSlice, SessionSlice, SettingsSlice, ThemeSlice,
};
use crate::storage::{SchemaError, StorageError};

pub use app_store::{AppStore, SubscriptionId};
pub use hydration::{HydrationOutcome, HydrationStatus};

/// Every slice of client state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub theme: ThemeSlice,
    pub session: SessionSlice,
    pub preferences: PreferencesSlice,
    pub settings: SettingsSlice,
    pub chat: ChatSlice,
    pub resources: ResourceSlice,
}

impl AppState {
    /// Re-derive every field that is computed from others.
    pub fn recompute_derived(&mut self) {
        self.theme.recompute();
    }
}

/// Store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Snapshot error: {0}")]
    Schema(#[from] SchemaError),
}
