//! State slices composed into [`crate::store::AppState`].
//!
//! Each slice owns its fields and setters and never reads another slice.
//! Setters are plain in-memory writes; persistence and change notification
//! happen in the store.

pub mod chat;
pub mod preferences;
pub mod resources;
pub mod session;
pub mod settings;
pub mod theme;

pub use chat::{Attachment, ChatSlice, Conversation, Message};
pub use preferences::PreferencesSlice;
pub use resources::{Resource, ResourceSlice};
pub use session::{Role, RoleParseError, SessionSlice, User};
pub use settings::{ProfileSettings, SettingsSlice};
pub use theme::ThemeSlice;
