//! Homeroom - client state for the family and school engagement app
//!
//! Holds the app's local state: session and role, accessibility and language
//! preferences, notification settings, cached chat threads and library
//! resources, and the theme derived from the OS color scheme and the
//! high-contrast toggle. The state lives in one [`AppStore`] that persists a
//! versioned JSON snapshot after every change and restores it at startup.

pub mod appearance;
pub mod i18n;
pub mod slices;
pub mod storage;
pub mod store;
pub mod theme;

// Re-export commonly used types
pub use appearance::{AppearanceWatcher, SystemAppearance};
pub use i18n::Language;
pub use storage::{FileStorage, HomeroomConfig, MemoryStorage};
pub use store::{AppState, AppStore, HydrationOutcome};
pub use theme::{derive_theme, ColorScheme, ThemeTokens};
