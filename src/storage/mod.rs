//! Durable storage for the client state snapshot and the app configuration.

pub mod backend;
pub mod config;
pub mod schema;

pub use backend::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use config::{
    load_config, save_config, AppearanceSettings, ConfigError, HomeroomConfig, StorageSettings,
};
pub use schema::{Decoded, SchemaError, CURRENT_VERSION};
