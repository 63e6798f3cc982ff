//! Homeroom state host.
//!
//! Boots the client state the way the app does at launch: restore the stored
//! snapshot, follow the OS appearance, and keep the snapshot current.

use std::time::Duration;

use anyhow::Context;
use homeroom::appearance::{AppearanceProvider, AppearanceWatcher, SystemAppearance};
use homeroom::storage::{config, FileStorage};
use homeroom::{i18n, AppStore, HydrationOutcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Homeroom v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("loading configuration")?;
    let storage_dir = config.storage.resolve_dir();
    tracing::info!("State directory: {}", storage_dir.display());

    let store = AppStore::new(FileStorage::new(storage_dir), config.storage.key.clone());

    let mut fresh_install = false;
    store.hydrate(|outcome| {
        tracing::info!("Hydration finished: {}", describe(outcome));
        fresh_install = !outcome.restored_state();
    });

    // Seed the language from the device locale on a fresh install only.
    if fresh_install {
        let detected = i18n::detect_system_locale();
        if detected != i18n::Language::default() {
            store.set_language(detected);
        }
    }

    let subscription = if config.appearance.follow_system {
        let mut watcher = AppearanceWatcher::new();
        watcher.poll_once(&store, &SystemAppearance);
        Some(watcher.spawn(
            store.clone(),
            SystemAppearance,
            Duration::from_millis(config.appearance.poll_interval_ms),
        ))
    } else {
        tracing::info!(
            "Not following OS appearance (OS reports {:?})",
            SystemAppearance.current()
        );
        None
    };

    store.read(|s| {
        tracing::info!(
            logged_in = s.session.is_logged_in(),
            role = ?s.session.role(),
            scheme = %s.theme.color_scheme(),
            high_contrast = s.theme.high_contrast(),
            language = s.preferences.language().id(),
            conversations = s.chat.conversations().len(),
            resources = s.resources.resources().len(),
            "Client state ready"
        );
    });

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;

    if let Some(subscription) = subscription {
        subscription.unsubscribe();
    }
    store.flush().context("writing state snapshot")?;
    tracing::info!("State saved; exiting");

    Ok(())
}

fn describe(outcome: &HydrationOutcome) -> &'static str {
    match outcome {
        HydrationOutcome::Empty => "empty",
        HydrationOutcome::Restored { .. } => "restored",
        HydrationOutcome::Migrated { .. } => "migrated",
        HydrationOutcome::Discarded { .. } => "discarded",
    }
}
