//! OS light/dark appearance tracking.
//!
//! The OS setting is polled and pushed into the store only when the OS value
//! itself changes. There is no debounce: whichever of the watcher or an
//! explicit `set_color_scheme` runs last decides the theme, and an explicit
//! choice stays until the OS reports a different scheme.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::store::AppStore;
use crate::theme::ColorScheme;

/// Source of the OS color scheme.
pub trait AppearanceProvider: Send + Sync {
    /// Current OS scheme, `None` when the OS expresses no preference.
    fn current(&self) -> Option<ColorScheme>;
}

/// Reads the desktop/mobile appearance via `dark-light`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemAppearance;

impl AppearanceProvider for SystemAppearance {
    fn current(&self) -> Option<ColorScheme> {
        match dark_light::detect() {
            dark_light::Mode::Dark => Some(ColorScheme::Dark),
            dark_light::Mode::Light => Some(ColorScheme::Light),
            dark_light::Mode::Default => None,
        }
    }
}

/// Pushes OS appearance changes into an [`AppStore`].
///
/// Remembers the last scheme the OS reported; the first observation counts
/// as a change.
#[derive(Debug, Default)]
pub struct AppearanceWatcher {
    last_seen: Option<ColorScheme>,
}

impl AppearanceWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last scheme reported by the OS, if any.
    pub fn last_seen(&self) -> Option<ColorScheme> {
        self.last_seen
    }

    /// Read the OS scheme once and apply it if the OS value changed since
    /// the previous poll.
    ///
    /// Returns whether the store changed.
    pub fn poll_once(&mut self, store: &AppStore, provider: &dyn AppearanceProvider) -> bool {
        let Some(scheme) = provider.current() else {
            return false;
        };
        if self.last_seen == Some(scheme) {
            return false;
        }
        self.last_seen = Some(scheme);

        if store.read(|s| s.theme.color_scheme()) == scheme {
            return false;
        }

        tracing::debug!("OS appearance changed to {}", scheme);
        store.set_color_scheme(scheme);
        true
    }

    /// Poll `provider` every `interval` on the current tokio runtime.
    ///
    /// The first poll happens immediately and keeps whatever this watcher
    /// has already observed. Must be called from within a tokio runtime.
    pub fn spawn(
        mut self,
        store: AppStore,
        provider: impl AppearanceProvider + 'static,
        interval: Duration,
    ) -> AppearanceSubscription {
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                self.poll_once(&store, &provider);
            }
        });

        AppearanceSubscription {
            handle: Some(handle),
        }
    }
}

/// Running appearance subscription. Dropping it also unsubscribes.
#[derive(Debug)]
pub struct AppearanceSubscription {
    handle: Option<JoinHandle<()>>,
}

impl AppearanceSubscription {
    pub fn is_active(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop watching the OS appearance.
    pub fn unsubscribe(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("Appearance watcher stopped");
        }
    }
}

impl Drop for AppearanceSubscription {
    fn drop(&mut self) {
        self.stop();
    }
}
