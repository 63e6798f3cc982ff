//! One-shot hydration bookkeeping.

use chrono::{DateTime, Utc};

/// Lifecycle of the startup restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HydrationStatus {
    #[default]
    Uninitialized,
    Hydrating,
    Hydrated,
}

/// What hydration found in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HydrationOutcome {
    /// Nothing stored; slice defaults kept
    Empty,
    /// Current-version snapshot restored
    Restored { saved_at: Option<DateTime<Utc>> },
    /// Older snapshot migrated and restored
    Migrated { from_version: u32 },
    /// Snapshot unreadable; slice defaults kept
    Discarded { reason: String },
}

impl HydrationOutcome {
    /// Whether stored state was applied.
    pub fn restored_state(&self) -> bool {
        matches!(self, Self::Restored { .. } | Self::Migrated { .. })
    }
}
