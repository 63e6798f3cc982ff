//! Per-channel notification settings and the external profile record they
//! are hydrated from.

use serde::{Deserialize, Serialize};

/// Settings as returned by the profile service. Every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSettings {
    pub push_notifications: Option<bool>,
    pub email_notifications: Option<bool>,
    pub sms_notifications: Option<bool>,
    pub emergency_alerts: Option<bool>,
    pub weekly_digest: Option<bool>,
    pub language: Option<String>,
    pub large_font: Option<bool>,
    pub voice_narration: Option<bool>,
}

/// Notification preferences per delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSlice {
    push_notifications: bool,
    email_notifications: bool,
    sms_notifications: bool,
    emergency_alerts: bool,
    weekly_digest: bool,
}

impl Default for SettingsSlice {
    fn default() -> Self {
        Self {
            push_notifications: true,
            email_notifications: true,
            sms_notifications: false,
            emergency_alerts: true,
            weekly_digest: false,
        }
    }
}

impl SettingsSlice {
    pub fn push_notifications(&self) -> bool {
        self.push_notifications
    }

    pub fn email_notifications(&self) -> bool {
        self.email_notifications
    }

    pub fn sms_notifications(&self) -> bool {
        self.sms_notifications
    }

    pub fn emergency_alerts(&self) -> bool {
        self.emergency_alerts
    }

    pub fn weekly_digest(&self) -> bool {
        self.weekly_digest
    }

    pub fn set_push_notifications(&mut self, enabled: bool) {
        self.push_notifications = enabled;
    }

    pub fn set_email_notifications(&mut self, enabled: bool) {
        self.email_notifications = enabled;
    }

    pub fn set_sms_notifications(&mut self, enabled: bool) {
        self.sms_notifications = enabled;
    }

    pub fn set_emergency_alerts(&mut self, enabled: bool) {
        self.emergency_alerts = enabled;
    }

    pub fn set_weekly_digest(&mut self, enabled: bool) {
        self.weekly_digest = enabled;
    }

    /// Overwrite every field from a profile record, using the default for any
    /// field the record omits. `None` resets everything to defaults.
    pub fn hydrate_from_profile(&mut self, profile: Option<&ProfileSettings>) {
        let defaults = Self::default();
        let Some(profile) = profile else {
            *self = defaults;
            return;
        };

        *self = Self {
            push_notifications: profile
                .push_notifications
                .unwrap_or(defaults.push_notifications),
            email_notifications: profile
                .email_notifications
                .unwrap_or(defaults.email_notifications),
            sms_notifications: profile
                .sms_notifications
                .unwrap_or(defaults.sms_notifications),
            emergency_alerts: profile.emergency_alerts.unwrap_or(defaults.emergency_alerts),
            weekly_digest: profile.weekly_digest.unwrap_or(defaults.weekly_digest),
        };
    }
}
