//! Settings page model: sections, toggles and the simulated maintenance actions.

use serde::{Deserialize, Serialize};

use crate::shared::notification::NotificationKind;

/// Delay before "Settings saved successfully"
pub const SAVE_DELAY_MS: u32 = 1500;

/// Lifetime of the toggle feedback toasts
pub const TOGGLE_TOAST_MS: u32 = 2000;

crate::label_enum! {
    pub enum SettingsSection {
        General => "General",
        Notifications => "Notifications",
        Security => "Security",
        Backup => "Backup",
        System => "System",
    }
}

impl SettingsSection {
    pub fn icon_name(&self) -> &'static str {
        match self {
            SettingsSection::General => "settings",
            SettingsSection::Notifications => "bell",
            SettingsSection::Security => "shield",
            SettingsSection::Backup => "database",
            SettingsSection::System => "server",
        }
    }

    pub fn toggles(&self) -> Vec<ToggleSetting> {
        ToggleSetting::all()
            .iter()
            .copied()
            .filter(|t| t.section() == *self)
            .collect()
    }

    pub fn actions(&self) -> Vec<SystemAction> {
        SystemAction::all()
            .iter()
            .copied()
            .filter(|a| a.section() == *self)
            .collect()
    }
}

crate::label_enum! {
    pub enum ToggleSetting {
        EmailAlerts => "Email Alerts",
        LowStockAlerts => "Low Stock Alerts",
        ExpiryAlerts => "Expiry Alerts",
        TwoFactor => "Two-Factor Authentication",
        AutoBackup => "Automatic Backup",
        MaintenanceMode => "Maintenance Mode",
    }
}

impl ToggleSetting {
    pub fn section(&self) -> SettingsSection {
        match self {
            ToggleSetting::EmailAlerts
            | ToggleSetting::LowStockAlerts
            | ToggleSetting::ExpiryAlerts => SettingsSection::Notifications,
            ToggleSetting::TwoFactor => SettingsSection::Security,
            ToggleSetting::AutoBackup => SettingsSection::Backup,
            ToggleSetting::MaintenanceMode => SettingsSection::System,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToggleSetting::EmailAlerts => "Receive order and stock updates by email",
            ToggleSetting::LowStockAlerts => "Notify when items fall below their minimum level",
            ToggleSetting::ExpiryAlerts => "Notify 90 days before a batch expires",
            ToggleSetting::TwoFactor => "Require a one-time code at sign in",
            ToggleSetting::AutoBackup => "Back up data every night at 2:00 AM",
            ToggleSetting::MaintenanceMode => "Only administrators can sign in",
        }
    }

    pub fn default_enabled(&self) -> bool {
        !matches!(self, ToggleSetting::TwoFactor | ToggleSetting::MaintenanceMode)
    }

    /// `Email Alerts enabled`
    pub fn feedback(&self, enabled: bool) -> String {
        let state = if enabled { "enabled" } else { "disabled" };
        format!("{} {}", self.label(), state)
    }
}

/// General settings form values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralSettings {
    pub company_name: String,
    pub contact_email: String,
    pub timezone: String,
    pub currency: String,
    pub session_timeout_minutes: u32,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            company_name: "Pharma Connect".to_string(),
            contact_email: "admin@pharmaconnect.com".to_string(),
            timezone: "Asia/Kolkata".to_string(),
            currency: "INR".to_string(),
            session_timeout_minutes: 30,
        }
    }
}

pub const TIMEZONES: &[&str] = &["Asia/Kolkata", "UTC", "Asia/Dubai", "Europe/London"];
pub const CURRENCIES: &[&str] = &["INR", "USD", "EUR"];

crate::label_enum! {
    /// Maintenance buttons; nothing actually runs, the toasts are timed
    pub enum SystemAction {
        CreateBackup => "Create Backup",
        RestoreBackup => "Restore Backup",
        ClearCache => "Clear Cache",
        RestartSystem => "Restart System",
    }
}

impl SystemAction {
    pub fn section(&self) -> SettingsSection {
        match self {
            SystemAction::CreateBackup | SystemAction::RestoreBackup => SettingsSection::Backup,
            SystemAction::ClearCache | SystemAction::RestartSystem => SettingsSection::System,
        }
    }

    /// Browser confirm text; `None` runs straight away
    pub fn confirmation(&self) -> Option<&'static str> {
        match self {
            SystemAction::RestoreBackup => Some(
                "Are you sure you want to restore from backup? This will overwrite current data.",
            ),
            SystemAction::RestartSystem => Some(
                "Are you sure you want to restart the system? This will temporarily interrupt service.",
            ),
            SystemAction::CreateBackup | SystemAction::ClearCache => None,
        }
    }

    pub fn start_message(&self) -> (&'static str, NotificationKind) {
        match self {
            SystemAction::CreateBackup => ("Creating backup...", NotificationKind::Info),
            SystemAction::RestoreBackup => ("Restoring from backup...", NotificationKind::Info),
            SystemAction::ClearCache => ("Clearing system cache...", NotificationKind::Info),
            SystemAction::RestartSystem => ("System restart initiated...", NotificationKind::Warning),
        }
    }

    pub fn duration_ms(&self) -> u32 {
        match self {
            SystemAction::CreateBackup => 3000,
            SystemAction::RestoreBackup => 4000,
            SystemAction::ClearCache => 2000,
            SystemAction::RestartSystem => 5000,
        }
    }

    pub fn done_message(&self) -> &'static str {
        match self {
            SystemAction::CreateBackup => "Backup created successfully",
            SystemAction::RestoreBackup => "Backup restored successfully",
            SystemAction::ClearCache => "Cache cleared successfully",
            SystemAction::RestartSystem => "System restart completed",
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.confirmation().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_toggle_has_a_section() {
        let total: usize = SettingsSection::all().iter().map(|s| s.toggles().len()).sum();
        assert_eq!(total, ToggleSetting::all().len());
        assert_eq!(SettingsSection::Notifications.toggles().len(), 3);
        assert!(SettingsSection::General.toggles().is_empty());
    }

    #[test]
    fn test_toggle_feedback() {
        assert_eq!(ToggleSetting::EmailAlerts.feedback(true), "Email Alerts enabled");
        assert_eq!(ToggleSetting::MaintenanceMode.feedback(false), "Maintenance Mode disabled");
        assert!(!ToggleSetting::MaintenanceMode.default_enabled());
    }

    #[test]
    fn test_actions_that_confirm() {
        let confirming: Vec<_> = SystemAction::all()
            .iter()
            .filter(|a| a.is_destructive())
            .collect();
        assert_eq!(confirming, vec![&SystemAction::RestoreBackup, &SystemAction::RestartSystem]);
        assert_eq!(SystemAction::RestartSystem.start_message().1, NotificationKind::Warning);
        assert_eq!(SystemAction::CreateBackup.duration_ms(), 3000);
        assert_eq!(SettingsSection::Backup.actions().len(), 2);
    }
}
