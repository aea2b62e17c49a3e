//! Demo sign-in: hardcoded accounts and the session kept in local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::format::{badge, capitalize_first};

/// Local storage keys
pub const STORAGE_KEY_LOGGED_IN: &str = "isLoggedIn";
pub const STORAGE_KEY_USERNAME: &str = "username";
pub const STORAGE_KEY_LOGIN_TIME: &str = "loginTime";

/// Value stored under [`STORAGE_KEY_LOGGED_IN`] while signed in
pub const LOGGED_IN_FLAG: &str = "true";

/// Simulated sign-in latency
pub const LOGIN_DELAY_MS: u32 = 1500;

/// Demo accounts, shown on the login screen
pub const DEMO_CREDENTIALS: &[(&str, &str)] = &[
    ("admin", "admin123"),
    ("manager", "manager123"),
    ("user", "user123"),
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Both fields are trimmed before the lookup.
    pub fn is_valid(&self) -> bool {
        validate_credentials(&self.username, &self.password)
    }
}

pub fn validate_credentials(username: &str, password: &str) -> bool {
    let (username, password) = (username.trim(), password.trim());
    DEMO_CREDENTIALS
        .iter()
        .any(|(u, p)| *u == username && *p == password)
}

/// Signed-in user as restored from local storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub login_time: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(username: &str, login_time: DateTime<Utc>) -> Self {
        Self {
            username: username.trim().to_string(),
            login_time: Some(login_time),
        }
    }

    /// Rebuilds the session from stored values; `None` unless the flag reads `"true"`.
    pub fn restore(
        logged_in: Option<&str>,
        username: Option<&str>,
        login_time: Option<&str>,
    ) -> Option<Self> {
        if logged_in != Some(LOGGED_IN_FLAG) {
            return None;
        }
        Some(Self {
            username: username.unwrap_or("User").to_string(),
            login_time: login_time
                .and_then(|t| DateTime::parse_from_rfc3339(t).ok())
                .map(|t| t.with_timezone(&Utc)),
        })
    }

    /// `admin` -> `Admin`
    pub fn display_name(&self) -> String {
        capitalize_first(&self.username)
    }

    /// Header badge: `admin` -> `AD`
    pub fn badge(&self) -> String {
        badge(&self.username)
    }

    pub fn welcome(&self) -> String {
        format!("Welcome, {}!", self.display_name())
    }

    /// Stored form of the login time
    pub fn login_time_value(&self) -> Option<String> {
        self.login_time.map(|t| t.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(validate_credentials("admin", "admin123"));
        assert!(validate_credentials("  manager ", " manager123 "));
        assert!(validate_credentials("user", "user123"));
        assert!(!validate_credentials("admin", "user123"));
        assert!(!validate_credentials("Admin", "admin123"));
        assert!(!validate_credentials("", ""));
    }

    #[test]
    fn test_display_helpers() {
        let session = Session::new("admin", Utc::now());
        assert_eq!(session.display_name(), "Admin");
        assert_eq!(session.badge(), "AD");
        assert_eq!(session.welcome(), "Welcome, Admin!");
    }

    #[test]
    fn test_restore_requires_flag() {
        assert_eq!(Session::restore(None, Some("admin"), None), None);
        assert_eq!(Session::restore(Some("false"), Some("admin"), None), None);

        let restored = Session::restore(
            Some("true"),
            Some("manager"),
            Some("2024-01-15T10:30:00.000Z"),
        )
        .unwrap();
        assert_eq!(restored.username, "manager");
        assert_eq!(
            restored.login_time_value().as_deref(),
            Some("2024-01-15T10:30:00+00:00")
        );
    }

    #[test]
    fn test_restore_tolerates_missing_values() {
        let restored = Session::restore(Some("true"), None, Some("garbage")).unwrap();
        assert_eq!(restored.username, "User");
        assert_eq!(restored.login_time, None);
    }
}
