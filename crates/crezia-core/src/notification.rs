//! User-facing notifications.
//!
//! The core never renders anything. It produces [`Notification`]s that the
//! presentation layer shows as toasts or terminal lines.

use serde::Serialize;

use crate::error::CreziaError;

/// Severity of a notification, used for styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A message for the notification surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn login_succeeded() -> Self {
        Self::new(NotificationLevel::Success, "Login successful!")
    }

    pub fn signup_succeeded() -> Self {
        Self::new(NotificationLevel::Success, "Account created successfully!")
    }

    pub fn logged_out() -> Self {
        Self::new(NotificationLevel::Info, "Logged out successfully")
    }
}

impl From<&CreziaError> for Notification {
    fn from(err: &CreziaError) -> Self {
        match err {
            CreziaError::AuthFailure => Self::new(
                NotificationLevel::Error,
                "Invalid credentials. Try demo@crezia.com / demo123",
            ),
            CreziaError::DuplicateAccount { .. } => Self::new(
                NotificationLevel::Error,
                "Account already exists. Please login.",
            ),
            CreziaError::NotAuthenticated => {
                Self::new(NotificationLevel::Error, "Please login to use SEO tools")
            }
            CreziaError::QuotaExceeded { .. } => Self::new(
                NotificationLevel::Warning,
                "Daily limit reached! Upgrade to Premium for unlimited usage.",
            ),
            CreziaError::Cancelled => Self::new(NotificationLevel::Info, "Cancelled"),
            CreziaError::NotFound { entity_type, id } => Self::new(
                NotificationLevel::Error,
                format!("Unknown {}: {}", entity_type, id),
            ),
            other => Self::new(NotificationLevel::Error, other.to_string()),
        }
    }
}

impl From<CreziaError> for Notification {
    fn from(err: CreziaError) -> Self {
        Self::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entitlement_messages() {
        let n = Notification::from(CreziaError::AuthFailure);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.message, "Invalid credentials. Try demo@crezia.com / demo123");

        let n = Notification::from(CreziaError::QuotaExceeded { usage: 10, limit: 10 });
        assert_eq!(n.level, NotificationLevel::Warning);
        assert!(n.message.starts_with("Daily limit reached!"));

        let n = Notification::from(CreziaError::duplicate_account("a@x.com"));
        assert_eq!(n.message, "Account already exists. Please login.");

        let n = Notification::from(CreziaError::NotAuthenticated);
        assert_eq!(n.message, "Please login to use SEO tools");
    }

    #[test]
    fn test_infrastructure_errors_fall_through() {
        let n = Notification::from(CreziaError::io("disk full"));
        assert_eq!(n.level, NotificationLevel::Error);
        assert!(n.message.contains("disk full"));
    }
}
