//! Error types for the Crezia application.

use thiserror::Error;

/// A shared error type for the entire Crezia application.
///
/// The first four variants are the session/entitlement failures surfaced to the
/// user. None of them are fatal: every variant maps to a notification and the
/// application stays usable afterwards.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreziaError {
    /// Credentials do not match any known account.
    #[error("Invalid credentials")]
    AuthFailure,

    /// Registration email already belongs to a known account.
    #[error("Account already exists: {email}")]
    DuplicateAccount { email: String },

    /// A gated action was attempted without an active session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// Free-tier usage reached the daily limit.
    #[error("Quota exceeded: {usage}/{limit}")]
    QuotaExceeded { usage: u32, limit: u32 },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Data access error (key-value store, account set)
    #[error("Data access error: {0}")]
    DataAccess(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A deferred step was cancelled before it completed.
    #[error("Operation cancelled")]
    Cancelled,

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CreziaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a DuplicateAccount error
    pub fn duplicate_account(email: impl Into<String>) -> Self {
        Self::DuplicateAccount {
            email: email.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates a DataAccess error
    pub fn data_access(message: impl Into<String>) -> Self {
        Self::DataAccess(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an AuthFailure error
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, Self::AuthFailure)
    }

    /// Check if this is a DuplicateAccount error
    pub fn is_duplicate_account(&self) -> bool {
        matches!(self, Self::DuplicateAccount { .. })
    }

    /// Check if this is a NotAuthenticated error
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }

    /// Check if this is a QuotaExceeded error
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Self::QuotaExceeded { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a Cancelled error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true for the failures a user can resolve by logging in,
    /// signing up, or upgrading.
    pub fn is_entitlement(&self) -> bool {
        matches!(
            self,
            Self::AuthFailure
                | Self::DuplicateAccount { .. }
                | Self::NotAuthenticated
                | Self::QuotaExceeded { .. }
        )
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for CreziaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for CreziaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CreziaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for CreziaError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, CreziaError>`.
pub type Result<T> = std::result::Result<T, CreziaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entitlement_classification() {
        assert!(CreziaError::AuthFailure.is_entitlement());
        assert!(CreziaError::duplicate_account("a@x.com").is_entitlement());
        assert!(CreziaError::NotAuthenticated.is_entitlement());
        assert!(CreziaError::QuotaExceeded { usage: 10, limit: 10 }.is_entitlement());
        assert!(!CreziaError::Cancelled.is_entitlement());
        assert!(!CreziaError::io("disk").is_entitlement());
    }

    #[test]
    fn test_json_error_conversion() {
        let err: CreziaError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        match err {
            CreziaError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_display_quota() {
        let err = CreziaError::QuotaExceeded { usage: 10, limit: 10 };
        assert_eq!(err.to_string(), "Quota exceeded: 10/10");
    }
}
