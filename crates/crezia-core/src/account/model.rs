//! Account domain model.
//!
//! An account is a registered identity with a subscription plan and a usage
//! counter. The serialized form uses the camelCase field names of the session
//! snapshot (`dailyLimit`), with `-1` standing for an unlimited quota.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Subscription tier of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Free,
    Premium,
}

impl Plan {
    pub fn as_str(&self) -> &'static str {
        match self {
            Plan::Free => "free",
            Plan::Premium => "premium",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-day ceiling on gated actions.
///
/// Serialized as an integer: any negative value (canonically `-1`) is
/// `Unlimited`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum DailyLimit {
    Unlimited,
    Capped(u32),
}

impl DailyLimit {
    /// Wire value of `Unlimited`.
    pub const UNLIMITED_SENTINEL: i64 = -1;

    pub fn is_unlimited(&self) -> bool {
        matches!(self, DailyLimit::Unlimited)
    }

    /// Returns the cap, or `None` when unlimited.
    pub fn cap(&self) -> Option<u32> {
        match self {
            DailyLimit::Unlimited => None,
            DailyLimit::Capped(limit) => Some(*limit),
        }
    }
}

impl From<i64> for DailyLimit {
    fn from(value: i64) -> Self {
        if value < 0 {
            DailyLimit::Unlimited
        } else {
            DailyLimit::Capped(u32::try_from(value).unwrap_or(u32::MAX))
        }
    }
}

impl From<DailyLimit> for i64 {
    fn from(limit: DailyLimit) -> Self {
        match limit {
            DailyLimit::Unlimited => DailyLimit::UNLIMITED_SENTINEL,
            DailyLimit::Capped(limit) => i64::from(limit),
        }
    }
}

/// A registered identity.
///
/// The password is stored and compared in plaintext. This mirrors the demo
/// product and is unsuitable for anything beyond a mock account store; see
/// [`super::CredentialVerifier`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique identifier within the known-account set (case-sensitive).
    pub email: String,
    pub password: String,
    /// Display label.
    pub name: String,
    pub plan: Plan,
    pub daily_limit: DailyLimit,
    /// Gated actions charged so far. Never reset.
    pub usage: u32,
}

impl Account {
    /// Creates a fresh free-tier account with no usage.
    pub fn new_free(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        daily_limit: u32,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            name: name.into(),
            plan: Plan::Free,
            daily_limit: DailyLimit::Capped(daily_limit),
            usage: 0,
        }
    }

    pub fn is_premium(&self) -> bool {
        self.plan == Plan::Premium
    }

    /// Returns false for the one combination the model forbids: a free plan
    /// without a cap.
    pub fn is_valid(&self) -> bool {
        !(self.plan == Plan::Free && self.daily_limit.is_unlimited())
    }

    /// Gated actions left before the quota is hit. `None` means unlimited.
    pub fn remaining(&self) -> Option<u32> {
        if self.is_premium() {
            return None;
        }
        self.daily_limit
            .cap()
            .map(|limit| limit.saturating_sub(self.usage))
    }

    /// Name to show in the header, falling back to "User" when blank.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "User"
        } else {
            &self.name
        }
    }

    /// Usage counter text: "Unlimited" for premium, "3/10 today" for free.
    pub fn usage_label(&self) -> String {
        match (self.plan, self.daily_limit) {
            (Plan::Premium, _) | (Plan::Free, DailyLimit::Unlimited) => "Unlimited".to_string(),
            (Plan::Free, DailyLimit::Capped(limit)) => format!("{}/{} today", self.usage, limit),
        }
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("name", &self.name)
            .field("plan", &self.plan)
            .field("daily_limit", &self.daily_limit)
            .field("usage", &self.usage)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premium() -> Account {
        Account {
            email: "premium@crezia.com".to_string(),
            password: "premium123".to_string(),
            name: "Premium User".to_string(),
            plan: Plan::Premium,
            daily_limit: DailyLimit::Unlimited,
            usage: 25,
        }
    }

    #[test]
    fn test_new_free_defaults() {
        let account = Account::new_free("A", "a@x.com", "p", 10);
        assert_eq!(account.plan, Plan::Free);
        assert_eq!(account.daily_limit, DailyLimit::Capped(10));
        assert_eq!(account.usage, 0);
        assert_eq!(account.remaining(), Some(10));
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(premium()).unwrap();
        assert_eq!(json["dailyLimit"], -1);
        assert_eq!(json["plan"], "premium");
        assert_eq!(json["usage"], 25);
        assert_eq!(json["email"], "premium@crezia.com");
    }

    #[test]
    fn test_negative_limit_means_unlimited() {
        assert_eq!(DailyLimit::from(-1), DailyLimit::Unlimited);
        assert_eq!(DailyLimit::from(-42), DailyLimit::Unlimited);
        assert_eq!(DailyLimit::from(10), DailyLimit::Capped(10));
        assert_eq!(i64::from(DailyLimit::Unlimited), -1);
    }

    #[test]
    fn test_usage_label() {
        let mut account = Account::new_free("Demo User", "demo@crezia.com", "demo123", 10);
        account.usage = 3;
        assert_eq!(account.usage_label(), "3/10 today");
        assert_eq!(premium().usage_label(), "Unlimited");
    }

    #[test]
    fn test_free_without_cap_is_invalid() {
        let mut account = Account::new_free("A", "a@x.com", "p", 10);
        assert!(account.is_valid());
        account.daily_limit = DailyLimit::Unlimited;
        assert!(!account.is_valid());
        assert!(premium().is_valid());
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", premium());
        assert!(!rendered.contains("premium123"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_display_name_fallback() {
        let account = Account::new_free("  ", "a@x.com", "p", 10);
        assert_eq!(account.display_name(), "User");
    }
}
