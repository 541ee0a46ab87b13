//! Fixture accounts available at startup.

use super::model::{Account, DailyLimit, Plan};

/// Daily limit given to newly registered free accounts.
pub const DEFAULT_FREE_DAILY_LIMIT: u32 = 10;

/// Returns the two demo accounts: one free with usage already at 3, and one
/// premium.
pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            email: "demo@crezia.com".to_string(),
            password: "demo123".to_string(),
            name: "Demo User".to_string(),
            plan: Plan::Free,
            daily_limit: DailyLimit::Capped(DEFAULT_FREE_DAILY_LIMIT),
            usage: 3,
        },
        Account {
            email: "premium@crezia.com".to_string(),
            password: "premium123".to_string(),
            name: "Premium User".to_string(),
            plan: Plan::Premium,
            daily_limit: DailyLimit::Unlimited,
            usage: 25,
        },
    ]
}
