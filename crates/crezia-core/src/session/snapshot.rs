//! Session snapshot codec.
//!
//! The current account is mirrored to the key-value store as a whole-object
//! JSON document under [`SESSION_STORAGE_KEY`]. There is no version field;
//! a shape change requires clearing stored snapshots.

use crate::account::Account;
use crate::error::Result;

/// Fixed key the session snapshot lives under.
pub const SESSION_STORAGE_KEY: &str = "creziaUser";

/// Serializes an account into its snapshot form.
pub fn encode(account: &Account) -> Result<String> {
    Ok(serde_json::to_string(account)?)
}

/// Parses a snapshot.
///
/// Returns `None` for anything that is not a well-formed, valid account.
/// A broken snapshot means "logged out", never a hard error.
pub fn decode(raw: &str) -> Option<Account> {
    match serde_json::from_str::<Account>(raw) {
        Ok(account) if account.is_valid() => Some(account),
        Ok(account) => {
            tracing::warn!(
                email = %account.email,
                "Discarding session snapshot: free plan without a daily limit"
            );
            None
        }
        Err(e) => {
            tracing::warn!("Discarding malformed session snapshot: {}", e);
            None
        }
    }
}
