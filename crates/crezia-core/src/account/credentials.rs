//! Credential comparison.
//!
//! Every password check in the application goes through [`CredentialVerifier`]
//! so the plaintext comparison used by the demo store can be swapped for a real
//! hash check without touching the session logic.

use super::model::Account;

/// Decides whether a presented password unlocks an account.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, account: &Account, presented_password: &str) -> bool;
}

/// Exact string comparison against the stored plaintext password.
///
/// # Security Note
///
/// Demo-only. Passwords are stored unhashed and compared directly, with no
/// rate limiting. Do not use this against real credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextCredentialVerifier;

impl CredentialVerifier for PlaintextCredentialVerifier {
    fn verify(&self, account: &Account, presented_password: &str) -> bool {
        account.password == presented_password
    }
}
