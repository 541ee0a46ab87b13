//! Account repository trait.

use crate::error::Result;

use super::model::Account;

/// Repository for the set of known accounts.
///
/// Emails are unique within the set and compared case-sensitively.
pub trait AccountRepository: Send + Sync {
    /// Finds an account by exact email match.
    fn find_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Adds a new account.
    ///
    /// Fails with `CreziaError::DuplicateAccount` if the email is already
    /// present, leaving the set unchanged.
    fn insert(&self, account: Account) -> Result<()>;

    /// Returns every known account in insertion order.
    ///
    /// Not used by the session flow; tests read the set back through it.
    fn list(&self) -> Result<Vec<Account>>;
}
