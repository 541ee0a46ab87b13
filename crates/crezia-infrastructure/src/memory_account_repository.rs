//! In-memory known-account set.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crezia_core::account::{Account, AccountRepository, seed_accounts};
use crezia_core::error::{CreziaError, Result};

/// Holds known accounts for the lifetime of the process.
///
/// Nothing is written to disk: accounts registered during a run are gone
/// after a restart, while the session snapshot (stored separately) survives.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<Vec<Account>>,
}

impl InMemoryAccountRepository {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set containing the demo fixture accounts.
    pub fn seeded() -> Self {
        Self::with_accounts(seed_accounts())
    }

    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts: RwLock::new(accounts),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Account>>> {
        self.accounts
            .read()
            .map_err(|e| CreziaError::data_access(format!("Account set lock poisoned: {}", e)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Account>>> {
        self.accounts
            .write()
            .map_err(|e| CreziaError::data_access(format!("Account set lock poisoned: {}", e)))
    }
}

impl AccountRepository for InMemoryAccountRepository {
    fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
        Ok(self.read()?.iter().find(|a| a.email == email).cloned())
    }

    fn insert(&self, account: Account) -> Result<()> {
        let mut accounts = self.write()?;
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(CreziaError::duplicate_account(account.email));
        }
        tracing::debug!(email = %account.email, "Registered account");
        accounts.push(account);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Account>> {
        Ok(self.read()?.clone())
    }
}
