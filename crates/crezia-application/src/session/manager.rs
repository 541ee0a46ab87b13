use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crezia_core::account::{
    Account, AccountRepository, CredentialVerifier, DEFAULT_FREE_DAILY_LIMIT,
    PlaintextCredentialVerifier,
};
use crezia_core::entitlement;
use crezia_core::error::{CreziaError, Result};
use crezia_core::session::{KeyValueStore, SESSION_STORAGE_KEY, snapshot};

/// Owns the current session and gates tool usage.
///
/// `SessionManager` is responsible for:
/// - Authenticating and registering accounts against the known-account set
/// - Holding at most one current account
/// - Mirroring that account to the key-value store and restoring it on startup
/// - Enforcing the free-tier quota before each gated action
///
/// Every operation takes the session lock once and finishes before returning,
/// so transitions never interleave.
pub struct SessionManager {
    /// Known-account set used for login and signup
    accounts: Arc<dyn AccountRepository>,
    /// Durable store holding the session snapshot
    store: Arc<dyn KeyValueStore>,
    verifier: Arc<dyn CredentialVerifier>,
    /// Limit given to newly registered accounts
    free_daily_limit: u32,
    current: Mutex<Option<Account>>,
}

impl SessionManager {
    /// Creates a manager with no current session.
    ///
    /// Uses plaintext credential comparison and the default free-tier limit.
    pub fn new(accounts: Arc<dyn AccountRepository>, store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            accounts,
            store,
            verifier: Arc::new(PlaintextCredentialVerifier),
            free_daily_limit: DEFAULT_FREE_DAILY_LIMIT,
            current: Mutex::new(None),
        }
    }

    pub fn with_verifier(mut self, verifier: Arc<dyn CredentialVerifier>) -> Self {
        self.verifier = verifier;
        self
    }

    pub fn with_free_daily_limit(mut self, limit: u32) -> Self {
        self.free_daily_limit = limit;
        self
    }

    /// Logs in with an exact email and password match.
    ///
    /// On success a copy of the account becomes the current session and is
    /// persisted. Unknown email and wrong password both fail with
    /// `AuthFailure`, and leave the session untouched.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<Account> {
        let account = self
            .accounts
            .find_by_email(email)?
            .filter(|account| self.verifier.verify(account, password))
            .ok_or(CreziaError::AuthFailure)?;

        let mut current = self.lock();
        self.write_snapshot(&account)?;
        *current = Some(account.clone());

        tracing::info!(email = %account.email, plan = %account.plan, "Session started");
        Ok(account)
    }

    /// Creates a free-tier account and starts a session for it.
    ///
    /// # Errors
    ///
    /// `DuplicateAccount` if the email is already known (case-sensitive). The
    /// known-account set is not modified in that case.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<Account> {
        let account = Account::new_free(name, email, password, self.free_daily_limit);
        self.accounts.insert(account.clone())?;

        let mut current = self.lock();
        self.write_snapshot(&account)?;
        *current = Some(account.clone());

        tracing::info!(email = %account.email, "Account registered, session started");
        Ok(account)
    }

    /// Clears the current session and deletes the stored snapshot.
    ///
    /// Idempotent. The in-memory session is cleared even if the store
    /// delete fails; that failure is still returned.
    pub fn end_session(&self) -> Result<()> {
        let mut current = self.lock();
        if let Some(account) = current.take() {
            tracing::info!(email = %account.email, "Session ended");
        }
        self.store.delete(SESSION_STORAGE_KEY)
    }

    /// Checks the gate for a tool invocation without charging for it.
    ///
    /// # Errors
    ///
    /// - `NotAuthenticated` when there is no session
    /// - `QuotaExceeded` when a free account has used its daily limit
    pub fn authorize(&self) -> Result<()> {
        entitlement::check(self.lock().as_ref())
    }

    /// Boolean form of [`authorize`](Self::authorize).
    pub fn is_authorized(&self) -> bool {
        self.authorize().is_ok()
    }

    /// Charges one gated action to the current session.
    ///
    /// No-op for premium accounts and when nobody is logged in. For free
    /// accounts the counter is incremented and the snapshot rewritten.
    pub fn record_usage(&self) -> Result<()> {
        let mut current = self.lock();
        match current.as_mut() {
            Some(account) if !account.is_premium() => self.charge(account),
            _ => Ok(()),
        }
    }

    /// Authorizes and charges a gated action in one step.
    ///
    /// Usage is charged here, at the start of the action, regardless of what
    /// the action later does with its input. Returns the updated session.
    pub fn begin_gated_action(&self) -> Result<Account> {
        let mut current = self.lock();
        entitlement::check(current.as_ref())?;

        let account = current.as_mut().ok_or(CreziaError::NotAuthenticated)?;
        if !account.is_premium() {
            self.charge(account)?;
        }
        Ok(account.clone())
    }

    /// Restores the session saved by a previous run.
    ///
    /// Absent, unreadable, or malformed snapshots all leave the manager
    /// logged out. This never fails.
    pub fn restore_session(&self) -> Option<Account> {
        let restored = match self.store.get(SESSION_STORAGE_KEY) {
            Ok(Some(raw)) => snapshot::decode(&raw),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Could not read session snapshot, starting logged out: {}", e);
                None
            }
        };

        match &restored {
            Some(account) => tracing::info!(email = %account.email, "Session restored"),
            None => tracing::debug!("No session to restore"),
        }

        *self.lock() = restored.clone();
        restored
    }

    /// Writes the current session to the store. No-op without a session.
    pub fn persist_session(&self) -> Result<()> {
        let current = self.lock();
        match current.as_ref() {
            Some(account) => self.write_snapshot(account),
            None => Ok(()),
        }
    }

    /// Returns a copy of the current account, if logged in.
    pub fn current_user(&self) -> Option<Account> {
        self.lock().clone()
    }

    /// Usage counter text for the current session.
    pub fn usage_label(&self) -> Option<String> {
        self.lock().as_ref().map(Account::usage_label)
    }

    fn charge(&self, account: &mut Account) -> Result<()> {
        account.usage = account.usage.saturating_add(1);
        tracing::debug!(
            email = %account.email,
            usage = account.usage,
            limit = ?account.daily_limit.cap(),
            "Usage recorded"
        );
        self.write_snapshot(account)
    }

    fn write_snapshot(&self, account: &Account) -> Result<()> {
        let raw = snapshot::encode(account)?;
        self.store.set(SESSION_STORAGE_KEY, &raw)
    }

    fn lock(&self) -> MutexGuard<'_, Option<Account>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crezia_core::account::{DailyLimit, Plan};
    use std::collections::HashMap;

    // Mock AccountRepository for testing
    struct MockAccountRepository {
        accounts: Mutex<Vec<Account>>,
    }

    impl MockAccountRepository {
        fn seeded() -> Self {
            Self {
                accounts: Mutex::new(crezia_core::account::seed_accounts()),
            }
        }
    }

    impl AccountRepository for MockAccountRepository {
        fn find_by_email(&self, email: &str) -> Result<Option<Account>> {
            let accounts = self.accounts.lock().unwrap();
            Ok(accounts.iter().find(|a| a.email == email).cloned())
        }

        fn insert(&self, account: Account) -> Result<()> {
            let mut accounts = self.accounts.lock().unwrap();
            if accounts.iter().any(|a| a.email == account.email) {
                return Err(CreziaError::duplicate_account(account.email));
            }
            accounts.push(account);
            Ok(())
        }

        fn list(&self) -> Result<Vec<Account>> {
            Ok(self.accounts.lock().unwrap().clone())
        }
    }

    // Mock KeyValueStore that can be switched into a failing mode
    #[derive(Default)]
    struct MockStore {
        entries: Mutex<HashMap<String, String>>,
        fail_writes: Mutex<bool>,
    }

    impl MockStore {
        fn fail_writes(&self) {
            *self.fail_writes.lock().unwrap() = true;
        }

        fn raw(&self) -> Option<String> {
            self.entries.lock().unwrap().get(SESSION_STORAGE_KEY).cloned()
        }
    }

    impl KeyValueStore for MockStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if *self.fail_writes.lock().unwrap() {
                return Err(CreziaError::io("disk full"));
            }
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        fn delete(&self, key: &str) -> Result<()> {
            self.entries.lock().unwrap().remove(key);
            Ok(())
        }
    }

    struct RejectAll;

    impl CredentialVerifier for RejectAll {
        fn verify(&self, _account: &Account, _presented_password: &str) -> bool {
            false
        }
    }

    fn manager() -> (SessionManager, Arc<MockStore>) {
        let store = Arc::new(MockStore::default());
        let manager = SessionManager::new(Arc::new(MockAccountRepository::seeded()), store.clone());
        (manager, store)
    }

    #[test]
    fn test_authenticate_persists_snapshot() {
        let (manager, store) = manager();
        let account = manager.authenticate("demo@crezia.com", "demo123").unwrap();

        assert_eq!(manager.current_user(), Some(account.clone()));
        let saved = snapshot::decode(&store.raw().unwrap()).unwrap();
        assert_eq!(saved, account);
    }

    #[test]
    fn test_failed_authenticate_keeps_existing_session() {
        let (manager, _) = manager();
        manager.authenticate("premium@crezia.com", "premium123").unwrap();

        let err = manager.authenticate("demo@crezia.com", "wrong").unwrap_err();

        assert!(err.is_auth_failure());
        assert_eq!(
            manager.current_user().unwrap().email,
            "premium@crezia.com"
        );
    }

    #[test]
    fn test_verifier_is_consulted() {
        let (manager, _) = manager();
        let manager = manager.with_verifier(Arc::new(RejectAll));
        assert!(
            manager
                .authenticate("demo@crezia.com", "demo123")
                .unwrap_err()
                .is_auth_failure()
        );
    }

    #[test]
    fn test_register_uses_configured_limit() {
        let (manager, _) = manager();
        let manager = manager.with_free_daily_limit(3);
        let account = manager.register("A", "a@x.com", "p").unwrap();
        assert_eq!(account.daily_limit, DailyLimit::Capped(3));
        assert_eq!(account.plan, Plan::Free);
    }

    #[test]
    fn test_record_usage_without_session_is_noop() {
        let (manager, store) = manager();
        manager.record_usage().unwrap();
        assert!(manager.current_user().is_none());
        assert!(store.raw().is_none());
    }

    #[test]
    fn test_premium_usage_is_not_charged() {
        let (manager, _) = manager();
        manager.authenticate("premium@crezia.com", "premium123").unwrap();
        manager.record_usage().unwrap();
        let after = manager.begin_gated_action().unwrap();
        assert_eq!(after.usage, 25);
    }

    #[test]
    fn test_begin_gated_action_charges_once() {
        let (manager, store) = manager();
        manager.authenticate("demo@crezia.com", "demo123").unwrap();

        let after = manager.begin_gated_action().unwrap();

        assert_eq!(after.usage, 4);
        assert_eq!(snapshot::decode(&store.raw().unwrap()).unwrap().usage, 4);
    }

    #[test]
    fn test_begin_gated_action_does_not_charge_when_blocked() {
        let (manager, _) = manager();
        manager.register("A", "a@x.com", "p").unwrap();
        for _ in 0..10 {
            manager.begin_gated_action().unwrap();
        }

        let err = manager.begin_gated_action().unwrap_err();

        assert!(err.is_quota_exceeded());
        assert_eq!(manager.current_user().unwrap().usage, 10);
    }

    #[test]
    fn test_session_copy_is_independent_of_known_account() {
        let repo = Arc::new(MockAccountRepository::seeded());
        let manager = SessionManager::new(repo.clone(), Arc::new(MockStore::default()));
        manager.authenticate("demo@crezia.com", "demo123").unwrap();
        manager.record_usage().unwrap();

        let known = repo.find_by_email("demo@crezia.com").unwrap().unwrap();
        assert_eq!(known.usage, 3);
        assert_eq!(manager.current_user().unwrap().usage, 4);
    }

    #[test]
    fn test_store_failure_on_login_leaves_logged_out() {
        let (manager, store) = manager();
        store.fail_writes();

        let err = manager.authenticate("demo@crezia.com", "demo123").unwrap_err();

        assert!(matches!(err, CreziaError::Io { .. }));
        assert!(manager.current_user().is_none());
    }

    #[test]
    fn test_restore_discards_malformed_snapshot() {
        let (manager, store) = manager();
        store.set(SESSION_STORAGE_KEY, "{\"email\":").unwrap();
        assert!(manager.restore_session().is_none());
        assert!(manager.current_user().is_none());
    }

    #[test]
    fn test_usage_label_follows_session() {
        let (manager, _) = manager();
        assert_eq!(manager.usage_label(), None);
        manager.authenticate("demo@crezia.com", "demo123").unwrap();
        assert_eq!(manager.usage_label().as_deref(), Some("3/10 today"));
        manager.authenticate("premium@crezia.com", "premium123").unwrap();
        assert_eq!(manager.usage_label().as_deref(), Some("Unlimited"));
    }

    #[test]
    fn test_end_session_is_idempotent() {
        let (manager, store) = manager();
        manager.end_session().unwrap();
        manager.authenticate("demo@crezia.com", "demo123").unwrap();
        manager.end_session().unwrap();
        manager.end_session().unwrap();
        assert!(manager.current_user().is_none());
        assert!(store.raw().is_none());
    }
}
