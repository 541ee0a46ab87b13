//! Login, signup and logout with simulated latency.

use std::sync::Arc;

use crezia_core::account::Account;
use crezia_core::config::LatencySettings;
use crezia_core::error::Result;
use tokio_util::sync::CancellationToken;

use crate::scheduler::Scheduler;
use crate::session::SessionManager;

/// Authentication flows as the presentation layer drives them.
///
/// The simulated delay runs first; the session only changes once it has
/// elapsed, so a cancelled login or signup leaves no trace.
pub struct AuthUseCase {
    sessions: Arc<SessionManager>,
    scheduler: Arc<dyn Scheduler>,
    latency: LatencySettings,
}

impl AuthUseCase {
    pub fn new(
        sessions: Arc<SessionManager>,
        scheduler: Arc<dyn Scheduler>,
        latency: LatencySettings,
    ) -> Self {
        Self {
            sessions,
            scheduler,
            latency,
        }
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<Account> {
        self.scheduler
            .defer(self.latency.login_delay(), cancel)
            .await?;
        self.sessions.authenticate(email, password)
    }

    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
        cancel: &CancellationToken,
    ) -> Result<Account> {
        self.scheduler
            .defer(self.latency.signup_delay(), cancel)
            .await?;
        self.sessions.register(name, email, password)
    }

    pub fn logout(&self) -> Result<()> {
        self.sessions.end_session()
    }
}
