use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use crezia_application::{AuthUseCase, Scheduler, SessionManager, TokioScheduler, ToolUseCase};
use crezia_core::config::CreziaConfig;
use crezia_core::session::KeyValueStore;
use crezia_infrastructure::{
    ConfigService, CreziaPaths, InMemoryAccountRepository, InMemoryKeyValueStore, ServiceType,
    TomlKeyValueStore,
};

/// Everything a command needs, wired once at startup.
pub struct AppContext {
    pub config: CreziaConfig,
    pub log_dir: PathBuf,
    pub sessions: Arc<SessionManager>,
    pub auth: AuthUseCase,
    pub tools: ToolUseCase,
}

impl AppContext {
    /// Loads configuration and builds the service graph.
    ///
    /// The known-account set always starts from the seed accounts. With
    /// `ephemeral` the session snapshot is kept in memory instead of
    /// `store.toml`.
    pub fn build(config_dir: Option<&Path>, ephemeral: bool) -> Result<Self> {
        let paths = CreziaPaths::new(config_dir);
        let config = ConfigService::new(config_dir)?
            .get_config()
            .context("Failed to load configuration")?;
        let log_dir = paths.get_path(ServiceType::Logs)?;

        let store: Arc<dyn KeyValueStore> = if ephemeral {
            Arc::new(InMemoryKeyValueStore::new())
        } else {
            Arc::new(TomlKeyValueStore::new(config_dir)?)
        };

        let sessions = Arc::new(
            SessionManager::new(Arc::new(InMemoryAccountRepository::seeded()), store)
                .with_free_daily_limit(config.quota.free_daily_limit),
        );

        let scheduler: Arc<dyn Scheduler> = Arc::new(TokioScheduler);
        let auth = AuthUseCase::new(
            sessions.clone(),
            scheduler.clone(),
            config.latency.clone(),
        );
        let tools = ToolUseCase::new(sessions.clone(), scheduler, config.latency.clone());

        Ok(Self {
            config,
            log_dir,
            sessions,
            auth,
            tools,
        })
    }
}
