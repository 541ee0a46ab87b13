pub mod config_service;
pub mod memory_account_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::memory_account_repository::InMemoryAccountRepository;
pub use crate::paths::{CreziaPaths, ServiceType};
pub use crate::storage::{InMemoryKeyValueStore, TomlKeyValueStore};
