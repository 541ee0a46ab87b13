pub mod atomic_toml;
pub mod memory_kv_store;
pub mod toml_kv_store;

pub use atomic_toml::AtomicTomlFile;
pub use memory_kv_store::InMemoryKeyValueStore;
pub use toml_kv_store::TomlKeyValueStore;
