//! Session management.
//!
//! - `manager`: the session state machine (login, signup, logout, quota gate,
//!   snapshot persistence and restore)

mod manager;

pub use manager::SessionManager;
