//! Account domain module.
//!
//! - `model`: account, plan and daily limit types
//! - `credentials`: the password comparison seam
//! - `repository`: the known-account set trait
//! - `seed`: fixture accounts loaded at startup

mod credentials;
mod model;
mod repository;
mod seed;

pub use credentials::{CredentialVerifier, PlaintextCredentialVerifier};
pub use model::{Account, DailyLimit, Plan};
pub use repository::AccountRepository;
pub use seed::{DEFAULT_FREE_DAILY_LIMIT, seed_accounts};
