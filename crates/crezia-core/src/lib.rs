pub mod account;
pub mod config;
pub mod entitlement;
pub mod error;
pub mod notification;
pub mod session;
pub mod tool;

// Re-export common error type
pub use error::CreziaError;
