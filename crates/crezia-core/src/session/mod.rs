//! Session persistence primitives.
//!
//! The session state machine itself lives in the application layer; this
//! module defines the storage seam it persists through and the snapshot
//! format it writes.

pub mod snapshot;
mod store;

pub use snapshot::SESSION_STORAGE_KEY;
pub use store::KeyValueStore;
