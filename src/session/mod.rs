//! Session state shared between the intake flows, persisted through a key/value store.

mod state;
mod store;

pub use state::{keys, Language, SessionState};
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError};
