//! User Store
//!
//! Target-independent core of the user manager:
//! - models: user records and the form draft
//! - store: CRUD over the in-memory list with whole-list snapshots
//! - storage / remote: the persistence and seeding seams
//!
//! Builds for both the host (tests) and `wasm32-unknown-unknown` (the UI).

mod config;
mod error;
mod id;
mod models;
mod remote;
mod storage;
mod store;

pub use config::{StoreConfig, DEFAULT_API_URL, DEFAULT_LOG_LEVEL, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use id::IdGenerator;
pub use models::{DraftForm, EditState, UserRecord};
pub use remote::{RemoteSource, StaticRemote};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::{Restore, Seed, Submitted, UserStore};
