//! Remote User Source
//!
//! Read-only origin the store seeds from when no local snapshot exists.

use std::cell::Cell;

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::models::UserRecord;

/// Fetches the full user list from an external origin
///
/// Not `Send`: the browser fetch future lives on the single UI thread.
#[async_trait(?Send)]
pub trait RemoteSource {
    async fn fetch_users(&self) -> StoreResult<Vec<UserRecord>>;
}

/// Remote that answers with a fixed list or a fixed failure
#[derive(Debug)]
pub struct StaticRemote {
    result: Result<Vec<UserRecord>, String>,
    calls: Cell<usize>,
}

impl StaticRemote {
    pub fn ok(users: Vec<UserRecord>) -> Self {
        Self {
            result: Ok(users),
            calls: Cell::new(0),
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            calls: Cell::new(0),
        }
    }

    /// Number of fetches performed so far
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

#[async_trait(?Send)]
impl RemoteSource for StaticRemote {
    async fn fetch_users(&self) -> StoreResult<Vec<UserRecord>> {
        self.calls.set(self.calls.get() + 1);
        self.result.clone().map_err(StoreError::remote)
    }
}
