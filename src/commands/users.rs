//! User Commands
//!
//! Read-only `GET /users` against the configured endpoint.

use async_trait::async_trait;
use user_store::{RemoteSource, StoreError, StoreResult, UserRecord};

/// REST endpoint returning a JSON array of users
#[derive(Debug, Clone)]
pub struct HttpRemote {
    url: String,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RemoteSource for HttpRemote {
    async fn fetch_users(&self) -> StoreResult<Vec<UserRecord>> {
        fetch_users(&self.url).await
    }
}

/// No auth, no pagination, no timeout
pub async fn fetch_users(url: &str) -> StoreResult<Vec<UserRecord>> {
    tracing::debug!(url, "Fetching users");
    let response = reqwest::get(url)
        .await
        .and_then(|res| res.error_for_status())
        .map_err(|e| StoreError::remote(e.to_string()))?;
    response
        .json::<Vec<UserRecord>>()
        .await
        .map_err(|e| StoreError::remote(format!("bad body: {}", e)))
}
