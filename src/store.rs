//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity around the
//! localStorage-backed `UserStore`.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use user_store::{RemoteSource, Restore, StoreConfig, Submitted, UserRecord, UserStore};

use crate::commands::HttpRemote;
use crate::storage::BrowserStorage;

/// Global application state with field-level reactivity
#[derive(Debug, Store)]
pub struct AppState {
    /// Users plus form draft, mirrored to localStorage
    pub users: UserStore<BrowserStorage>,
    /// A remote fetch is in flight
    pub loading: bool,
    /// Endpoint used for seeding and refresh
    pub api_url: String,
}

impl AppState {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            users: UserStore::with_config(BrowserStorage, config),
            loading: false,
            api_url: config.api_url.clone(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Restore the local snapshot, seeding from the remote when there is none
///
/// A malformed snapshot is logged and replaced from the remote.
pub fn store_initialize(store: AppStore) {
    let restored = store.users().write().restore();
    match restored {
        Ok(Restore::Restored(count)) => {
            tracing::debug!(count, "Using local snapshot");
        }
        Ok(Restore::Missing) => store_fetch(store, false),
        Err(e) => {
            tracing::error!("Ignoring local snapshot: {}", e);
            store_fetch(store, false);
        }
    }
}

/// Replace local users with the remote list
pub fn store_refresh(store: AppStore) {
    store_fetch(store, true);
}

fn store_fetch(store: AppStore, refresh: bool) {
    let remote = HttpRemote::new(store.api_url().get_untracked());
    store.loading().set(true);
    spawn_local(async move {
        let fetched = remote.fetch_users().await;
        let applied = if refresh {
            store.users().write().apply_refresh(fetched)
        } else {
            store.users().write().apply_remote(fetched)
        };
        if let Err(e) = applied {
            tracing::error!("Failed to save users: {}", e);
        }
        store.loading().set(false);
    });
}

/// Create or update from the current draft
pub fn store_submit(store: &AppStore) -> Option<Submitted> {
    let submitted = store.users().write().submit();
    submitted
        .map_err(|e| tracing::error!("Failed to save users: {}", e))
        .ok()
}

/// Remove a user by ID
pub fn store_remove_user(store: &AppStore, user_id: u64) {
    if let Err(e) = store.users().write().remove(user_id) {
        tracing::error!("Failed to save users: {}", e);
    }
}

/// Load a user into the form for editing
pub fn store_begin_edit(store: &AppStore, user: &UserRecord) {
    store.users().write().begin_edit(user);
}
