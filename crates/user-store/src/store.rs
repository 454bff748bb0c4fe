//! User Store
//!
//! Owns the authoritative user list and the form draft. Every mutation
//! re-serializes the whole list into the backing storage under one key.

use tracing::{debug, error, info, warn};

use crate::config::{StoreConfig, DEFAULT_STORAGE_KEY};
use crate::error::{StoreError, StoreResult};
use crate::id::IdGenerator;
use crate::models::{DraftForm, EditState, UserRecord};
use crate::remote::RemoteSource;
use crate::storage::KeyValueStorage;

/// Where `initialize` got the list from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Local snapshot adopted, remote never asked
    Local(usize),
    /// Fetched from the remote and snapshotted
    Remote(usize),
    /// No snapshot and the remote fetch failed
    Empty,
}

/// Outcome of reading the local snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Restore {
    Restored(usize),
    Missing,
}

/// What a form submit did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created(u64),
    Updated(u64),
}

#[derive(Debug)]
pub struct UserStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    users: Vec<UserRecord>,
    draft: DraftForm,
    ids: IdGenerator,
}

impl<S: KeyValueStorage> UserStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    pub fn with_config(storage: S, config: &StoreConfig) -> Self {
        Self::with_key(storage, &config.storage_key)
    }

    fn with_key(storage: S, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
            users: Vec::new(),
            draft: DraftForm::default(),
            ids: IdGenerator::new(),
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn users(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn draft(&self) -> &DraftForm {
        &self.draft
    }

    pub fn edit_state(&self) -> EditState {
        self.draft.edit_state()
    }

    pub fn find(&self, id: u64) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    // ========================
    // Seeding
    // ========================

    /// Adopt the local snapshot if one exists, otherwise seed from `remote`
    ///
    /// A present snapshot always wins; `refresh` is the explicit way back to the remote.
    pub async fn initialize<R>(&mut self, remote: &R) -> StoreResult<Seed>
    where
        R: RemoteSource + ?Sized,
    {
        match self.restore()? {
            Restore::Restored(count) => Ok(Seed::Local(count)),
            Restore::Missing => {
                if self.load(remote).await? {
                    Ok(Seed::Remote(self.users.len()))
                } else {
                    Ok(Seed::Empty)
                }
            }
        }
    }

    /// Read the snapshot under the store key into memory
    pub fn restore(&mut self) -> StoreResult<Restore> {
        let raw = match self.storage.get(&self.key)? {
            Some(raw) if !raw.is_empty() => raw,
            _ => {
                debug!(key = %self.key, "No local snapshot");
                return Ok(Restore::Missing);
            }
        };

        let users: Vec<UserRecord> =
            serde_json::from_str(&raw).map_err(|source| StoreError::MalformedSnapshot {
                key: self.key.clone(),
                source,
            })?;
        let count = users.len();
        self.replace_users(users);
        info!(count, "Restored users from local snapshot");
        Ok(Restore::Restored(count))
    }

    /// Fetch the remote list, replacing and persisting on success
    ///
    /// Returns `Ok(false)` when the fetch failed; the list is then untouched.
    pub async fn load<R>(&mut self, remote: &R) -> StoreResult<bool>
    where
        R: RemoteSource + ?Sized,
    {
        let fetched = remote.fetch_users().await;
        self.apply_remote(fetched)
    }

    /// Overwrite local state with the remote list, snapshot or not
    pub async fn refresh<R>(&mut self, remote: &R) -> StoreResult<bool>
    where
        R: RemoteSource + ?Sized,
    {
        let fetched = remote.fetch_users().await;
        self.apply_refresh(fetched)
    }

    /// `apply_remote`, then drop a draft whose user no longer exists
    pub fn apply_refresh(&mut self, fetched: StoreResult<Vec<UserRecord>>) -> StoreResult<bool> {
        let applied = self.apply_remote(fetched)?;
        if let Some(id) = self.draft.editing_id {
            if applied && self.find(id).is_none() {
                debug!(id, "Edited user gone after refresh, dropping draft");
                self.draft.clear();
            }
        }
        Ok(applied)
    }

    /// Apply the outcome of a remote fetch
    ///
    /// Fetch errors are logged, not returned. Only persistence errors propagate.
    pub fn apply_remote(&mut self, fetched: StoreResult<Vec<UserRecord>>) -> StoreResult<bool> {
        match fetched {
            Ok(users) => {
                info!(count = users.len(), "Loaded users from remote");
                self.replace_users(users);
                self.persist()?;
                Ok(true)
            }
            Err(e) => {
                error!("Error fetching users: {}", e);
                Ok(false)
            }
        }
    }

    // ========================
    // CRUD
    // ========================

    /// Append a new user built from `draft`, returning its id
    pub fn add(&mut self, draft: DraftForm) -> StoreResult<u64> {
        let id = self.ids.next_id()?;
        self.users.push(UserRecord::new(id, draft.name, draft.email));
        self.draft.clear();
        self.persist()?;
        debug!(id, "Added user");
        Ok(id)
    }

    /// Overwrite name and email of user `id`; unknown ids change nothing
    pub fn update(&mut self, id: u64, draft: DraftForm) -> StoreResult<bool> {
        let found = match self.users.iter_mut().find(|user| user.id == id) {
            Some(user) => {
                user.name = draft.name;
                user.email = draft.email;
                true
            }
            None => {
                warn!(id, "Update for unknown user ignored");
                false
            }
        };
        self.draft.clear();
        self.persist()?;
        Ok(found)
    }

    /// Delete user `id`; unknown ids change nothing
    ///
    /// A draft editing the removed user falls back to idle.
    pub fn remove(&mut self, id: u64) -> StoreResult<bool> {
        let before = self.users.len();
        self.users.retain(|user| user.id != id);
        let removed = self.users.len() != before;

        if self.draft.editing_id == Some(id) {
            self.draft.clear();
        }
        self.persist()?;
        debug!(id, removed, "Removed user");
        Ok(removed)
    }

    // ========================
    // Draft
    // ========================

    pub fn begin_edit(&mut self, record: &UserRecord) {
        self.draft = DraftForm {
            name: record.name.clone(),
            email: record.email.clone(),
            editing_id: Some(record.id),
        };
    }

    pub fn cancel_edit(&mut self) {
        self.draft.clear();
    }

    pub fn set_draft_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_draft_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    /// Create or update from the current draft, depending on `editing_id`
    pub fn submit(&mut self) -> StoreResult<Submitted> {
        let draft = self.draft.clone();
        match draft.editing_id {
            Some(id) => {
                self.update(id, draft)?;
                Ok(Submitted::Updated(id))
            }
            None => self.add(draft).map(Submitted::Created),
        }
    }

    // ========================
    // Persistence
    // ========================

    fn replace_users(&mut self, users: Vec<UserRecord>) {
        if let Some(max) = users.iter().map(|user| user.id).max() {
            self.ids.observe(max);
        }
        self.users = users;
    }

    fn persist(&self) -> StoreResult<()> {
        let json = serde_json::to_string(&self.users)
            .map_err(|source| StoreError::Serialize { source })?;
        self.storage.set(&self.key, &json)
    }
}
