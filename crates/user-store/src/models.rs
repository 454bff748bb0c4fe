//! Store Models
//!
//! User records and the form draft that edits them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One managed user (matches the remote `/users` payload)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Remote fields the form never edits (username, address, ...), kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            extra: Map::new(),
        }
    }
}

/// In-progress create or edit, bound to the form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftForm {
    pub name: String,
    pub email: String,
    /// `Some(id)` while editing an existing record
    pub editing_id: Option<u64>,
}

impl DraftForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            editing_id: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Both required inputs hold something other than whitespace
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn edit_state(&self) -> EditState {
        match self.editing_id {
            Some(id) => EditState::Editing(id),
            None => EditState::Idle,
        }
    }
}

/// Whether the next submit creates or updates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing(u64),
}
