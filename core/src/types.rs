//! Domain types for the todo API.
//!
//! # Design
//! `Todo` is the stored record. `TodoCreate` and `TodoUpdate` are the two
//! inputs callers send; both derive `Validate` so the length rule on
//! `todo_name` (3 to 512 characters) is checked in one place. `Priority`
//! travels as a bare integer (`1`, `2`, `3`) and is parsed through
//! `TryFrom<u8>` so out-of-range values fail at deserialization.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::InvalidPriority;

/// Urgency of a todo. Lower numbers are more urgent, so the derived `Ord`
/// sorts `High` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority as u8
    }
}

impl TryFrom<u8> for Priority {
    type Error = InvalidPriority;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(InvalidPriority(other)),
        }
    }
}

/// A single todo item held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: i64,
    pub todo_name: String,
    pub todo_description: String,
    pub priority: Priority,
}

/// Request payload for creating a new todo. The id is assigned by the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TodoCreate {
    #[validate(length(min = 3, max = 512, message = "todo_name must be between 3 and 512 characters"))]
    pub todo_name: String,
    pub todo_description: String,
    #[serde(default)]
    pub priority: Priority,
}

impl TodoCreate {
    pub(crate) fn into_todo(self, todo_id: i64) -> Todo {
        Todo {
            todo_id,
            todo_name: self.todo_name,
            todo_description: self.todo_description,
            priority: self.priority,
        }
    }
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON (and not `null`) are applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 3, max = 512, message = "todo_name must be between 3 and 512 characters"))]
    pub todo_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TodoUpdate {
    /// Overwrite every field of `todo` that this patch carries.
    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(name) = self.todo_name {
            todo.todo_name = name;
        }
        if let Some(description) = self.todo_description {
            todo.todo_description = description;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}
