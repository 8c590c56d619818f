//! Error types for the todo domain.
//!
//! `NotFound` is its own variant because the HTTP layer answers it with 404,
//! while everything the caller sent wrong lands in `Validation` and becomes a
//! 422.

use thiserror::Error;
use validator::ValidationErrors;

/// Errors returned by `TodoList` operations.
#[derive(Debug, Error)]
pub enum TodoError {
    /// No todo in the list carries this id.
    #[error("todo {0} not found")]
    NotFound(i64),

    /// The input broke one or more field constraints.
    #[error("invalid todo: {0}")]
    Validation(#[from] ValidationErrors),
}

/// A priority integer outside `1..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("priority must be 1 (high), 2 (medium) or 3 (low), got {0}")]
pub struct InvalidPriority(pub u8);
