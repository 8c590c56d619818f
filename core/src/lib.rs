//! Domain model and in-memory collection for the todo service.
//!
//! # Overview
//! Defines the wire-shaped `Todo` record, its creation and patch inputs, and
//! `TodoList`, the ordered collection every request operates on.
//!
//! # Design
//! - The crate is synchronous and I/O free. Locking and HTTP live in
//!   `todo-server`.
//! - Field names mirror the JSON contract (`todo_id`, `todo_name`, ...) so
//!   validation errors point at the field the caller actually sent.
//! - `TodoList` validates its own inputs; it never holds a todo whose name
//!   breaks the length rule.

pub mod error;
pub mod store;
pub mod types;

pub use error::{InvalidPriority, TodoError};
pub use store::TodoList;
pub use types::{Priority, Todo, TodoCreate, TodoUpdate};
