//! Shared handle to the todo list.
//!
//! # Design
//! `Store` wraps a `TodoList` in `Arc<RwLock<_>>`. Reads take the shared lock,
//! mutations take the exclusive lock, and each method holds it for exactly one
//! list operation, so concurrent requests never interleave inside one.
//! Handlers go through these methods and never see the lock.

use std::sync::Arc;

use tokio::sync::RwLock;
use todo_core::{Todo, TodoCreate, TodoError, TodoList, TodoUpdate};

#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<TodoList>>,
}

impl Store {
    pub fn new(list: TodoList) -> Self {
        Self {
            inner: Arc::new(RwLock::new(list)),
        }
    }

    /// A store holding the five starter todos.
    pub fn seeded() -> Self {
        Self::new(TodoList::seeded())
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn get(&self, todo_id: i64) -> Result<Todo, TodoError> {
        self.inner.read().await.get(todo_id).cloned()
    }

    pub async fn list(&self) -> Vec<Todo> {
        self.inner.read().await.list().to_vec()
    }

    /// `None` returns every todo; `Some(n)` returns the first `n`.
    pub async fn list_top_n(&self, n: Option<usize>) -> Vec<Todo> {
        let list = self.inner.read().await;
        match n {
            Some(n) => list.list_top_n(n).to_vec(),
            None => list.list().to_vec(),
        }
    }

    pub async fn create(&self, input: TodoCreate) -> Result<Todo, TodoError> {
        self.inner.write().await.create(input)
    }

    pub async fn update(&self, todo_id: i64, patch: TodoUpdate) -> Result<Todo, TodoError> {
        self.inner.write().await.update(todo_id, patch)
    }

    pub async fn delete(&self, todo_id: i64) -> Result<Todo, TodoError> {
        self.inner.write().await.delete(todo_id)
    }
}
