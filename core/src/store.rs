//! Ordered in-memory collection of todos.
//!
//! # Design
//! `TodoList` keeps todos in a `Vec` in creation order. Every lookup is a
//! linear scan, which is fine for the handful of items the service holds.
//! Ids come from `max(existing) + 1`; an empty list starts at 1.
//!
//! The list takes `&mut self` for mutations and does no locking of its own.
//! Sharing across requests is the caller's job.

use validator::Validate;

use crate::error::TodoError;
use crate::types::{Priority, Todo, TodoCreate, TodoUpdate};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The five starter todos the service boots with, ids 1 through 5.
    pub fn seeded() -> Self {
        let seed = |todo_id, name: &str, description: &str, priority| Todo {
            todo_id,
            todo_name: name.to_string(),
            todo_description: description.to_string(),
            priority,
        };
        Self {
            todos: vec![
                seed(
                    1,
                    "Workout",
                    "Complete a 1-hour gym session focusing on strength and cardio",
                    Priority::Medium,
                ),
                seed(
                    2,
                    "Reading",
                    "Read 10 pages of a personal development or technical book",
                    Priority::Low,
                ),
                seed(
                    3,
                    "Grocery Shopping",
                    "Buy weekly groceries including fruits, vegetables, and essentials",
                    Priority::High,
                ),
                seed(
                    4,
                    "Exam Preparation",
                    "Review key chapters and solve past exam papers for 2 hours",
                    Priority::High,
                ),
                seed(
                    5,
                    "Meditation",
                    "Practice guided meditation for 20 minutes to relax and refocus",
                    Priority::Low,
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// The id the next `create` will assign.
    pub fn next_id(&self) -> i64 {
        self.todos.iter().map(|t| t.todo_id).max().map_or(1, |max| max + 1)
    }

    pub fn get(&self, todo_id: i64) -> Result<&Todo, TodoError> {
        self.todos
            .iter()
            .find(|t| t.todo_id == todo_id)
            .ok_or(TodoError::NotFound(todo_id))
    }

    pub fn list(&self) -> &[Todo] {
        &self.todos
    }

    /// The first `n` todos in list order. Zero yields an empty slice and a
    /// count past the end yields the whole list.
    pub fn list_top_n(&self, n: usize) -> &[Todo] {
        &self.todos[..n.min(self.todos.len())]
    }

    pub fn create(&mut self, input: TodoCreate) -> Result<Todo, TodoError> {
        input.validate()?;
        let todo = input.into_todo(self.next_id());
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Apply `patch` to the todo with `todo_id` and return the result.
    ///
    /// The patch is validated before the lookup, so an invalid patch is
    /// reported even when the id does not exist.
    pub fn update(&mut self, todo_id: i64, patch: TodoUpdate) -> Result<Todo, TodoError> {
        patch.validate()?;
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.todo_id == todo_id)
            .ok_or(TodoError::NotFound(todo_id))?;
        patch.apply_to(todo);
        Ok(todo.clone())
    }

    /// Remove the todo with `todo_id`, shifting later todos down.
    pub fn delete(&mut self, todo_id: i64) -> Result<Todo, TodoError> {
        let index = self
            .todos
            .iter()
            .position(|t| t.todo_id == todo_id)
            .ok_or(TodoError::NotFound(todo_id))?;
        Ok(self.todos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input(name: &str) -> TodoCreate {
        TodoCreate {
            todo_name: name.to_string(),
            todo_description: "d".to_string(),
            priority: Priority::Low,
        }
    }

    fn ids(list: &TodoList) -> Vec<i64> {
        list.list().iter().map(|t| t.todo_id).collect()
    }

    #[test]
    fn seeded_list_holds_ids_one_to_five() {
        let list = TodoList::seeded();
        assert_eq!(ids(&list), vec![1, 2, 3, 4, 5]);
        assert_eq!(list.get(3).unwrap().priority, Priority::High);
    }

    #[test]
    fn create_in_empty_list_starts_at_one() {
        let mut list = TodoList::new();
        assert_eq!(list.next_id(), 1);
        let todo = list.create(create_input("First")).unwrap();
        assert_eq!(todo.todo_id, 1);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn create_assigns_max_plus_one() {
        let mut list = TodoList::seeded();
        let todo = list.create(create_input("Test")).unwrap();
        assert_eq!(todo.todo_id, 6);
        assert_eq!(todo.priority, Priority::Low);
        assert_eq!(list.list().last(), Some(&todo));
    }

    #[test]
    fn create_uses_max_not_len_after_gaps() {
        let mut list = TodoList::seeded();
        list.delete(2).unwrap();
        assert_eq!(list.create(create_input("Gap")).unwrap().todo_id, 6);
    }

    #[test]
    fn create_reuses_freed_max_id() {
        let mut list = TodoList::seeded();
        list.delete(5).unwrap();
        assert_eq!(list.create(create_input("Again")).unwrap().todo_id, 5);
    }

    #[test]
    fn create_rejects_short_name_without_mutating() {
        let mut list = TodoList::seeded();
        let err = list.create(create_input("ab")).unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let list = TodoList::seeded();
        assert!(matches!(list.get(42), Err(TodoError::NotFound(42))));
    }

    #[test]
    fn list_top_n_takes_prefix() {
        let list = TodoList::seeded();
        assert_eq!(list.list_top_n(2).len(), 2);
        assert_eq!(list.list_top_n(2)[1].todo_id, 2);
        assert!(list.list_top_n(0).is_empty());
        assert_eq!(list.list_top_n(100).len(), 5);
    }

    #[test]
    fn update_changes_only_supplied_fields_and_is_idempotent() {
        let mut list = TodoList::seeded();
        let patch = TodoUpdate {
            todo_name: Some("Evening workout".to_string()),
            ..TodoUpdate::default()
        };
        let once = list.update(1, patch.clone()).unwrap();
        let snapshot = list.clone();
        let twice = list.update(1, patch).unwrap();

        assert_eq!(once, twice);
        assert_eq!(list, snapshot);
        assert_eq!(twice.todo_name, "Evening workout");
        assert_eq!(
            twice.todo_description,
            "Complete a 1-hour gym session focusing on strength and cardio"
        );
        assert_eq!(twice.priority, Priority::Medium);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut list = TodoList::seeded();
        let err = list.update(99, TodoUpdate::default()).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(99)));
    }

    #[test]
    fn update_rejects_long_name() {
        let mut list = TodoList::seeded();
        let patch = TodoUpdate {
            todo_name: Some("x".repeat(513)),
            ..TodoUpdate::default()
        };
        assert!(matches!(list.update(1, patch), Err(TodoError::Validation(_))));
        assert_eq!(list.get(1).unwrap().todo_name, "Workout");
    }

    #[test]
    fn delete_removes_in_place_and_twice_is_not_found() {
        let mut list = TodoList::seeded();
        let removed = list.delete(3).unwrap();
        assert_eq!(removed.todo_name, "Grocery Shopping");
        assert_eq!(ids(&list), vec![1, 2, 4, 5]);
        assert!(matches!(list.get(3), Err(TodoError::NotFound(3))));
        assert!(matches!(list.delete(3), Err(TodoError::NotFound(3))));
    }
}
