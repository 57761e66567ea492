use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Lifecycle status of a Todo item, serialized with its wire label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TodoStatus {
    #[serde(rename = "TO-DO")]
    Todo,
    #[serde(rename = "DOING")]
    Doing,
    #[serde(rename = "DONE")]
    Done,
}

impl TodoStatus {
    pub const LABELS: [&'static str; 3] = ["TO-DO", "DOING", "DONE"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "TO-DO",
            TodoStatus::Doing => "DOING",
            TodoStatus::Done => "DONE",
        }
    }

    /// Parses a wire label. Matching is exact: `"done"` is not `DONE`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "TO-DO" => Some(TodoStatus::Todo),
            "DOING" => Some(TodoStatus::Doing),
            "DONE" => Some(TodoStatus::Done),
            _ => None,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Data model representing a Todo item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub todo_name: String,
    pub deadline: String,
    pub status: TodoStatus,
}

impl TodoItem {
    /// A fresh item with a generated id, starting in `TO-DO`.
    pub fn new(todo_name: String, deadline: String) -> Self {
        TodoItem {
            id: Uuid::new_v4().to_string(),
            todo_name,
            deadline,
            status: TodoStatus::Todo,
        }
    }
}

/// Owner of a todo collection.
///
/// `todos` is only reachable through the mutators below so that
/// `todo_count` always mirrors its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_name: String,
    pub user_email: String,
    todos: Vec<TodoItem>,
    todo_count: usize,
}

impl User {
    pub fn new(user_name: impl Into<String>, user_email: impl Into<String>) -> Self {
        User {
            user_name: user_name.into(),
            user_email: user_email.into(),
            todos: Vec::new(),
            todo_count: 0,
        }
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn todo_count(&self) -> usize {
        self.todo_count
    }

    pub fn find_todo(&self, id: &str) -> Option<&TodoItem> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn find_todo_mut(&mut self, id: &str) -> Option<&mut TodoItem> {
        self.todos.iter_mut().find(|todo| todo.id == id)
    }

    pub fn push_todo(&mut self, todo: TodoItem) {
        self.todos.push(todo);
        self.todo_count = self.todos.len();
    }

    /// Removes the item with the given id, keeping the order of the rest.
    pub fn remove_todo(&mut self, id: &str) -> Option<TodoItem> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        let removed = self.todos.remove(index);
        self.todo_count = self.todos.len();
        Some(removed)
    }

    /// Empties the collection and hands back what it held.
    pub fn take_todos(&mut self) -> Vec<TodoItem> {
        self.todo_count = 0;
        std::mem::take(&mut self.todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_round_trip_through_from_label() {
        for label in TodoStatus::LABELS {
            let status = TodoStatus::from_label(label).unwrap();
            assert_eq!(status.as_str(), label);
        }
        assert_eq!(TodoStatus::from_label("done"), None);
        assert_eq!(TodoStatus::from_label(""), None);
    }

    #[test]
    fn status_serializes_to_wire_label() {
        let json = serde_json::to_value(TodoStatus::Todo).unwrap();
        assert_eq!(json, "TO-DO");
        assert_eq!(TodoStatus::Doing.to_string(), "DOING");
    }

    #[test]
    fn new_item_starts_in_todo_with_distinct_ids() {
        let a = TodoItem::new("a".to_string(), "2024-01-01".to_string());
        let b = TodoItem::new("a".to_string(), "2024-01-01".to_string());
        assert_eq!(a.status, TodoStatus::Todo);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn todo_count_follows_every_mutation() {
        let mut user = User::new("a", "a@x.com");
        let first = TodoItem::new("one".to_string(), "d1".to_string());
        let first_id = first.id.clone();
        user.push_todo(first);
        user.push_todo(TodoItem::new("two".to_string(), "d2".to_string()));
        assert_eq!(user.todo_count(), 2);

        let removed = user.remove_todo(&first_id).unwrap();
        assert_eq!(removed.todo_name, "one");
        assert_eq!(user.todo_count(), 1);
        assert_eq!(user.todos()[0].todo_name, "two");

        assert!(user.remove_todo("missing").is_none());
        assert_eq!(user.todo_count(), 1);

        let taken = user.take_todos();
        assert_eq!(taken.len(), 1);
        assert_eq!(user.todo_count(), 0);
        assert!(user.todos().is_empty());
    }

    #[test]
    fn user_serializes_camel_case_with_count() {
        let mut user = User::new("a", "a@x.com");
        user.push_todo(TodoItem::new("buy milk".to_string(), "2024-01-01".to_string()));
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userName"], "a");
        assert_eq!(json["userEmail"], "a@x.com");
        assert_eq!(json["todoCount"], 1);
        assert_eq!(json["todos"][0]["todoName"], "buy milk");
        assert_eq!(json["todos"][0]["status"], "TO-DO");
    }
}
