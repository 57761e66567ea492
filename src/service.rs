use tracing::debug;

use crate::{
    error::TodoError,
    model::{TodoItem, TodoStatus, User},
    store::{TodoStore, UserLookup},
};

/// Input for creating a new todo
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
    pub user_name: String,
    pub user_email: String,
    pub todo_name: String,
    pub deadline: String,
}

/// Input for updating a todo; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct UpdateTodoInput {
    pub todo_name: Option<String>,
    pub deadline: Option<String>,
    /// Raw label, validated only after name and deadline were applied.
    pub status: Option<String>,
}

/// Operations over the in-memory store.
///
/// Each call runs to completion against a borrowed store; callers are
/// responsible for serializing access.
pub struct TodoService;

impl TodoService {
    /// Resolves both keys, name first.
    fn resolve(store: &TodoStore, user_name: &str, user_email: &str) -> Result<usize, TodoError> {
        match store.lookup(user_name, user_email) {
            UserLookup::Found(index) => Ok(index),
            UserLookup::NotFoundByName { .. } => Err(TodoError::UserNotFound(user_name.to_owned())),
            UserLookup::NotFoundByEmail(_) => Err(TodoError::EmailNotFound(user_email.to_owned())),
        }
    }

    /// All users with their todos
    pub fn list_all(store: &TodoStore) -> Result<&[User], TodoError> {
        if store.is_empty() {
            return Err(TodoError::NoUsers);
        }
        Ok(store.users())
    }

    /// The user matched by name, checked in the order: name, non-empty todos, email.
    pub fn user_todos<'a>(
        store: &'a TodoStore,
        user_name: &str,
        user_email: &str,
    ) -> Result<&'a User, TodoError> {
        let (index, email_known) = match store.lookup(user_name, user_email) {
            UserLookup::NotFoundByName { .. } => {
                return Err(TodoError::UserNotFound(user_name.to_owned()))
            }
            UserLookup::Found(index) => (index, true),
            UserLookup::NotFoundByEmail(index) => (index, false),
        };

        let user = store.user(index);
        if user.todos().is_empty() {
            return Err(TodoError::NoUserTodos(user_name.to_owned()));
        }
        if !email_known {
            return Err(TodoError::EmailNotFound(user_email.to_owned()));
        }
        Ok(user)
    }

    /// Get a todo by ID from the name-matched user
    pub fn get_todo<'a>(
        store: &'a TodoStore,
        user_name: &str,
        user_email: &str,
        todo_id: &str,
    ) -> Result<&'a TodoItem, TodoError> {
        let index = Self::resolve(store, user_name, user_email)?;
        store
            .user(index)
            .find_todo(todo_id)
            .ok_or_else(|| TodoError::TodoNotFound(todo_id.to_owned()))
    }

    /// Create a new todo, registering the user when needed.
    ///
    /// An email held under another name is rejected, while a known name with
    /// an unknown email gets a separate user record.
    pub fn create_todo(store: &mut TodoStore, input: CreateTodoInput) -> Result<TodoItem, TodoError> {
        let index = match store.lookup(&input.user_name, &input.user_email) {
            UserLookup::Found(index) => index,
            UserLookup::NotFoundByName { email_known: true } => return Err(TodoError::EmailTaken),
            UserLookup::NotFoundByName { email_known: false } | UserLookup::NotFoundByEmail(_) => {
                debug!(user_name = %input.user_name, user_email = %input.user_email, "registering user");
                store.insert(User::new(input.user_name, input.user_email))
            }
        };

        let todo = TodoItem::new(input.todo_name, input.deadline);
        store.user_mut(index).push_todo(todo.clone());
        debug!(todo_id = %todo.id, "todo created");
        Ok(todo)
    }

    /// Update a todo in place.
    ///
    /// Name and deadline are written before the status is checked, so an
    /// invalid status still leaves them applied.
    pub fn update_todo(
        store: &mut TodoStore,
        user_name: &str,
        user_email: &str,
        todo_id: &str,
        input: UpdateTodoInput,
    ) -> Result<TodoItem, TodoError> {
        let index = Self::resolve(store, user_name, user_email)?;
        let todo = store
            .user_mut(index)
            .find_todo_mut(todo_id)
            .ok_or_else(|| TodoError::TodoNotFound(todo_id.to_owned()))?;

        if let Some(todo_name) = input.todo_name {
            todo.todo_name = todo_name;
        }
        if let Some(deadline) = input.deadline {
            todo.deadline = deadline;
        }
        if let Some(label) = input.status {
            match TodoStatus::from_label(&label) {
                Some(status) => {
                    debug!(todo_id, from = %todo.status, to = %status, "status changed");
                    todo.status = status;
                }
                None => return Err(TodoError::InvalidStatus(label)),
            }
        }

        Ok(todo.clone())
    }

    /// Delete one todo of the name-matched user.
    ///
    /// The removal happens even when the email is unknown; the caller still
    /// gets `EmailNotFound` in that case.
    pub fn delete_todo(
        store: &mut TodoStore,
        user_name: &str,
        user_email: &str,
        todo_id: &str,
    ) -> Result<TodoItem, TodoError> {
        let (index, email_known) = match store.lookup(user_name, user_email) {
            UserLookup::NotFoundByName { .. } => {
                return Err(TodoError::UserNotFound(user_name.to_owned()))
            }
            UserLookup::Found(index) => (index, true),
            UserLookup::NotFoundByEmail(index) => (index, false),
        };

        let removed = store.user_mut(index).remove_todo(todo_id);
        if !email_known {
            debug!(todo_id, removed = removed.is_some(), "delete ran without a known email");
            return Err(TodoError::EmailNotFound(user_email.to_owned()));
        }
        removed.ok_or_else(|| TodoError::TodoNotFound(todo_id.to_owned()))
    }

    /// Clear the todos of the name-matched user, returning what was held.
    pub fn delete_user_todos(
        store: &mut TodoStore,
        user_name: &str,
        user_email: &str,
    ) -> Result<Vec<TodoItem>, TodoError> {
        let index = store
            .position_by_name(user_name)
            .ok_or_else(|| TodoError::UserNotFound(user_name.to_owned()))?;
        if store.user(index).todos().is_empty() {
            return Err(TodoError::NoUserTodos(user_name.to_owned()));
        }
        if !store.email_known(user_email) {
            return Err(TodoError::EmailNotFound(user_email.to_owned()));
        }
        Ok(store.user_mut(index).take_todos())
    }

    /// Clear every user's todos. Users themselves stay registered.
    pub fn delete_all(store: &mut TodoStore) -> Result<Vec<TodoItem>, TodoError> {
        let deleted: Vec<TodoItem> = store.users_mut().flat_map(User::take_todos).collect();
        if deleted.is_empty() {
            return Err(TodoError::NoTodos);
        }
        debug!(count = deleted.len(), "all todos deleted");
        Ok(deleted)
    }
}
