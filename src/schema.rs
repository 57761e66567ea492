use serde::{Deserialize, Serialize};

use crate::{
    error::TodoError,
    service::{CreateTodoInput, UpdateTodoInput},
};

// Every key is optional on the wire: an absent userName simply resolves to
// no user, while setTodo reports missing fields itself.

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|value| !value.is_empty())
}

// Request body identifying a user
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSchema {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl UserSchema {
    pub fn user_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or_default()
    }

    pub fn user_email(&self) -> &str {
        self.user_email.as_deref().unwrap_or_default()
    }
}

// Request body identifying one todo of a user
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRefSchema {
    pub todo_id: Option<String>,
    #[serde(flatten)]
    pub user: UserSchema,
}

impl TodoRefSchema {
    pub fn todo_id(&self) -> &str {
        self.todo_id.as_deref().unwrap_or_default()
    }
}

// Struct representing the request body for creating a new Todo
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoSchema {
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub todo_name: Option<String>,
    pub deadline: Option<String>,
}

impl CreateTodoSchema {
    /// All four fields must be present and non-empty.
    pub fn validate(self) -> Result<CreateTodoInput, TodoError> {
        match (
            non_empty(self.user_name),
            non_empty(self.user_email),
            non_empty(self.todo_name),
            non_empty(self.deadline),
        ) {
            (Some(user_name), Some(user_email), Some(todo_name), Some(deadline)) => {
                Ok(CreateTodoInput {
                    user_name,
                    user_email,
                    todo_name,
                    deadline,
                })
            }
            _ => Err(TodoError::MissingFields),
        }
    }
}

// Partial update carried inside UpdateTodoSchema
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedTodoSchema {
    pub todo_name: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
}

impl From<UpdatedTodoSchema> for UpdateTodoInput {
    fn from(schema: UpdatedTodoSchema) -> Self {
        UpdateTodoInput {
            todo_name: non_empty(schema.todo_name),
            deadline: non_empty(schema.deadline),
            status: non_empty(schema.status),
        }
    }
}

// Struct representing the request body for updating a Todo
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoSchema {
    #[serde(flatten)]
    pub todo: TodoRefSchema,
    #[serde(default)]
    pub updated_todo: UpdatedTodoSchema,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn create_schema_accepts_complete_body() {
        let schema: CreateTodoSchema = serde_json::from_value(json!({
            "userName": "a",
            "userEmail": "a@x.com",
            "todoName": "buy milk",
            "deadline": "2024-01-01"
        }))
        .unwrap();
        let input = schema.validate().unwrap();
        assert_eq!(input.user_name, "a");
        assert_eq!(input.todo_name, "buy milk");
    }

    #[test]
    fn create_schema_rejects_absent_or_empty_fields() {
        let absent: CreateTodoSchema = serde_json::from_value(json!({
            "userName": "a",
            "userEmail": "a@x.com",
            "todoName": "buy milk"
        }))
        .unwrap();
        assert_eq!(absent.validate().unwrap_err(), TodoError::MissingFields);

        let empty: CreateTodoSchema = serde_json::from_value(json!({
            "userName": "",
            "userEmail": "a@x.com",
            "todoName": "buy milk",
            "deadline": "2024-01-01"
        }))
        .unwrap();
        assert_eq!(empty.validate().unwrap_err(), TodoError::MissingFields);
    }

    #[test]
    fn update_schema_flattens_todo_reference() {
        let schema: UpdateTodoSchema = serde_json::from_value(json!({
            "todoId": "t1",
            "userName": "a",
            "userEmail": "a@x.com",
            "updatedTodo": { "status": "DONE", "todoName": "" }
        }))
        .unwrap();
        assert_eq!(schema.todo.todo_id(), "t1");
        assert_eq!(schema.todo.user.user_name(), "a");

        let input = UpdateTodoInput::from(schema.updated_todo);
        assert_eq!(input.status.as_deref(), Some("DONE"));
        assert_eq!(input.todo_name, None);
    }

    #[test]
    fn update_schema_defaults_missing_update() {
        let schema: UpdateTodoSchema = serde_json::from_value(json!({
            "todoId": "t1",
            "userName": "a",
            "userEmail": "a@x.com"
        }))
        .unwrap();
        let input = UpdateTodoInput::from(schema.updated_todo);
        assert!(input.todo_name.is_none() && input.deadline.is_none() && input.status.is_none());
    }

    #[test]
    fn absent_keys_read_as_empty() {
        let schema: UserSchema = serde_json::from_value(json!({})).unwrap();
        assert_eq!(schema.user_name(), "");
        assert_eq!(schema.user_email(), "");
    }
}
