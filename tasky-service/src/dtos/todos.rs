use crate::models::Todo;
use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

/// Body of `POST /todos` after defaults have been filled in.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoResponse {
    pub inserted_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|id| id.to_hex()).unwrap_or_default(),
            text: todo.text,
            created_at: todo.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WizFileResponse {
    pub wiz: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn todo_response_uses_wire_field_names() {
        let id = ObjectId::new();
        let todo = Todo {
            id: Some(id),
            text: "buy milk".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };

        let json = serde_json::to_value(TodoResponse::from(todo)).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["text"], "buy milk");
        assert_eq!(json["createdAt"], "2024-05-01T12:30:00.000Z");
    }

    #[test]
    fn create_response_is_camel_case() {
        let json = serde_json::to_value(CreateTodoResponse {
            inserted_id: "abc".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({ "insertedId": "abc" }));
    }
}
