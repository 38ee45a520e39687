use chrono::{DateTime, SubsecRound, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Text stored when a todo is created without one.
pub const DEFAULT_TODO_TEXT: &str = "no text";

/// A todo as stored in the `todos` collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Assigned by the store on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub text: String,
    #[serde(
        rename = "createdAt",
        with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime"
    )]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Builds an unsaved todo stamped with the current time.
    ///
    /// BSON datetimes hold milliseconds, so the timestamp is truncated up
    /// front to read back identically from any store.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: None,
            text: text.into(),
            created_at: Utc::now().trunc_subsecs(3),
        }
    }
}
