use crate::models::Todo;
use crate::services::store::TodoStore;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
    Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

pub const TODOS_COLLECTION: &str = "todos";
pub const CREATED_AT_INDEX: &str = "created_at_asc";

#[derive(Clone)]
pub struct TodoDb {
    client: MongoClient,
    db: Database,
}

impl TodoDb {
    /// Builds the client and pings the server, so an unreachable database
    /// fails here rather than on the first request.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(database = %database, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await?;
        let db = client.database(database);
        let todo_db = Self { client, db };
        todo_db.ping().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(todo_db)
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for tasky-service");

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": 1 })
            .options(
                IndexOptions::builder()
                    .name(CREATED_AT_INDEX.to_string())
                    .build(),
            )
            .build();

        self.todos().create_index(created_at_index, None).await?;
        tracing::info!("Created index on todos.createdAt");

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    pub fn todos(&self) -> Collection<Todo> {
        self.db.collection(TODOS_COLLECTION)
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl TodoStore for TodoDb {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        let cursor = self.todos().find(None, None).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn insert(&self, todo: Todo) -> Result<ObjectId, AppError> {
        let result = self.todos().insert_one(todo, None).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "Inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn health_check(&self) -> Result<(), AppError> {
        self.ping().await
    }
}
