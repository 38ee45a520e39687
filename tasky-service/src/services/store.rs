use crate::models::Todo;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use tokio::sync::RwLock;

/// Persistence seam for todos. Handlers only see this trait.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Every stored todo, in the store's natural order.
    async fn list(&self) -> Result<Vec<Todo>, AppError>;
    /// Inserts `todo` and returns the id the store assigned to it.
    async fn insert(&self, todo: Todo) -> Result<ObjectId, AppError>;
    async fn health_check(&self) -> Result<(), AppError>;
}

/// Insertion-ordered store kept in process memory.
#[derive(Default)]
pub struct InMemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.todos.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.todos.read().await.is_empty()
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, AppError> {
        Ok(self.todos.read().await.clone())
    }

    async fn insert(&self, mut todo: Todo) -> Result<ObjectId, AppError> {
        let id = ObjectId::new();
        todo.id = Some(id);
        self.todos.write().await.push(todo);
        Ok(id)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }
}
