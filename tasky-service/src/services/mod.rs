pub mod database;
pub mod defaults;
pub mod metrics;
pub mod store;

pub use database::TodoDb;
pub use defaults::FieldDefaults;
pub use self::metrics::{get_metrics, init_metrics, record_todo_created, record_todos_listed};
pub use store::{InMemoryTodoStore, TodoStore};
