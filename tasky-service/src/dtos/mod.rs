pub mod todos;

pub use todos::{CreateTodoRequest, CreateTodoResponse, TodoResponse, WizFileResponse};
