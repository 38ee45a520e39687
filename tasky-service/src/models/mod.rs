pub mod todo;

pub use todo::{Todo, DEFAULT_TODO_TEXT};
