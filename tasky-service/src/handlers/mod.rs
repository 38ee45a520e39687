pub mod app;
pub mod health;
pub mod metrics;
pub mod todos;
pub mod wiz;

pub use app::{index, ROOT_MESSAGE};
pub use health::{health_check, readiness_check};
pub use self::metrics::metrics_endpoint;
pub use todos::{create_todo, list_todos};
pub use wiz::read_wiz_file;
