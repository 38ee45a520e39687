pub const ROOT_MESSAGE: &str = "Tasky sample app - connect to /todos";

pub async fn index() -> &'static str {
    ROOT_MESSAGE
}
