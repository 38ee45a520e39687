use service_core::observability::init_tracing;
use tasky_service::config::TaskyConfig;
use tasky_service::services::init_metrics;
use tasky_service::startup::Application;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // .env must be loaded before OTLP_ENDPOINT and RUST_LOG are read
    dotenvy::dotenv().ok();

    // Traces go to OTLP only when an endpoint is configured
    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("tasky-service", "info", otlp_endpoint.as_deref()).map_err(|e| {
        eprintln!("Failed to initialize tracing: {}", e);
        std::io::Error::other(format!("Tracing error: {}", e))
    })?;

    // Initialize metrics recorder (must be before any metrics are recorded)
    init_metrics().map_err(|e| {
        tracing::error!("Failed to initialize metrics: {}", e);
        std::io::Error::other(format!("Metrics error: {}", e))
    })?;

    let config = TaskyConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Startup failed: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    app.run_until_stopped().await
}
