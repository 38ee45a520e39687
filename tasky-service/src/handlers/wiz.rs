use crate::dtos::WizFileResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;

/// Returns the configured file verbatim under `wiz`.
pub async fn read_wiz_file(
    State(state): State<AppState>,
) -> Result<Json<WizFileResponse>, AppError> {
    let path = &state.config.wiz_file.path;
    let wiz = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), "Failed to read wiz file: {}", e);
        AppError::from(e)
    })?;

    Ok(Json(WizFileResponse { wiz }))
}
