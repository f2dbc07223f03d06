use super::types::{AnonymizeRequest, AnonymizeResponse, ErrorResponse};
use crate::anonymizer::Anonymizer;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub anonymizer: Arc<Anonymizer>,
}

pub async fn anonymize(
    State(state): State<AppState>,
    Json(request): Json<AnonymizeRequest>,
) -> Result<Json<AnonymizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    // The input may contain names, so only its size is logged.
    info!("Received anonymize request ({} bytes)", request.text.len());

    match state.anonymizer.anonymize(&request.text).await {
        Ok(content) => {
            info!("Successfully anonymized text");
            Ok(Json(AnonymizeResponse::new(content)))
        }
        Err(e) => {
            error!("Failed to anonymize text: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Processing error: {}", e),
                }),
            ))
        }
    }
}
