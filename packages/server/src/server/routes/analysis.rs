use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::domains::analysis::{
    analyze_link, classify_link, summarize_link, AnalysisError, AnalyzeRequest, ClassifyResponse,
    ErrorResponse, PredictResponse, Report,
};
use crate::server::app::AppState;
use crate::server::routes::request::JsonBody;

impl AnalysisError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::InvalidLink(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AnalysisError::Fetch(crate::domains::reviews::FetchError::NoReviews) => {
                StatusCode::NOT_FOUND
            }
            AnalysisError::Fetch(_) | AnalysisError::Summarization => StatusCode::BAD_GATEWAY,
            AnalysisError::Classification(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        warn!(kind = self.kind(), status = %status, error = %self, "Analysis request failed");

        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Full pipeline; the narrative is returned unparsed.
pub async fn predict_handler(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<PredictResponse>, AnalysisError> {
    let response = summarize_link(&request.link, None, &state.deps).await?;
    Ok(Json(response))
}

/// Classification only, no summary.
pub async fn classify_handler(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<ClassifyResponse>, AnalysisError> {
    let classified_reviews = classify_link(&request.link, None, &state.deps).await?;
    Ok(Json(ClassifyResponse { classified_reviews }))
}

/// Full pipeline with scores and summary parsed out of the narrative.
pub async fn analyze_handler(
    Extension(state): Extension<AppState>,
    JsonBody(request): JsonBody<AnalyzeRequest>,
) -> Result<Json<Report>, AnalysisError> {
    let report = analyze_link(&request.link, None, &state.deps).await?;
    Ok(Json(report))
}
