//! JSON body extraction with rejections in the API's error shape.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    response::{IntoResponse, Response},
    Json,
};
use tracing::debug;

use crate::domains::analysis::ErrorResponse;

/// `Json<T>` whose rejection renders as `{error: "invalid_request", message}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(InvalidRequest))]
pub struct JsonBody<T>(pub T);

/// The request body was missing, not JSON, or not the expected shape.
pub struct InvalidRequest(JsonRejection);

impl From<JsonRejection> for InvalidRequest {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for InvalidRequest {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let message = self.0.body_text();
        debug!(status = %status, message = %message, "Rejected request body");

        let body = ErrorResponse {
            error: "invalid_request".to_string(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
