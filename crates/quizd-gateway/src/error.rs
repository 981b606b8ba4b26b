//! HTTP surface for the shared error type.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use quizd_core::error::{ClientCode, QuizdError};

/// Gateway-side wrapper so `QuizdError` can be returned straight from
/// handlers and middleware.
#[derive(Debug)]
pub struct ApiError(pub QuizdError);

impl From<QuizdError> for ApiError {
    fn from(e: QuizdError) -> Self {
        ApiError(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::DuplicateMetric | ClientCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (status, body).into_response()
    }
}
