use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

pub const SPOT_NOT_FOUND_MESSAGE: &str = "Spot de surf no encontrado";
pub const INVALID_BODY_MESSAGE: &str = "JSON inválido en el cuerpo de la petición";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The path value did not identify a catalog spot (including non-numeric values)
    #[error("Surf spot not found: {0}")]
    SpotNotFound(String),
    /// The echo body was declared as JSON but is not a JSON object or array
    #[error("Invalid JSON body: {0}")]
    InvalidBody(String),
}

/// Body returned for every failed request
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::SpotNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Client-facing message; details stay in the logs
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::SpotNotFound(_) => SPOT_NOT_FOUND_MESSAGE,
            Self::InvalidBody(_) => INVALID_BODY_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            success: false,
            message: self.public_message().to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
