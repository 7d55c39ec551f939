use auth_gateway::GatewayError;
use axum::Json;
use http::{Result as HttpResponse, StatusCode};
use serde_json::{Value, json};

/// Error half of a handler result: status plus the `{"error": ..}` body
/// every router-boundary failure carries.
pub type ErrorResponse = (StatusCode, Json<Value>);

pub(super) fn error_response(status: StatusCode, message: &str) -> ErrorResponse {
    (status, Json(json!({"error": message})))
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse>;
}

/// Implementation for GatewayError to map variants to appropriate status codes
impl<T> IntoResponseError<T> for Result<T, GatewayError> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| {
            let status = match e {
                GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
                GatewayError::Unauthorized => StatusCode::UNAUTHORIZED,
                GatewayError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
                GatewayError::IssuerError(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error_response(status, &e.to_string())
        })
    }
}

/// Implementation for http::Error (used by Response::builder())
impl<T> IntoResponseError<T> for HttpResponse<T> {
    fn into_response_error(self) -> Result<T, ErrorResponse> {
        self.map_err(|e| error_response(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string()))
    }
}
