//! HTTP mapping for domain errors

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rainpick_domain::RainpickError;
use serde_json::json;

/// Wrapper turning `RainpickError` into a JSON `{"error": ...}` response.
#[derive(Debug)]
pub struct ApiError(pub RainpickError);

impl From<RainpickError> for ApiError {
    fn from(err: RainpickError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RainpickError::Auth(_) => StatusCode::UNAUTHORIZED,
            RainpickError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RainpickError::Upstream { .. } | RainpickError::Network(_) => StatusCode::BAD_GATEWAY,
            RainpickError::Config(_) | RainpickError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_maps_to_401() {
        let response = ApiError(RainpickError::Auth("Not authenticated".to_string()))
            .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn upstream_maps_to_502() {
        let response = ApiError(RainpickError::Upstream {
            status: 500,
            status_text: "Internal Server Error".to_string(),
            body: String::new(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn config_maps_to_500() {
        let response = ApiError(RainpickError::Config("missing".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
