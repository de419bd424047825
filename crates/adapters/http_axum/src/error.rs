//! Translation of [`RestoHubError`] into the `{error}` JSON answers of the API.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use restohub_domain::error::RestoHubError;

/// Body shared by every failed API call.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Failure of an API handler.
#[derive(Debug)]
pub struct ApiError(RestoHubError);

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            RestoHubError::Validation(_) => StatusCode::BAD_REQUEST,
            RestoHubError::NotFound(_) => StatusCode::NOT_FOUND,
            RestoHubError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text sent to the client. Storage details stay in the logs.
    fn public_message(&self) -> String {
        match &self.0 {
            RestoHubError::Validation(err) => err.to_string(),
            RestoHubError::NotFound(err) => format!("{} no encontrado", err.entity),
            RestoHubError::Storage(_) => "internal server error".to_string(),
        }
    }
}

impl From<RestoHubError> for ApiError {
    fn from(err: RestoHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let RestoHubError::Storage(err) = &self.0 {
            tracing::error!(error = %err, "storage error");
        }
        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use restohub_domain::error::ValidationError;
    use restohub_domain::id::RestaurantId;
    use restohub_domain::restaurant::Restaurant;

    #[test]
    fn should_name_the_entity_when_not_found() {
        let err = ApiError::from(RestoHubError::from(Restaurant::not_found(RestaurantId::new(7))));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_message(), "Restaurante no encontrado");
    }

    #[test]
    fn should_reject_validation_failure_as_bad_request() {
        let err = ApiError::from(RestoHubError::from(ValidationError::EmptyField("nombre")));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_not_leak_storage_details() {
        let err = ApiError::from(RestoHubError::Storage("table locked".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "internal server error");
    }
}
