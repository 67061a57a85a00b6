use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use campusconnect_shared::Error;
use serde_json::json;
use validator::{ValidationError, ValidationErrors};

/// HTTP face of [`campusconnect_shared::Error`].
#[derive(Debug)]
pub struct ApiError(pub Error);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self(Error::Unknown(err))
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self(Error::Validate(err))
    }
}

/// Well-formed JSON whose fields do not fit the input type is a validation
/// failure, anything else is a malformed request.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => {
                let mut errors = ValidationErrors::new();
                errors.add(
                    "body",
                    ValidationError::new("invalid").with_message(e.body_text().into()),
                );
                Self(Error::Validate(errors))
            }
            other => Self(Error::Server(other.body_text())),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self(Error::Server(rejection.body_text()))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Unauthenticated => StatusCode::UNAUTHORIZED,
            Error::Forbidden => StatusCode::FORBIDDEN,
            Error::DuplicateRegistration => StatusCode::CONFLICT,
            Error::Validate(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Server(_) => StatusCode::BAD_REQUEST,
            Error::BackendUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.0 {
            Error::NotFound(_) => "not_found",
            Error::Unauthenticated => "unauthenticated",
            Error::Forbidden => "forbidden",
            Error::DuplicateRegistration => "duplicate_registration",
            Error::Validate(_) => "validation",
            Error::Server(_) => "bad_request",
            Error::BackendUnavailable(_) => "backend_unavailable",
            Error::Unknown(_) => "internal",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if status.is_server_error() {
            tracing::error!(err = %self.0, "request failed");

            match self.0 {
                Error::BackendUnavailable(_) => "Service temporarily unavailable".to_owned(),
                _ => "An unexpected error occurred".to_owned(),
            }
        } else {
            self.0.to_string()
        };

        (
            status,
            Json(json!({ "error": self.kind(), "message": message })),
        )
            .into_response()
    }
}
