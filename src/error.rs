//! Error handler for usermgmt.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

pub type Result<T> = std::result::Result<T, ServerError>;

/// PostgreSQL `unique_violation` SQLSTATE.
const UNIQUE_VIOLATION: &str = "23505";

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("validation error occurred")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error(transparent)]
    Path(#[from] PathRejection),

    #[error("user with id {0} not found")]
    UserNotFoundById(i64),

    #[error("user with email {0} not found")]
    UserNotFoundByEmail(String),

    #[error("email {0} already exists")]
    EmailExists(String),

    #[error("email {0} is already used by another user")]
    EmailUsedByOther(String),

    #[error("SQL request failed: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("internal server error, {details}")]
    Internal { details: String },
}

impl ServerError {
    /// Whether the error is a PostgreSQL unique constraint violation.
    pub fn is_unique_violation(&self) -> bool {
        match self {
            ServerError::Sql(err) => err
                .as_database_error()
                .and_then(|e| e.code())
                .is_some_and(|code| code == UNIQUE_VIOLATION),
            _ => false,
        }
    }

    /// HTTP status code matching the error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_)
            | ServerError::Json(_)
            | ServerError::Query(_)
            | ServerError::Path(_) => StatusCode::BAD_REQUEST,
            ServerError::UserNotFoundById(_)
            | ServerError::UserNotFoundByEmail(_) => StatusCode::NOT_FOUND,
            ServerError::EmailExists(_) | ServerError::EmailUsedByOther(_) => {
                StatusCode::CONFLICT
            },
            ServerError::Sql(_) | ServerError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

/// Structure for detailed error responses.
#[derive(Debug, Serialize, serde::Deserialize, ToSchema)]
pub struct ResponseError {
    r#type: Option<String>,
    title: String,
    status: u16,
    detail: String,
    instance: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = description.into();
        self
    }

    /// Automatically add errors field.
    pub fn errors(mut self, errors: &ValidationErrors) -> Self {
        self.errors = Some(parse_validation_errors(errors));
        self
    }

    /// Field-level errors, if any.
    pub fn field_errors(&self) -> &[FieldError] {
        self.errors.as_deref().unwrap_or_default()
    }

    /// Transform [`ResponseError`] into axum [`Response`].
    pub fn into_response(self) -> std::result::Result<Response, axum::http::Error> {
        if let Ok(body) = serde_json::to_string(&self) {
            Response::builder()
                .status(self.status)
                .header(header::CONTENT_TYPE, "application/problem+json")
                .body(body.into())
        } else {
            Ok(internal_server_error())
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            r#type: None,
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: String::default(),
            instance: None,
            errors: None,
        }
    }
}

/// A single field which failed validation.
#[derive(Debug, Serialize, serde::Deserialize, ToSchema)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn parse_validation_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, issues)| {
            issues.iter().map(move |issue| FieldError {
                field: field.to_string(),
                message: issue
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| issue.code.to_string()),
            })
        })
        .collect();
    // `field_errors` is backed by a hash map.
    errors.sort_by(|a, b| a.field.cmp(&b.field).then(a.message.cmp(&b.message)));
    errors
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let response = ResponseError::default()
            .status(status)
            .details(&self.to_string());

        let response = match &self {
            ServerError::Validation(validation_errors) => response
                .title("There were validation errors with your request.")
                .errors(validation_errors),

            ServerError::Json(_) | ServerError::Query(_) | ServerError::Path(_) => {
                response.title("Request could not be parsed.")
            },

            ServerError::UserNotFoundById(_) | ServerError::UserNotFoundByEmail(_) => {
                response.title("User not found.")
            },

            ServerError::EmailExists(_) | ServerError::EmailUsedByOther(_) => {
                response.title("Email already in use.")
            },

            ServerError::Sql(err) => {
                tracing::error!(error = %err, "database request failed");
                ResponseError::default()
            },

            ServerError::Internal { details } => {
                tracing::error!(%details, "server returned 500 status");
                ResponseError::default()
            },
        };

        response
            .into_response()
            .unwrap_or_else(|_| internal_server_error())
    }
}

fn internal_server_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/problem+json")
        .body(
            serde_json::json!({
                "type": null,
                "title": "Internal server error.",
                "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "detail": null,
                "instance": null,
                "errors": null,
            })
            .to_string()
            .into(),
        )
        .unwrap_or_else(|_| Response::new("Internal server error".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use validator::ValidationError;

    #[tokio::test]
    async fn test_conflict_is_409() {
        let response =
            ServerError::EmailExists("alice@example.com".into()).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: ResponseError = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.status, 409);
        assert_eq!(body.detail, "email alice@example.com already exists");
    }

    #[tokio::test]
    async fn test_validation_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "username",
            ValidationError::new("length").with_message("too short".into()),
        );
        errors.add("email", ValidationError::new("email"));

        let response = ServerError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: ResponseError = serde_json::from_slice(&body).unwrap();
        let fields: Vec<_> = body
            .field_errors()
            .iter()
            .map(|e| (e.field.as_str(), e.message.as_str()))
            .collect();
        assert_eq!(fields, vec![("email", "email"), ("username", "too short")]);
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = ServerError::Internal {
            details: "connection reset".into(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: ResponseError = serde_json::from_slice(&body).unwrap();
        assert!(body.detail.is_empty());
    }
}
