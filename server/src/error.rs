//! HTTP error mapping.
//!
//! # Design
//! `ApiError` is the rejection type of every extractor in `extract` and the
//! error type of every handler, so all client-visible failures are rendered
//! by the single `IntoResponse` impl below:
//!
//! | variant      | status                  | body                                  |
//! |--------------|-------------------------|---------------------------------------|
//! | `NotFound`   | 404                     | `{"detail": "Todo not found"}`        |
//! | `Validation` | 422                     | `{"detail": [{field, code, message}]}`|
//! | `Malformed`  | rejection's own (400/415) | `{"detail": "<reason>"}`            |
//! | `Internal`   | 500                     | `{"detail": "Internal server error"}` |

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use todo_core::TodoError;
use validator::ValidationErrors;

/// One failed constraint, as reported in a 422 body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, code: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Todo not found")]
    NotFound,

    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),

    #[error("{message}")]
    Malformed { status: StatusCode, message: String },

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Malformed { status, .. } => *status,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            ApiError::Validation(errors) => {
                tracing::warn!(?errors, "request rejected by validation");
                json!({ "detail": errors })
            }
            ApiError::Internal => {
                tracing::error!("request failed with an internal error");
                json!({ "detail": self.to_string() })
            }
            _ => {
                tracing::debug!(%status, error = %self, "request rejected");
                json!({ "detail": self.to_string() })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::NotFound(_) => ApiError::NotFound,
            TodoError::Validation(errors) => errors.into(),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{field} failed the {} check", e.code));
                    FieldError::new(&field, &e.code, message)
                })
            })
            .collect();
        details.sort_by(|a, b| a.field.cmp(&b.field));
        ApiError::Validation(details)
    }
}

/// Bodies that are not JSON at all keep the status axum chose for them.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// JSON that does not fit the schema. The field is the path serde was at
/// when it failed; a missing field fails at the root, so its name is taken
/// from the message instead.
impl From<serde_path_to_error::Error<serde_json::Error>> for ApiError {
    fn from(err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = err.path().to_string();
        let message = err.into_inner().to_string();
        let code = if message.starts_with("missing field") {
            "missing"
        } else if message.starts_with("invalid type") {
            "type"
        } else {
            "value"
        };
        let field = match (path.as_str(), code) {
            (".", "missing") => backticked(&message).unwrap_or("body").to_string(),
            (".", _) => "body".to_string(),
            _ => path,
        };
        ApiError::Validation(vec![FieldError::new(&field, code, message)])
    }
}

/// The first `` `quoted` `` word of a serde message.
fn backticked(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(&message[start..start + len])
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(err) => {
                ApiError::Validation(vec![FieldError::new("todo_id", "integer", err.body_text())])
            }
            other => ApiError::Malformed {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(vec![FieldError::new(
            "first_n",
            "non_negative_integer",
            rejection.body_text(),
        )])
    }
}
