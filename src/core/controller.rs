use std::sync::Arc;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use crate::books::repository::BookRepository;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong!";

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub books: Arc<BookRepository>,
}

impl AppState {
    pub fn new(config: Configuration, books: Arc<BookRepository>) -> AppState {
        AppState {
            config,
            books,
        }
    }
}

// ServerError is the failure half of every handler, rendered as `{success: false, ...}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerError {
    pub status: StatusCode,
    pub message: String,
    pub errors: Vec<String>,
    pub error: Option<String>,
}

impl ServerError {
    pub fn new(status: StatusCode, message: &str) -> Self {
        ServerError {
            status,
            message: message.to_string(),
            errors: vec![],
            error: None,
        }
    }

    // Internal detail only leaves the process in development mode.
    pub fn from_command_error(err: CommandError, config: &Configuration) -> Self {
        match err {
            CommandError::NotFound { message } => {
                ServerError::new(StatusCode::NOT_FOUND, message.as_str())
            }
            CommandError::Validation { message, errors } => {
                ServerError { errors, ..ServerError::new(StatusCode::BAD_REQUEST, message.as_str()) }
            }
            // bodies that fail to decode take the catch-all path
            CommandError::Serialization { message } => {
                tracing::error!(detail = message.as_str(), "request body rejected");
                let error = if config.is_development() { message } else { INTERNAL_SERVER_ERROR.to_string() };
                ServerError { error: Some(error), ..ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, SOMETHING_WENT_WRONG) }
            }
            CommandError::Runtime { message, reason_code } => {
                tracing::error!(detail = message.as_str(), reason_code = ?reason_code, "internal error");
                let error = if config.is_development() { message } else { INTERNAL_SERVER_ERROR.to_string() };
                ServerError { error: Some(error), ..ServerError::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR) }
            }
        }
    }
}

pub fn server_error(config: &Configuration) -> impl Fn(CommandError) -> ServerError + '_ {
    move |err| ServerError::from_command_error(err, config)
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "message": self.message,
        });
        if !self.errors.is_empty() {
            body["errors"] = json!(self.errors);
        }
        if let Some(error) = self.error {
            body["error"] = json!(error);
        }
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use crate::core::command::CommandError;
    use crate::core::controller::{INTERNAL_SERVER_ERROR, ServerError, SOMETHING_WENT_WRONG};
    use crate::core::domain::{Configuration, DEVELOPMENT, PRODUCTION};

    #[tokio::test]
    async fn test_should_map_not_found() {
        let err = ServerError::from_command_error(
            CommandError::NotFound { message: "Book with ID 7 not found".to_string() }, &Configuration::new(PRODUCTION));
        assert_eq!(StatusCode::NOT_FOUND, err.status);
        assert_eq!("Book with ID 7 not found", err.message.as_str());
        assert!(err.error.is_none());
    }

    #[tokio::test]
    async fn test_should_map_validation() {
        let err = ServerError::from_command_error(
            CommandError::Validation { message: "Validation failed".to_string(), errors: vec!["a".to_string(), "b".to_string()] },
            &Configuration::new(PRODUCTION));
        assert_eq!(StatusCode::BAD_REQUEST, err.status);
        assert_eq!(2, err.errors.len());
    }

    #[tokio::test]
    async fn test_should_map_serialization() {
        let err = ServerError::from_command_error(
            CommandError::Serialization { message: "EOF".to_string() }, &Configuration::new(PRODUCTION));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status);
        assert_eq!(SOMETHING_WENT_WRONG, err.message.as_str());
        assert!(err.errors.is_empty());
        assert_eq!(Some(INTERNAL_SERVER_ERROR.to_string()), err.error);

        let err = ServerError::from_command_error(
            CommandError::Serialization { message: "EOF".to_string() }, &Configuration::new(DEVELOPMENT));
        assert_eq!(Some("EOF".to_string()), err.error);
    }

    #[tokio::test]
    async fn test_should_hide_runtime_detail_in_production() {
        let err = ServerError::from_command_error(
            CommandError::Runtime { message: "lock poisoned".to_string(), reason_code: None }, &Configuration::new(PRODUCTION));
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.status);
        assert_eq!(Some(INTERNAL_SERVER_ERROR.to_string()), err.error);
    }

    #[tokio::test]
    async fn test_should_show_runtime_detail_in_development() {
        let err = ServerError::from_command_error(
            CommandError::Runtime { message: "lock poisoned".to_string(), reason_code: None }, &Configuration::new(DEVELOPMENT));
        assert_eq!(Some("lock poisoned".to_string()), err.error);
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.into_response().status());
    }
}
