use async_trait::async_trait;
use crate::core::library::LibraryError;

#[derive(Debug, Clone, PartialEq)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        errors: Vec<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::Validation { message, errors } => {
                CommandError::Validation { message, errors }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_build_command_error() {
        let _ = CommandError::NotFound { message: "test".to_string() };
        let _ = CommandError::Runtime { message: "test".to_string(), reason_code: None };
        let _ = CommandError::Serialization { message: "test".to_string() };
        let _ = CommandError::Validation { message: "test".to_string(), errors: vec![] };
    }

    #[tokio::test]
    async fn test_should_convert_library_errors() {
        assert_eq!(CommandError::NotFound { message: "missing".to_string() },
                   CommandError::from(LibraryError::not_found("missing")));
        assert_eq!(CommandError::Validation { message: "bad".to_string(), errors: vec!["one".to_string()] },
                   CommandError::from(LibraryError::validation("bad", vec!["one".to_string()])));
        assert_eq!(CommandError::Serialization { message: "json".to_string() },
                   CommandError::from(LibraryError::serialization("json")));
        assert_eq!(CommandError::Runtime { message: "boom".to_string(), reason_code: None },
                   CommandError::from(LibraryError::runtime("boom", None)));
    }
}
