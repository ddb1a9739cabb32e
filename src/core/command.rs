use async_trait::async_trait;
use crate::core::library::LibraryError;

// CommandError is what a command reports back to its controller.
#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    DuplicateKey {
        message: String,
    },
    NotFound {
        message: String,
    },
    // a downstream service could not be reached
    Unavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
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
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::DuplicateKey { message } => {
                CommandError::DuplicateKey { message }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Unavailable { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
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
    async fn test_should_convert_library_error() {
        assert!(matches!(CommandError::from(LibraryError::not_found("Book not found.")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::validation("Invalid patron ID.", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::unavailable("gateway down", None, false)),
            CommandError::Unavailable { retryable: false, .. }));
        assert!(matches!(CommandError::from(LibraryError::duplicate_key("isbn")), CommandError::DuplicateKey { .. }));
        assert!(matches!(CommandError::from(LibraryError::database("stale", None, false)), CommandError::Database { .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("json")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("Error in late fee calculation.", None)),
            CommandError::Runtime { .. }));
    }
}
