use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::utils::memdb::MemoryClient;

// AppState is shared by all routes; the memory client is a handle to the same tables.
#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) client: MemoryClient,
}

impl AppState {
    pub fn new(branch: &str, client: MemoryClient) -> AppState {
        AppState {
            config: Configuration::new(branch),
            client,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::DuplicateKey { .. } => {
                (StatusCode::CONFLICT, format!("{:?}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Unavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::{AppState, ServerError};
    use crate::utils::memdb::MemoryClient;

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::new("test", MemoryClient::new());
        assert_eq!("test", state.config.branch_id.as_str());
    }

    #[tokio::test]
    async fn test_should_map_command_errors_to_status() {
        let not_found: ServerError = CommandError::NotFound { message: "book".to_string() }.into();
        assert_eq!(StatusCode::NOT_FOUND, not_found.0);
        let invalid: ServerError = CommandError::Validation { message: "id".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::BAD_REQUEST, invalid.0);
        let duplicate: ServerError = CommandError::DuplicateKey { message: "isbn".to_string() }.into();
        assert_eq!(StatusCode::CONFLICT, duplicate.0);
        let unavailable: ServerError = CommandError::Unavailable {
            message: "gateway".to_string(), reason_code: None, retryable: false }.into();
        assert_eq!(StatusCode::SERVICE_UNAVAILABLE, unavailable.0);
        let failed: ServerError = CommandError::Runtime { message: "fees".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, failed.0);
    }
}
