//! Client-side HTTP errors and their mapping onto accessor errors.

use serde::de::DeserializeOwned;
use taskflow_auth_core::AuthError;
use taskflow_core::ApiError;
use thiserror::Error;

/// Errors raised while talking to a TaskFlow service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure, including failing to build the client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Services report failures as `{"error": "..."}`. Anything else is passed through.
fn error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: String,
    }

    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) if body.trim().is_empty() => "Unknown error".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

pub(crate) async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ClientError::Status {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

pub(crate) async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Status { status, message } => ApiError::from_status(status, message),
            ClientError::Decode(message) => ApiError::Decode(message),
            ClientError::Http(e) if e.is_decode() => ApiError::Decode(e.to_string()),
            ClientError::Http(e) => ApiError::Transport(e.to_string()),
        }
    }
}

impl From<ClientError> for AuthError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Status { status: 401, .. } => AuthError::SessionExpired,
            ClientError::Status { status, message } => AuthError::Rejected { status, message },
            ClientError::Decode(message) => AuthError::Decode(message),
            ClientError::Http(e) if e.is_decode() => AuthError::Decode(e.to_string()),
            ClientError::Http(e) => AuthError::Transport(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_message_is_extracted() {
        assert_eq!(error_message(r#"{"error":"Task not found"}"#), "Task not found");
        assert_eq!(error_message("  plain text "), "plain text");
        assert_eq!(error_message(""), "Unknown error");
    }

    #[test]
    fn status_errors_map_to_api_errors() {
        let forbidden = ClientError::Status {
            status: 403,
            message: "Insufficient permissions".to_string(),
        };
        assert_eq!(
            ApiError::from(forbidden),
            ApiError::Forbidden("Insufficient permissions".to_string())
        );

        let decode = ClientError::Decode("missing field".to_string());
        assert_eq!(
            ApiError::from(decode),
            ApiError::Decode("missing field".to_string())
        );
    }

    #[test]
    fn unauthorized_maps_to_expired_session() {
        let err = ClientError::Status {
            status: 401,
            message: "Authentication failed".to_string(),
        };
        assert_eq!(AuthError::from(err), AuthError::SessionExpired);
    }
}
