//! Boundary to the external task persistence API.

use async_trait::async_trait;
use thiserror::Error;

use crate::task::{CreateTaskRequest, Task, TaskDataError, UpdateTaskRequest};

/// Errors surfaced by the task accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Not signed in")]
    Unauthorized,

    #[error("Not allowed: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Could not reach the task service: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Invalid task data: {0}")]
    DataIntegrity(#[from] TaskDataError),
}

impl ApiError {
    /// Maps a non-success HTTP status and its error message onto an [`ApiError`].
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Rejected { status, message },
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Create/read/update/delete operations of the task service.
///
/// Authorization is enforced server-side; a refused mutation comes back as
/// [`ApiError::Forbidden`].
#[async_trait(?Send)]
pub trait TaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<Task>;

    async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> ApiResult<Task>;

    async fn delete_task(&self, id: &str) -> ApiResult<()>;
}
