use std::time::Duration;

use async_trait::async_trait;
use taskflow_core::{
    ApiResult, CreateTaskRequest, Task, TaskApi, TaskRecord, TasksResponse, UpdateTaskRequest,
    validate_records,
};
use tracing::{debug, warn};

use crate::error::{ClientResult, check_status, read_json};
use crate::join_url_segments;

const DEFAULT_BASE_PATH: &str = "/api/v1";

/// Builder for [`TaskServiceClient`].
pub struct TaskServiceClientBuilder {
    server_url: String,
    base_path: String,
    bearer_token: Option<String>,
    timeout: Option<Duration>,
}

impl TaskServiceClientBuilder {
    /// Create a new client builder with the required server URL
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            base_path: DEFAULT_BASE_PATH.to_string(),
            bearer_token: None,
            timeout: None,
        }
    }

    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Set the default timeout for requests
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build
    pub fn build(self) -> ClientResult<TaskServiceClient> {
        #[allow(unused_mut)]
        let mut client_builder = reqwest::Client::builder();

        // Timeout is not supported in WASM builds
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(TaskServiceClient {
            client,
            base_url: join_url_segments(&self.server_url, &self.base_path),
            bearer_token: self.bearer_token,
        })
    }
}

/// Client for the task REST API.
#[derive(Clone)]
pub struct TaskServiceClient {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl TaskServiceClient {
    /// Set the bearer token for authentication
    pub fn set_bearer_token(&mut self, token: Option<impl Into<String>>) {
        self.bearer_token = token.map(|t| t.into());
    }

    /// Get a reference to the bearer token
    pub fn bearer_token(&self) -> Option<&str> {
        self.bearer_token.as_deref()
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = join_url_segments(&self.base_url, path);
        debug!(%method, %url, "Task service request");

        let request_builder = self.client.request(method, &url);
        match &self.bearer_token {
            Some(token) => request_builder.header("Authorization", format!("Bearer {}", token)),
            None => request_builder,
        }
    }

    async fn fetch_records(&self) -> ClientResult<Vec<TaskRecord>> {
        let response = self.request(reqwest::Method::GET, "tasks").send().await?;
        let body: TasksResponse = read_json(response).await?;
        Ok(body.tasks)
    }

    async fn post_task(&self, request: &CreateTaskRequest) -> ClientResult<TaskRecord> {
        let response = self
            .request(reqwest::Method::POST, "tasks")
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn put_task(&self, id: &str, request: &UpdateTaskRequest) -> ClientResult<TaskRecord> {
        let response = self
            .request(reqwest::Method::PUT, &format!("tasks/{}", id))
            .json(request)
            .send()
            .await?;
        read_json(response).await
    }

    async fn remove_task(&self, id: &str) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::DELETE, &format!("tasks/{}", id))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl TaskApi for TaskServiceClient {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let records = self.fetch_records().await?;
        let count = records.len();
        let tasks = validate_records(records).inspect_err(|e| {
            warn!(error = %e, "Task listing failed validation");
        })?;
        debug!(count, "Fetched tasks");
        Ok(tasks)
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<Task> {
        let record = self.post_task(request).await?;
        Ok(Task::try_from(record)?)
    }

    async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> ApiResult<Task> {
        let record = self.put_task(id, request).await?;
        Ok(Task::try_from(record)?)
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        Ok(self.remove_task(id).await?)
    }
}
