//! HTTP clients for the services behind the TaskFlow dashboard.
//!
//! - [`TaskServiceClient`] implements [`taskflow_core::TaskApi`] against the
//!   task REST API.
//! - [`AuthServiceClient`] implements [`taskflow_auth_core::AuthApi`] against
//!   the auth provider.
//!
//! Both work natively and in the browser; request timeouts are only applied
//! outside of `wasm32`, where the fetch API has no per-request timeout.

mod auth_client;
mod error;
mod task_client;

pub use auth_client::{AuthServiceClient, AuthServiceClientBuilder};
pub use error::{ClientError, ClientResult};
pub use task_client::{TaskServiceClient, TaskServiceClientBuilder};

/// Joins a base URL and a path with exactly one `/` between them.
pub(crate) fn join_url_segments(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        base.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::join_url_segments;

    #[test]
    fn joins_segments() {
        assert_eq!(
            join_url_segments("http://h:1/", "/api/v1"),
            "http://h:1/api/v1"
        );
        assert_eq!(join_url_segments("http://h", ""), "http://h");
        assert_eq!(join_url_segments("http://h/api", "tasks"), "http://h/api/tasks");
    }
}
