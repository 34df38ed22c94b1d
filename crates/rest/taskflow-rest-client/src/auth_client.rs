use std::time::Duration;

use async_trait::async_trait;
use taskflow_auth_core::{AuthApi, AuthError, AuthResult, Credentials, Session, SessionResponse};
use tracing::{debug, info, warn};

use crate::error::{ClientError, ClientResult, check_status, read_json};
use crate::join_url_segments;

/// Builder for [`AuthServiceClient`].
pub struct AuthServiceClientBuilder {
    server_url: String,
    timeout: Option<Duration>,
}

impl AuthServiceClientBuilder {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> ClientResult<AuthServiceClient> {
        #[allow(unused_mut)]
        let mut client_builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        Ok(AuthServiceClient {
            client: client_builder.build()?,
            server_url: self.server_url,
        })
    }
}

/// Client for the external auth provider.
///
/// The provider keeps the session in an HTTP-only cookie, so this client
/// never stores credentials or tokens itself.
#[derive(Clone)]
pub struct AuthServiceClient {
    client: reqwest::Client,
    server_url: String,
}

impl AuthServiceClient {
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = join_url_segments(&self.server_url, path);
        debug!(%method, %url, "Auth service request");

        let request_builder = self.client.request(method, &url);

        // Let the browser send the provider's session cookie cross-origin.
        #[cfg(target_arch = "wasm32")]
        let request_builder = request_builder.fetch_credentials_include();

        request_builder
    }

    async fn get_session(&self) -> ClientResult<SessionResponse> {
        let response = self
            .request(reqwest::Method::GET, "auth/session")
            .send()
            .await?;
        read_json(response).await
    }

    async fn post_login(&self, credentials: &Credentials) -> ClientResult<SessionResponse> {
        let response = self
            .request(reqwest::Method::POST, "auth/login")
            .json(credentials)
            .send()
            .await?;
        read_json(response).await
    }

    async fn post_logout(&self, token: &str) -> ClientResult<()> {
        let response = self
            .request(reqwest::Method::POST, "auth/logout")
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthServiceClient {
    async fn current_session(&self) -> AuthResult<Option<Session>> {
        match self.get_session().await {
            Ok(response) => {
                let session = Session::from(response);
                info!(user_id = %session.user.id, role = %session.role, "Resumed session");
                Ok(Some(session))
            }
            Err(ClientError::Status { status: 401, .. }) => {
                debug!("No active session");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        match self.post_login(credentials).await {
            Ok(response) => {
                let session = Session::from(response);
                info!(user_id = %session.user.id, role = %session.role, "Signed in");
                Ok(session)
            }
            Err(ClientError::Status {
                status: 400 | 401, ..
            }) => {
                warn!(email = %credentials.email, "Sign-in refused");
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn sign_out(&self, session: &Session) -> AuthResult<()> {
        match self.post_logout(&session.token).await {
            Ok(()) => {
                info!(user_id = %session.user.id, "Signed out");
                Ok(())
            }
            // Already gone on the provider side.
            Err(ClientError::Status { status: 401, .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
