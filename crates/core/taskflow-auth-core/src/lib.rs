//! Session and role types for the TaskFlow client.
//!
//! The auth provider itself is external. This crate describes what the views
//! get to see of it: the signed-in user, their role, and the [`AuthApi`]
//! boundary used to resolve, open and close sessions.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by the auth accessor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The email/password pair was refused.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The session token is no longer accepted.
    #[error("Session expired")]
    SessionExpired,

    /// The auth service answered with an unexpected status.
    #[error("Auth service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// The auth service could not be reached.
    #[error("Auth service unreachable: {0}")]
    Transport(String),

    /// The auth service answered with a body we could not read.
    #[error("Malformed auth response: {0}")]
    Decode(String),
}

/// Result type for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Coarse authorization tier attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Maps the role claim of a session onto a [`Role`].
    ///
    /// A missing claim means a regular user. Unknown claims also fall back to
    /// [`Role::User`] so an unexpected value never grants admin affordances.
    pub fn from_claim(claim: Option<&str>) -> Self {
        match claim.map(str::trim) {
            Some(value) if value.eq_ignore_ascii_case("admin") => Role::Admin,
            None | Some("") => Role::User,
            Some(value) if value.eq_ignore_ascii_case("user") => Role::User,
            Some(other) => {
                tracing::warn!(role = other, "Unknown role claim, treating as user");
                Role::User
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The identity behind a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
}

impl CurrentUser {
    /// The part of the email before `@`, used as a short display name.
    pub fn email_local_part(&self) -> &str {
        match self.email.split_once('@') {
            Some((local, _)) => local,
            None => &self.email,
        }
    }
}

/// An authenticated session as handed out by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: CurrentUser,
    pub role: Role,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Whether the session is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Session payload returned by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: CurrentUser,
    #[serde(default)]
    pub role: Option<String>,
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        Session {
            role: Role::from_claim(response.role.as_deref()),
            user: response.user,
            token: response.token,
            expires_at: response.expires_at,
        }
    }
}

/// Email/password sign-in payload.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the views know about authentication at any point in time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Initial session resolution has not finished yet.
    #[default]
    Loading,
    SignedOut,
    SignedIn(Session),
}

impl AuthState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::SignedIn(session) => Some(session),
            _ => None,
        }
    }

}

/// Boundary to the external authentication provider.
///
/// The client runs on a single-threaded event loop, so implementations are
/// not required to be `Send`.
#[async_trait(?Send)]
pub trait AuthApi {
    /// Resolves the session the provider already holds for this browser, if any.
    async fn current_session(&self) -> AuthResult<Option<Session>>;

    /// Opens a new session with email/password credentials.
    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session>;

    /// Closes the given session on the provider side.
    async fn sign_out(&self, session: &Session) -> AuthResult<()>;
}
