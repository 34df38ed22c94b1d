//! Auth context shared by every page.

use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;
use futures_signals::signal::{Mutable, MutableSignalCloned};
use taskflow_auth_core::{AuthApi, AuthError, AuthResult, AuthState, Credentials, Session};
use tracing::{info, warn};

/// Holds the current [`AuthState`] and the sign-in/sign-out operations.
///
/// The state starts as [`AuthState::Loading`] and leaves it exactly once,
/// when [`AuthStore::initialize`] resolves.
pub struct AuthStore {
    api: Rc<dyn AuthApi>,
    state: Mutable<AuthState>,
    initialized: Cell<bool>,
    pub signing_in: Mutable<bool>,
    pub sign_in_error: Mutable<Option<String>>,
}

impl AuthStore {
    pub fn new(api: Rc<dyn AuthApi>) -> Rc<Self> {
        Rc::new(Self {
            api,
            state: Mutable::new(AuthState::Loading),
            initialized: Cell::new(false),
            signing_in: Mutable::new(false),
            sign_in_error: Mutable::new(None),
        })
    }

    /// Resolves the session held by the provider. Only the first call does anything.
    pub async fn initialize(&self) {
        if self.initialized.replace(true) {
            return;
        }

        let resolved = match self.api.current_session().await {
            Ok(Some(session)) if session.is_expired_at(Utc::now()) => {
                info!(user_id = %session.user.id, "Stored session has expired");
                AuthState::SignedOut
            }
            Ok(Some(session)) => AuthState::SignedIn(session),
            Ok(None) => AuthState::SignedOut,
            Err(e) => {
                warn!(error = %e, "Session lookup failed, continuing signed out");
                AuthState::SignedOut
            }
        };

        // A sign-in that finished while the lookup was in flight wins.
        let mut state = self.state.lock_mut();
        if state.is_loading() {
            *state = resolved;
        }
    }

    pub async fn sign_in(&self, credentials: Credentials) -> AuthResult<()> {
        if self.signing_in.replace(true) {
            return Ok(());
        }
        self.sign_in_error.set(None);

        let result = self.api.sign_in(&credentials).await;
        self.signing_in.set(false);

        match result {
            Ok(session) => {
                self.state.set(AuthState::SignedIn(session));
                Ok(())
            }
            Err(e) => {
                self.sign_in_error.set(Some(e.to_string()));
                Err(e)
            }
        }
    }

    /// Ends the session locally, then tells the provider. A provider error
    /// is logged but never keeps the user signed in.
    pub async fn sign_out(&self) {
        let previous = self.state.replace(AuthState::SignedOut);
        if let AuthState::SignedIn(session) = previous {
            match self.api.sign_out(&session).await {
                Ok(()) => info!(user_id = %session.user.id, "Session closed"),
                Err(e) => warn!(error = %e, "Provider sign-out failed"),
            }
        }
    }

    /// Drops a session the task service no longer accepts.
    pub fn expire(&self, reason: &AuthError) {
        let mut state = self.state.lock_mut();
        if state.session().is_some() {
            warn!(%reason, "Session rejected, signing out");
            *state = AuthState::SignedOut;
        }
    }

    pub fn state(&self) -> AuthState {
        self.state.get_cloned()
    }

    pub fn session(&self) -> Option<Session> {
        self.state.lock_ref().session().cloned()
    }

    pub fn state_signal(&self) -> MutableSignalCloned<AuthState> {
        self.state.signal_cloned()
    }
}
