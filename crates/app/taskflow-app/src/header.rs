//! What the dashboard header shows for the signed-in user.

use futures_signals::signal::Mutable;
use taskflow_auth_core::{CurrentUser, Role, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub display_name: String,
    pub email: String,
    pub role_label: &'static str,
    pub is_admin: bool,
}

impl HeaderView {
    pub fn new(user: &CurrentUser, role: Option<Role>) -> Self {
        let role = role.unwrap_or_default();
        Self {
            display_name: user.email_local_part().to_string(),
            email: user.email.clone(),
            role_label: role.as_str(),
            is_admin: role.is_admin(),
        }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::new(&session.user, Some(session.role))
    }
}

/// The account dropdown toggle, the header's only local state.
#[derive(Default)]
pub struct AccountMenu {
    pub open: Mutable<bool>,
}

impl AccountMenu {
    pub fn toggle(&self) {
        let mut open = self.open.lock_mut();
        *open = !*open;
    }

    pub fn close(&self) {
        self.open.set_neq(false);
    }
}
