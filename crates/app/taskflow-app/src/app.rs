//! Root of the client: configuration plus the stores every page shares.

use std::rc::Rc;

use taskflow_auth_core::{AuthApi, Session};
use taskflow_core::TaskApi;
use tracing::info;

use crate::auth_store::AuthStore;
use crate::config::AppConfig;
use crate::dashboard::DashboardState;
use crate::notices::Notices;

/// Builds a task accessor authenticated as the given session.
pub type TaskApiFactory = Box<dyn Fn(&Session) -> Rc<dyn TaskApi>>;

pub struct App {
    pub config: AppConfig,
    pub auth: Rc<AuthStore>,
    pub notices: Rc<Notices>,
    task_api: TaskApiFactory,
}

impl App {
    pub fn new(config: AppConfig, auth_api: Rc<dyn AuthApi>, task_api: TaskApiFactory) -> Rc<Self> {
        Rc::new(Self {
            config,
            auth: AuthStore::new(auth_api),
            notices: Notices::new(),
            task_api,
        })
    }

    /// Fresh dashboard state for one authenticated mount.
    pub fn dashboard_for(&self, session: &Session) -> Rc<DashboardState> {
        info!(user_id = %session.user.id, role = %session.role, "Opening dashboard");
        DashboardState::new(
            session.clone(),
            (self.task_api)(session),
            self.auth.clone(),
            self.notices.clone(),
        )
    }
}
