//! Dashboard page state: auth gating plus wiring of card and dialog intents
//! into the task store.

use std::rc::Rc;

use async_trait::async_trait;
use futures_signals::signal::Mutable;
use taskflow_auth_core::{AuthError, AuthState, Session};
use taskflow_core::{ApiResult, CreateTaskRequest, Task, TaskApi, UpdateTaskRequest};
use tracing::debug;

use crate::auth_store::AuthStore;
use crate::create_dialog::CreateTaskDialogState;
use crate::notices::Notices;
use crate::task_card::{TaskIntents, Viewer};
use crate::task_store::TaskStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    AuthLoading,
    Unauthenticated,
    Authenticated(Session),
}

impl From<&AuthState> for DashboardPhase {
    fn from(state: &AuthState) -> Self {
        match state {
            AuthState::Loading => DashboardPhase::AuthLoading,
            AuthState::SignedOut => DashboardPhase::Unauthenticated,
            AuthState::SignedIn(session) => DashboardPhase::Authenticated(session.clone()),
        }
    }
}

/// State of one authenticated dashboard mount.
pub struct DashboardState {
    pub session: Session,
    pub tasks: Rc<TaskStore>,
    pub create_dialog_open: Mutable<bool>,
    pub create_form: Rc<CreateTaskDialogState>,
    auth: Rc<AuthStore>,
}

impl DashboardState {
    pub fn new(
        session: Session,
        api: Rc<dyn TaskApi>,
        auth: Rc<AuthStore>,
        notices: Rc<Notices>,
    ) -> Rc<Self> {
        let tasks = TaskStore::new(api, notices);
        tasks.on_unauthorized(expire_session_on(&auth));

        Rc::new(Self {
            session,
            tasks,
            create_dialog_open: Mutable::new(false),
            create_form: CreateTaskDialogState::new(),
            auth,
        })
    }

    pub fn viewer(&self) -> Viewer {
        Viewer::from(&self.session)
    }

    /// Initial fetch of the collection. Failures are reported by the store.
    pub async fn load(&self) {
        let _ = self.tasks.refetch().await;
    }

    pub fn open_create_dialog(&self) {
        self.create_dialog_open.set_neq(true);
    }

    pub fn close_create_dialog(&self) {
        if !self.tasks.creating.get() {
            self.create_dialog_open.set_neq(false);
            self.create_form.reset();
        }
    }

    /// Forwards a create payload; the dialog closes only on success.
    pub async fn handle_create(&self, request: CreateTaskRequest) -> ApiResult<Task> {
        let result = self.tasks.create(request).await;
        if result.is_ok() {
            self.create_dialog_open.set(false);
            self.create_form.reset();
        }
        result
    }

    /// Validates the dialog and creates the task. Returns `None` when the
    /// form did not validate and nothing was sent.
    pub async fn submit_create(&self) -> Option<ApiResult<Task>> {
        let request = self.create_form.submission()?;
        Some(self.handle_create(request).await)
    }

    pub async fn sign_out(&self) {
        self.auth.sign_out().await;
    }
}

/// Any 401 from the task service ends the session.
fn expire_session_on(auth: &Rc<AuthStore>) -> impl Fn() + 'static {
    let auth = auth.clone();
    move || {
        debug!("Task service rejected the session");
        auth.expire(&AuthError::SessionExpired);
    }
}

#[async_trait(?Send)]
impl TaskIntents for DashboardState {
    async fn update_task(&self, task: &Task, update: UpdateTaskRequest) -> ApiResult<Task> {
        self.tasks.update(&task.id, update).await
    }

    async fn delete_task(&self, task_id: &str) -> ApiResult<()> {
        self.tasks.delete(task_id).await
    }
}
