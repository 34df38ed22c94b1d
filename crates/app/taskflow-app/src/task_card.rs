//! Per-card view state: access gating, status changes and the delete confirmation.

use std::rc::Rc;

use async_trait::async_trait;
use futures_signals::signal::{Mutable, Signal};
use taskflow_auth_core::Session;
use taskflow_core::{ApiResult, Task, TaskAccess, TaskStatus, UpdateTaskRequest};
use tracing::debug;

use crate::task_store::TaskEntry;

/// Outbound intents a card can emit. The card never talks to the network itself.
#[async_trait(?Send)]
pub trait TaskIntents {
    async fn update_task(&self, task: &Task, update: UpdateTaskRequest) -> ApiResult<Task>;

    async fn delete_task(&self, task_id: &str) -> ApiResult<()>;
}

/// Who is looking at the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    pub id: String,
    pub is_admin: bool,
}

impl From<&Session> for Viewer {
    fn from(session: &Session) -> Self {
        Self {
            id: session.user.id.clone(),
            is_admin: session.is_admin(),
        }
    }
}

pub struct TaskCardState {
    pub entry: Rc<TaskEntry>,
    pub viewer: Viewer,
    pub confirm_open: Mutable<bool>,
    pub deleting: Mutable<bool>,
}

impl TaskCardState {
    pub fn new(entry: Rc<TaskEntry>, viewer: Viewer) -> Rc<Self> {
        Rc::new(Self {
            entry,
            viewer,
            confirm_open: Mutable::new(false),
            deleting: Mutable::new(false),
        })
    }

    pub fn access(&self) -> TaskAccess {
        TaskAccess::new(&self.viewer.id, self.viewer.is_admin, &self.entry.task.lock_ref())
    }

    pub fn access_signal(&self) -> impl Signal<Item = TaskAccess> + use<> {
        let viewer = self.viewer.clone();
        self.entry
            .task
            .signal_ref(move |task| TaskAccess::new(&viewer.id, viewer.is_admin, task))
    }

    /// Emits a status update. Ignored when the viewer may not modify the
    /// task or the status is unchanged.
    pub async fn change_status(&self, intents: &dyn TaskIntents, status: TaskStatus) {
        if !self.access().can_modify {
            return;
        }
        let task = self.entry.task.get_cloned();
        if task.status == status {
            return;
        }
        debug!(task_id = %task.id, %status, "Status change requested");
        // Errors are reported by the task store.
        let _ = intents
            .update_task(&task, UpdateTaskRequest::status(status))
            .await;
    }

    pub fn request_delete(&self) {
        if self.access().delete_visible() {
            self.confirm_open.set_neq(true);
        }
    }

    pub fn cancel_delete(&self) {
        if !self.deleting.get() {
            self.confirm_open.set_neq(false);
        }
    }

    /// Runs the delete intent once. The deleting flag clears whatever the outcome.
    pub async fn confirm_delete(&self, intents: &dyn TaskIntents) -> Option<ApiResult<()>> {
        if !self.confirm_open.get() || self.deleting.replace(true) {
            return None;
        }
        let result = intents.delete_task(&self.entry.id).await;
        self.deleting.set(false);
        self.confirm_open.set(false);
        Some(result)
    }
}
