//! Ownership and role gating for task affordances.

use crate::task::Task;

/// Whether a viewer may change or delete a task: owners always, admins for any task.
pub fn can_modify(viewer_id: &str, viewer_is_admin: bool, task: &Task) -> bool {
    viewer_id == task.created_by || viewer_is_admin
}

/// What a viewer is allowed to see and do on one task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskAccess {
    pub is_owner: bool,
    pub can_modify: bool,
    /// Set when an admin is looking at somebody else's task.
    pub show_admin_badge: bool,
}

impl TaskAccess {
    pub fn new(viewer_id: &str, viewer_is_admin: bool, task: &Task) -> Self {
        let is_owner = viewer_id == task.created_by;
        Self {
            is_owner,
            can_modify: can_modify(viewer_id, viewer_is_admin, task),
            show_admin_badge: viewer_is_admin && !is_owner,
        }
    }

    pub fn status_control_enabled(&self) -> bool {
        self.can_modify
    }

    pub fn delete_visible(&self) -> bool {
        self.can_modify
    }
}
