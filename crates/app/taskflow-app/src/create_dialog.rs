//! Form state of the "New Task" dialog.

use std::rc::Rc;

use futures_signals::signal::{Mutable, Signal, SignalExt};
use taskflow_core::{CreateTaskRequest, FormError, NewTaskForm, TaskPriority};

pub struct CreateTaskDialogState {
    pub title: Mutable<String>,
    pub description: Mutable<String>,
    pub priority: Mutable<TaskPriority>,
    pub error: Mutable<Option<FormError>>,
}

impl Default for CreateTaskDialogState {
    fn default() -> Self {
        Self {
            title: Mutable::new(String::new()),
            description: Mutable::new(String::new()),
            priority: Mutable::new(TaskPriority::Medium),
            error: Mutable::new(None),
        }
    }
}

impl CreateTaskDialogState {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn form(&self) -> NewTaskForm {
        NewTaskForm {
            title: self.title.get_cloned(),
            description: self.description.get_cloned(),
            priority: self.priority.get(),
        }
    }

    /// Validates the current input, recording the first problem for display.
    pub fn submission(&self) -> Option<CreateTaskRequest> {
        match self.form().validate() {
            Ok(request) => {
                self.error.set(None);
                Some(request)
            }
            Err(e) => {
                self.error.set(Some(e));
                None
            }
        }
    }

    pub fn reset(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.priority.set(TaskPriority::Medium);
        self.error.set(None);
    }

    /// Whether the submit button has anything to send.
    pub fn has_title_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.title
            .signal_ref(|title| !title.trim().is_empty())
            .dedupe()
    }
}
