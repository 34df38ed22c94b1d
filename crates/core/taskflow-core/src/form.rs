use thiserror::Error;

use crate::task::{CreateTaskRequest, TaskPriority};

pub const TITLE_MAX_LEN: usize = 200;
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Validation failures of the create-task form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Title is required")]
    TitleRequired,

    #[error("Title must be at most {max} characters")]
    TitleTooLong { max: usize },

    #[error("Description must be at most {max} characters")]
    DescriptionTooLong { max: usize },
}

/// Raw values typed into the create-task dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTaskForm {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
}

impl NewTaskForm {
    /// Trims the inputs and turns them into a create payload.
    pub fn validate(&self) -> Result<CreateTaskRequest, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::TitleRequired);
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(FormError::TitleTooLong { max: TITLE_MAX_LEN });
        }

        let description = self.description.trim();
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(FormError::DescriptionTooLong {
                max: DESCRIPTION_MAX_LEN,
            });
        }

        Ok(CreateTaskRequest {
            title: title.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            priority: Some(self.priority),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_builds_request() {
        let form = NewTaskForm {
            title: "  Ship release ".to_string(),
            description: "   ".to_string(),
            priority: TaskPriority::High,
        };
        assert_eq!(
            form.validate(),
            Ok(CreateTaskRequest {
                title: "Ship release".to_string(),
                description: None,
                priority: Some(TaskPriority::High),
            })
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let form = NewTaskForm {
            title: " \t".to_string(),
            ..NewTaskForm::default()
        };
        assert_eq!(form.validate(), Err(FormError::TitleRequired));
    }

    #[test]
    fn length_limits() {
        let long_title = NewTaskForm {
            title: "x".repeat(TITLE_MAX_LEN + 1),
            ..NewTaskForm::default()
        };
        assert_eq!(
            long_title.validate(),
            Err(FormError::TitleTooLong { max: TITLE_MAX_LEN })
        );

        let long_description = NewTaskForm {
            title: "ok".to_string(),
            description: "y".repeat(DESCRIPTION_MAX_LEN + 1),
            ..NewTaskForm::default()
        };
        assert!(matches!(
            long_description.validate(),
            Err(FormError::DescriptionTooLong { .. })
        ));
    }

    #[test]
    fn default_priority_is_medium() {
        let form = NewTaskForm {
            title: "t".to_string(),
            ..NewTaskForm::default()
        };
        assert_eq!(form.validate().unwrap().priority, Some(TaskPriority::Medium));
    }
}
