//! Closed lookup tables from task enums to what the UI shows.
//!
//! Each table is an exhaustive `match`, so a new status or priority does not
//! compile until it has a label, icon and accent.

use chrono::{DateTime, Utc};

use crate::task::{Task, TaskPriority, TaskStatus};

/// Icons used across the dashboard. The rendering layer owns the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Clock,
    AlertCircle,
    CheckCircle,
    ListTodo,
    Shield,
    Lock,
    Users,
    Database,
    Plus,
    LogOut,
    User,
    ChevronDown,
    Trash,
    ArrowRight,
    Spinner,
}

/// Semantic colour of a badge, tile or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Primary,
    Warning,
    Info,
    Success,
    Muted,
    Destructive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityDisplay {
    pub label: &'static str,
    pub accent: Accent,
}

impl TaskStatus {
    pub fn display(self) -> StatusDisplay {
        match self {
            TaskStatus::Pending => StatusDisplay {
                label: "Pending",
                icon: Icon::Clock,
                accent: Accent::Warning,
            },
            TaskStatus::InProgress => StatusDisplay {
                label: "In Progress",
                icon: Icon::AlertCircle,
                accent: Accent::Info,
            },
            TaskStatus::Completed => StatusDisplay {
                label: "Completed",
                icon: Icon::CheckCircle,
                accent: Accent::Success,
            },
        }
    }
}

impl TaskPriority {
    pub fn display(self) -> PriorityDisplay {
        match self {
            TaskPriority::Low => PriorityDisplay {
                label: "Low",
                accent: Accent::Muted,
            },
            TaskPriority::Medium => PriorityDisplay {
                label: "Medium",
                accent: Accent::Warning,
            },
            TaskPriority::High => PriorityDisplay {
                label: "High",
                accent: Accent::Destructive,
            },
        }
    }
}

/// "Created Mar 4, 2025"
pub fn created_label(created_at: DateTime<Utc>) -> String {
    format!("Created {}", created_at.format("%b %-d, %Y"))
}

impl Task {
    pub fn created_label(&self) -> String {
        created_label(self.created_at)
    }
}
