use crate::task::{Task, TaskPriority, TaskStatus};

/// Summary counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// High-priority tasks that are not completed yet.
    pub high_priority_open: usize,
}

impl TaskStats {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(
            TaskStats {
                total: tasks.len(),
                ..TaskStats::default()
            },
            |mut stats, task| {
                match task.status {
                    TaskStatus::Pending => stats.pending += 1,
                    TaskStatus::InProgress => stats.in_progress += 1,
                    TaskStatus::Completed => stats.completed += 1,
                }
                if task.priority == TaskPriority::High && task.status != TaskStatus::Completed {
                    stats.high_priority_open += 1;
                }
                stats
            },
        )
    }
}
