//! Task domain for the TaskFlow web client.
//!
//! Everything here is pure: the task model and its wire validation, the
//! dashboard stat aggregation, the ownership/role access predicate, the closed
//! status/priority display tables, create-form validation, and the
//! [`TaskApi`] boundary to the external persistence service.

pub mod access;
pub mod api;
pub mod display;
pub mod form;
pub mod stats;
pub mod task;

pub use access::{TaskAccess, can_modify};
pub use api::{ApiError, ApiResult, TaskApi};
pub use display::{Accent, Icon, PriorityDisplay, StatusDisplay};
pub use form::{FormError, NewTaskForm};
pub use stats::TaskStats;
pub use task::{
    CreateTaskRequest, Task, TaskDataError, TaskPriority, TaskRecord, TaskStatus, TasksResponse,
    UpdateTaskRequest, validate_records,
};
