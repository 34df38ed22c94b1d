//! State and view models of the TaskFlow client.
//!
//! Everything here is rendering-agnostic: stores hold `futures-signals`
//! mutables and the UI crate only reads signals and forwards intents.

pub mod app;
pub mod auth_store;
pub mod config;
pub mod content;
pub mod create_dialog;
pub mod dashboard;
pub mod header;
pub mod notices;
pub mod route;
pub mod task_card;
pub mod task_store;

#[cfg(test)]
mod fakes;

pub use app::{App, TaskApiFactory};
pub use auth_store::AuthStore;
pub use config::{AppConfig, ConfigError};
pub use create_dialog::CreateTaskDialogState;
pub use dashboard::{DashboardPhase, DashboardState};
pub use header::{AccountMenu, HeaderView};
pub use notices::{Notice, NoticeKind, Notices};
pub use route::{Route, RouteDecision};
pub use task_card::{TaskCardState, TaskIntents, Viewer};
pub use task_store::{TaskEntry, TaskListView, TaskStore};
