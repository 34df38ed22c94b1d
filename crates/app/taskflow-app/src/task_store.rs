//! Client-side cache of the task collection.
//!
//! One [`TaskStore`] lives for one authenticated dashboard mount. Its cache is
//! filled by [`TaskStore::refetch`] and invalidated by refetching after every
//! successful mutation; nothing else writes to it. Only the most recently
//! issued listing is applied, so overlapping refetches cannot roll the cache
//! back to an older snapshot.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use futures_signals::map_ref;
use futures_signals::signal::{Mutable, Signal, SignalExt};
use futures_signals::signal_vec::{MutableSignalVec, MutableVec};
use taskflow_core::{
    ApiError, ApiResult, CreateTaskRequest, Task, TaskApi, TaskStats, UpdateTaskRequest,
};
use tracing::{debug, error, info};

use crate::notices::Notices;

/// A task slot in the rendered list. The slot is reused across refetches as
/// long as the task id stays in the collection.
pub struct TaskEntry {
    pub id: String,
    pub task: Mutable<Task>,
}

impl TaskEntry {
    fn new(task: Task) -> Rc<Self> {
        Rc::new(Self {
            id: task.id.clone(),
            task: Mutable::new(task),
        })
    }
}

/// Which of the three list states to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskListView {
    Loading,
    Empty,
    Tasks,
}

impl TaskListView {
    pub fn resolve(is_loading: bool, task_count: usize) -> Self {
        if is_loading {
            TaskListView::Loading
        } else if task_count == 0 {
            TaskListView::Empty
        } else {
            TaskListView::Tasks
        }
    }
}

pub struct TaskStore {
    api: Rc<dyn TaskApi>,
    notices: Rc<Notices>,
    entries: MutableVec<Rc<TaskEntry>>,
    snapshot: Mutable<Vec<Task>>,
    loading: Mutable<bool>,
    last_error: Mutable<Option<ApiError>>,
    generation: Cell<u64>,
    on_unauthorized: RefCell<Option<Box<dyn Fn()>>>,
    pub creating: Mutable<bool>,
}

impl TaskStore {
    pub fn new(api: Rc<dyn TaskApi>, notices: Rc<Notices>) -> Rc<Self> {
        Rc::new(Self {
            api,
            notices,
            entries: MutableVec::new(),
            snapshot: Mutable::new(Vec::new()),
            loading: Mutable::new(true),
            last_error: Mutable::new(None),
            generation: Cell::new(0),
            on_unauthorized: RefCell::new(None),
            creating: Mutable::new(false),
        })
    }

    /// Registers the callback run whenever the task service rejects the
    /// session, whether on a listing or a mutation.
    pub fn on_unauthorized(&self, callback: impl Fn() + 'static) {
        *self.on_unauthorized.borrow_mut() = Some(Box::new(callback));
    }

    fn report(&self, error: &ApiError) {
        if !matches!(error, ApiError::Unauthorized) {
            return;
        }
        if let Some(callback) = self.on_unauthorized.borrow().as_ref() {
            callback();
        }
    }

    /// Loads the collection from the service and reconciles it into the cache.
    ///
    /// On failure the previous collection stays in place. A listing that was
    /// overtaken by a later refetch is dropped without touching the cache.
    pub async fn refetch(&self) -> ApiResult<()> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let result = self.api.list_tasks().await;
        if generation != self.generation.get() {
            debug!(generation, "Dropping superseded task listing");
            return result.map(|_| ());
        }
        self.loading.set_neq(false);

        match result {
            Ok(tasks) => {
                debug!(count = tasks.len(), "Task collection refreshed");
                self.apply(tasks);
                self.last_error.set(None);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to load tasks");
                self.notices.error("Failed to load tasks", e.to_string());
                self.last_error.set(Some(e.clone()));
                self.report(&e);
                Err(e)
            }
        }
    }

    pub async fn create(&self, request: CreateTaskRequest) -> ApiResult<Task> {
        if self.creating.replace(true) {
            return Err(ApiError::Rejected {
                status: 409,
                message: "A task is already being created".to_string(),
            });
        }
        let result = self.api.create_task(&request).await;
        self.creating.set(false);

        match result {
            Ok(task) => {
                info!(task_id = %task.id, "Task created");
                self.upsert(task.clone());
                self.notices.success("Task created");
                self.revalidate().await;
                Ok(task)
            }
            Err(e) => {
                error!(error = %e, "Failed to create task");
                self.notices.error("Failed to create task", e.to_string());
                self.report(&e);
                Err(e)
            }
        }
    }

    pub async fn update(&self, id: &str, request: UpdateTaskRequest) -> ApiResult<Task> {
        match self.api.update_task(id, &request).await {
            Ok(task) => {
                info!(task_id = %task.id, "Task updated");
                self.upsert(task.clone());
                self.notices.success("Task updated");
                self.revalidate().await;
                Ok(task)
            }
            Err(e) => {
                error!(task_id = id, error = %e, "Failed to update task");
                self.notices.error("Failed to update task", e.to_string());
                self.report(&e);
                Err(e)
            }
        }
    }

    pub async fn delete(&self, id: &str) -> ApiResult<()> {
        match self.api.delete_task(id).await {
            Ok(()) => {
                info!(task_id = id, "Task deleted");
                let remaining = self
                    .snapshot
                    .get_cloned()
                    .into_iter()
                    .filter(|task| task.id != id)
                    .collect();
                self.apply(remaining);
                self.notices.success("Task deleted");
                self.revalidate().await;
                Ok(())
            }
            Err(e) => {
                error!(task_id = id, error = %e, "Failed to delete task");
                self.notices.error("Failed to delete task", e.to_string());
                self.report(&e);
                Err(e)
            }
        }
    }

    async fn revalidate(&self) {
        // The mutation itself succeeded; listing failures are reported by refetch.
        if let Err(e) = self.refetch().await {
            debug!(error = %e, "Revalidation after mutation failed");
        }
    }

    fn upsert(&self, task: Task) {
        let mut tasks = self.snapshot.get_cloned();
        match tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => tasks.insert(0, task),
        }
        self.apply(tasks);
    }

    /// Replaces the collection, keeping the entry of every id that survives.
    fn apply(&self, tasks: Vec<Task>) {
        let mut entries = self.entries.lock_mut();

        let mut existing: HashMap<String, Rc<TaskEntry>> = entries
            .iter()
            .map(|entry| (entry.id.clone(), entry.clone()))
            .collect();

        let next: Vec<Rc<TaskEntry>> = tasks
            .iter()
            .map(|task| match existing.remove(&task.id) {
                Some(entry) => {
                    entry.task.set_neq(task.clone());
                    entry
                }
                None => TaskEntry::new(task.clone()),
            })
            .collect();

        let keep: HashSet<&str> = next.iter().map(|entry| entry.id.as_str()).collect();
        entries.retain(|entry| keep.contains(entry.id.as_str()));

        for (index, entry) in next.iter().enumerate() {
            if entries
                .get(index)
                .is_some_and(|current| Rc::ptr_eq(current, entry))
            {
                continue;
            }
            match entries.iter().position(|current| Rc::ptr_eq(current, entry)) {
                Some(from) => entries.move_from_to(from, index),
                None => entries.insert_cloned(index, entry.clone()),
            }
        }
        drop(entries);

        self.snapshot.set(tasks);
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.snapshot.get_cloned()
    }

    pub fn entries(&self) -> Vec<Rc<TaskEntry>> {
        self.entries.lock_ref().to_vec()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.last_error.get_cloned()
    }

    pub fn entries_signal_vec(&self) -> MutableSignalVec<Rc<TaskEntry>> {
        self.entries.signal_vec_cloned()
    }

    pub fn stats_signal(&self) -> impl Signal<Item = TaskStats> + use<> {
        self.snapshot
            .signal_ref(|tasks| TaskStats::from_tasks(tasks))
            .dedupe()
    }

    pub fn count_signal(&self) -> impl Signal<Item = usize> + use<> {
        self.snapshot.signal_ref(Vec::len).dedupe()
    }

    pub fn list_view_signal(&self) -> impl Signal<Item = TaskListView> + use<> {
        map_ref! {
            let loading = self.loading.signal(),
            let count = self.snapshot.signal_ref(Vec::len) =>
            TaskListView::resolve(*loading, *count)
        }
        .dedupe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{FakeTaskApi, task};
    use taskflow_core::{TaskPriority, TaskStatus};
    use tokio::sync::oneshot;

    fn store_with(api: Rc<FakeTaskApi>) -> (Rc<TaskStore>, Rc<Notices>) {
        let notices = Notices::new();
        (TaskStore::new(api, notices.clone()), notices)
    }

    #[test]
    fn list_view_states_are_exclusive() {
        assert_eq!(TaskListView::resolve(true, 0), TaskListView::Loading);
        assert_eq!(TaskListView::resolve(true, 3), TaskListView::Loading);
        assert_eq!(TaskListView::resolve(false, 0), TaskListView::Empty);
        assert_eq!(TaskListView::resolve(false, 2), TaskListView::Tasks);
    }

    #[tokio::test]
    async fn loading_until_first_fetch() {
        let api = FakeTaskApi::new("u1", vec![task("a", "u1", TaskStatus::Pending, TaskPriority::Low)]);
        let (store, _) = store_with(api);

        assert!(store.is_loading());
        assert!(store.tasks().is_empty());

        store.refetch().await.unwrap();

        assert!(!store.is_loading());
        assert_eq!(store.tasks().len(), 1);
    }

    #[tokio::test]
    async fn failed_fetch_keeps_previous_collection() {
        let api = FakeTaskApi::new("u1", vec![task("a", "u1", TaskStatus::Pending, TaskPriority::Low)]);
        let (store, notices) = store_with(api.clone());
        store.refetch().await.unwrap();

        api.fail_list_with(ApiError::Transport("offline".to_string()));
        assert!(store.refetch().await.is_err());

        assert_eq!(store.tasks().len(), 1);
        assert!(matches!(store.last_error(), Some(ApiError::Transport(_))));
        assert_eq!(notices.current().last().unwrap().title, "Failed to load tasks");
    }

    #[tokio::test]
    async fn refetch_keeps_entry_identity() {
        let api = FakeTaskApi::new(
            "u1",
            vec![
                task("a", "u1", TaskStatus::Pending, TaskPriority::Low),
                task("b", "u1", TaskStatus::Pending, TaskPriority::Low),
                task("c", "u1", TaskStatus::Pending, TaskPriority::Low),
            ],
        );
        let (store, _) = store_with(api.clone());
        store.refetch().await.unwrap();
        let before = store.entries();

        {
            let mut tasks = api.tasks.borrow_mut();
            tasks.remove(1);
            tasks[1].status = TaskStatus::Completed;
            tasks.insert(0, task("d", "u1", TaskStatus::Pending, TaskPriority::High));
            tasks.swap(1, 2);
        }
        store.refetch().await.unwrap();
        let after = store.entries();

        let ids: Vec<_> = after.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "a"]);
        assert!(Rc::ptr_eq(&after[2], &before[0]));
        assert!(Rc::ptr_eq(&after[1], &before[2]));
        assert_eq!(after[1].task.get_cloned().status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn created_task_is_in_the_collection() {
        let api = FakeTaskApi::new("u1", Vec::new());
        let (store, notices) = store_with(api);
        store.refetch().await.unwrap();

        let created = store
            .create(CreateTaskRequest {
                title: "Ship release".to_string(),
                description: None,
                priority: Some(TaskPriority::High),
            })
            .await
            .unwrap();

        let tasks = store.tasks();
        assert!(tasks.iter().any(|task| task.id == created.id
            && task.title == "Ship release"
            && task.priority == TaskPriority::High));
        assert!(!store.creating.get());
        assert_eq!(notices.current()[0].title, "Task created");
    }

    #[tokio::test]
    async fn update_revalidates_collection() {
        let api = FakeTaskApi::new("u1", vec![task("a", "u1", TaskStatus::Pending, TaskPriority::Low)]);
        let (store, _) = store_with(api.clone());
        store.refetch().await.unwrap();
        let calls_before = api.list_calls.get();

        store
            .update("a", UpdateTaskRequest::status(TaskStatus::InProgress))
            .await
            .unwrap();

        assert_eq!(store.tasks()[0].status, TaskStatus::InProgress);
        assert_eq!(api.list_calls.get(), calls_before + 1);
    }

    #[tokio::test]
    async fn failed_delete_leaves_task_in_place() {
        let api = FakeTaskApi::new("u1", vec![task("a", "u1", TaskStatus::Pending, TaskPriority::Low)]);
        let (store, notices) = store_with(api.clone());
        store.refetch().await.unwrap();

        api.fail_mutations_with(ApiError::Forbidden("Insufficient permissions".to_string()));
        let err = store.delete("a").await.unwrap_err();

        assert!(matches!(err, ApiError::Forbidden(_)));
        assert_eq!(store.tasks().len(), 1);
        let notice = notices.current().last().cloned().unwrap();
        assert_eq!(notice.title, "Failed to delete task");
        assert_eq!(notice.detail.as_deref(), Some("Not allowed: Insufficient permissions"));
    }

    #[tokio::test]
    async fn delete_removes_task() {
        let api = FakeTaskApi::new(
            "u1",
            vec![
                task("a", "u1", TaskStatus::Pending, TaskPriority::Low),
                task("b", "u1", TaskStatus::Pending, TaskPriority::Low),
            ],
        );
        let (store, _) = store_with(api);
        store.refetch().await.unwrap();

        store.delete("a").await.unwrap();

        let ids: Vec<_> = store.tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["b"]);
        assert_eq!(store.entries().len(), 1);
    }

    #[tokio::test]
    async fn superseded_listing_does_not_roll_back_cache() {
        let api = FakeTaskApi::new(
            "u1",
            vec![
                task("a", "u1", TaskStatus::Pending, TaskPriority::Low),
                task("b", "u1", TaskStatus::Pending, TaskPriority::Low),
            ],
        );
        let (store, _) = store_with(api.clone());
        store.refetch().await.unwrap();

        let (release_first, first_gate) = oneshot::channel();
        let (release_second, second_gate) = oneshot::channel();
        api.gate_listings(vec![first_gate, second_gate]);

        let release = async {
            tokio::task::yield_now().await;
            release_second.send(()).unwrap();
            tokio::task::yield_now().await;
            tokio::task::yield_now().await;
            release_first.send(()).unwrap();
        };
        let (first, second, ()) = tokio::join!(
            store.update("a", UpdateTaskRequest::status(TaskStatus::Completed)),
            store.update("b", UpdateTaskRequest::status(TaskStatus::Completed)),
            release,
        );
        first.unwrap();
        second.unwrap();

        let shown: Vec<_> = store.tasks().into_iter().map(|t| (t.id, t.status)).collect();
        assert_eq!(
            shown,
            vec![
                ("a".to_string(), TaskStatus::Completed),
                ("b".to_string(), TaskStatus::Completed),
            ]
        );
    }

    #[tokio::test]
    async fn unauthorized_listing_runs_callback() {
        let api = FakeTaskApi::new("u1", Vec::new());
        let (store, _) = store_with(api.clone());
        let rejected = Rc::new(Cell::new(0));
        store.on_unauthorized({
            let rejected = rejected.clone();
            move || rejected.set(rejected.get() + 1)
        });

        api.fail_list_with(ApiError::Transport("offline".to_string()));
        assert!(store.refetch().await.is_err());
        assert_eq!(rejected.get(), 0);

        api.fail_list_with(ApiError::Unauthorized);
        assert!(store.refetch().await.is_err());
        assert_eq!(rejected.get(), 1);
    }
}
