//! In-memory stand-ins for the external services.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use taskflow_auth_core::{
    AuthApi, AuthError, AuthResult, Credentials, CurrentUser, Role, Session,
};
use taskflow_core::{
    ApiError, ApiResult, CreateTaskRequest, Task, TaskApi, TaskPriority, TaskStatus,
    UpdateTaskRequest,
};
use tokio::sync::oneshot;

pub fn session(user_id: &str, role: Role) -> Session {
    Session {
        user: CurrentUser {
            id: user_id.to_string(),
            email: format!("{user_id}@example.com"),
        },
        role,
        token: format!("token-{user_id}"),
        expires_at: Utc::now() + Duration::hours(1),
    }
}

pub fn task(id: &str, owner: &str, status: TaskStatus, priority: TaskPriority) -> Task {
    Task {
        id: id.to_string(),
        title: format!("Task {id}"),
        description: None,
        status,
        priority,
        created_by: owner.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
    }
}

pub struct FakeAuthApi {
    session: Option<Session>,
    fail_lookup: bool,
    fail_sign_out: Cell<bool>,
    lookups: Cell<usize>,
    sign_outs: Cell<usize>,
}

impl FakeAuthApi {
    pub fn with_session(session: Option<Session>) -> Rc<Self> {
        Rc::new(Self {
            session,
            fail_lookup: false,
            fail_sign_out: Cell::new(false),
            lookups: Cell::new(0),
            sign_outs: Cell::new(0),
        })
    }

    pub fn failing_lookup() -> Rc<Self> {
        Rc::new(Self {
            session: None,
            fail_lookup: true,
            fail_sign_out: Cell::new(false),
            lookups: Cell::new(0),
            sign_outs: Cell::new(0),
        })
    }

    pub fn fail_sign_out(&self) {
        self.fail_sign_out.set(true);
    }

    pub fn session_lookups(&self) -> usize {
        self.lookups.get()
    }

    pub fn sign_outs(&self) -> usize {
        self.sign_outs.get()
    }
}

#[async_trait(?Send)]
impl AuthApi for FakeAuthApi {
    async fn current_session(&self) -> AuthResult<Option<Session>> {
        self.lookups.set(self.lookups.get() + 1);
        if self.fail_lookup {
            return Err(AuthError::Transport("offline".to_string()));
        }
        Ok(self.session.clone())
    }

    async fn sign_in(&self, credentials: &Credentials) -> AuthResult<Session> {
        if credentials.password == "secret" {
            Ok(session("signed-in", Role::User))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    async fn sign_out(&self, _session: &Session) -> AuthResult<()> {
        self.sign_outs.set(self.sign_outs.get() + 1);
        if self.fail_sign_out.get() {
            Err(AuthError::Transport("offline".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Task service backed by a vector, newest first.
pub struct FakeTaskApi {
    pub tasks: RefCell<Vec<Task>>,
    pub owner: String,
    pub fail_list: RefCell<Option<ApiError>>,
    pub fail_mutations: RefCell<Option<ApiError>>,
    pub list_calls: Cell<usize>,
    list_gates: RefCell<VecDeque<oneshot::Receiver<()>>>,
    next_id: Cell<usize>,
}

impl FakeTaskApi {
    pub fn new(owner: &str, tasks: Vec<Task>) -> Rc<Self> {
        Rc::new(Self {
            tasks: RefCell::new(tasks),
            owner: owner.to_string(),
            fail_list: RefCell::new(None),
            fail_mutations: RefCell::new(None),
            list_calls: Cell::new(0),
            list_gates: RefCell::new(VecDeque::new()),
            next_id: Cell::new(1),
        })
    }

    pub fn fail_list_with(&self, error: ApiError) {
        *self.fail_list.borrow_mut() = Some(error);
    }

    /// Each following listing takes its snapshot immediately but only
    /// returns once its gate is released.
    pub fn gate_listings(&self, gates: Vec<oneshot::Receiver<()>>) {
        self.list_gates.borrow_mut().extend(gates);
    }

    pub fn fail_mutations_with(&self, error: ApiError) {
        *self.fail_mutations.borrow_mut() = Some(error);
    }

    fn mutation_error(&self) -> ApiResult<()> {
        match self.fail_mutations.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeTaskApi {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        self.list_calls.set(self.list_calls.get() + 1);
        if let Some(error) = self.fail_list.borrow().clone() {
            return Err(error);
        }
        let snapshot = self.tasks.borrow().clone();
        let gate = self.list_gates.borrow_mut().pop_front();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(snapshot)
    }

    async fn create_task(&self, request: &CreateTaskRequest) -> ApiResult<Task> {
        self.mutation_error()?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut created = task(
            &format!("new-{id}"),
            &self.owner,
            TaskStatus::Pending,
            request.priority.unwrap_or_default(),
        );
        created.title = request.title.clone();
        created.description = request.description.clone();
        self.tasks.borrow_mut().insert(0, created.clone());
        Ok(created)
    }

    async fn update_task(&self, id: &str, request: &UpdateTaskRequest) -> ApiResult<Task> {
        self.mutation_error()?;
        let mut tasks = self.tasks.borrow_mut();
        let task = tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;
        if let Some(status) = request.status {
            task.status = status;
        }
        if let Some(priority) = request.priority {
            task.priority = priority;
        }
        if let Some(title) = &request.title {
            task.title = title.clone();
        }
        if let Some(description) = &request.description {
            task.description = Some(description.clone());
        }
        Ok(task.clone())
    }

    async fn delete_task(&self, id: &str) -> ApiResult<()> {
        self.mutation_error()?;
        let mut tasks = self.tasks.borrow_mut();
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        if tasks.len() == before {
            return Err(ApiError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }
}
