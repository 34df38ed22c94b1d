//! Toast queue used to report mutation outcomes to the user.

use std::cell::Cell;
use std::rc::Rc;

use futures_signals::signal_vec::{MutableSignalVec, MutableVec};

const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub detail: Option<String>,
}

/// Visible toasts, newest last. The oldest one is dropped past five.
#[derive(Default)]
pub struct Notices {
    items: MutableVec<Rc<Notice>>,
    next_id: Cell<u64>,
}

impl Notices {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn push(&self, kind: NoticeKind, title: impl Into<String>, detail: Option<String>) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        let mut items = self.items.lock_mut();
        items.push_cloned(Rc::new(Notice {
            id,
            kind,
            title: title.into(),
            detail,
        }));
        while items.len() > MAX_VISIBLE {
            items.remove(0);
        }
        id
    }

    pub fn success(&self, title: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, title, None)
    }

    pub fn error(&self, title: impl Into<String>, detail: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, title, Some(detail.into()))
    }

    pub fn dismiss(&self, id: u64) {
        self.items.lock_mut().retain(|notice| notice.id != id);
    }

    pub fn signal_vec(&self) -> MutableSignalVec<Rc<Notice>> {
        self.items.signal_vec_cloned()
    }

    pub fn current(&self) -> Vec<Rc<Notice>> {
        self.items.lock_ref().to_vec()
    }
}
