//! Transient alert banners with cancellable auto-dismiss.
//!
//! [`AlertCenter::show`] inserts a banner through an [`AlertHost`] and
//! schedules its removal on a [`Scheduler`]. The returned id can dismiss the
//! banner early, which also cancels the pending removal task.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use quick_xml::escape::escape;

use crate::error::Result;

/// How long a banner stays up before it removes itself.
pub const ALERT_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Accessible label of the close button.
pub const CLOSE_LABEL: &str = "Fechar";

/// Bootstrap contextual style of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
}

impl AlertKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Parse a kind name; unknown names become [`AlertKind::Info`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            _ => Self::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AlertId(pub u64);

/// A banner to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: AlertId,
    pub message: String,
    pub kind: AlertKind,
}

impl Alert {
    /// CSS classes of the banner container.
    pub fn class_name(&self) -> String {
        format!(
            "alert alert-{} alert-dismissible fade show position-fixed top-0 start-50 translate-middle-x mt-3",
            self.kind.as_str()
        )
    }

    /// Inner markup: the escaped message and a close button.
    pub fn inner_html(&self) -> String {
        format!(
            "{}<button type=\"button\" class=\"btn-close\" data-bs-dismiss=\"alert\" aria-label=\"{CLOSE_LABEL}\"></button>",
            escape(self.message.as_str())
        )
    }
}

/// Handle of a scheduled task, used to cancel it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(pub i64);

/// Runs deferred tasks. Cancelling a task that already ran is a no-op.
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<TaskHandle>;

    /// Cancel a pending task. Returns true if it had not run yet.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

/// Place that displays banners (the page body on wasm).
pub trait AlertHost {
    fn insert(&mut self, alert: &Alert) -> Result<()>;

    /// Remove a banner. Returns false if it was not displayed.
    fn remove(&mut self, id: AlertId) -> bool;
}

/// Scheduler whose clock only moves when [`ManualScheduler::advance`] is called.
#[derive(Default)]
pub struct ManualScheduler {
    now: Duration,
    next_handle: i64,
    tasks: BTreeMap<(Duration, TaskHandle), Box<dyn FnOnce()>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Move the clock forward and run every task that came due, in due order.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.now += by;
        let mut ran = 0;
        while let Some(entry) = self.tasks.first_entry() {
            if entry.key().0 > self.now {
                break;
            }
            let task = entry.remove();
            task();
            ran += 1;
        }
        ran
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<TaskHandle> {
        self.next_handle += 1;
        let handle = TaskHandle(self.next_handle);
        self.tasks.insert((self.now + delay, handle), task);
        Ok(handle)
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let key = self.tasks.keys().find(|(_, h)| *h == handle).copied();
        key.and_then(|key| self.tasks.remove(&key)).is_some()
    }
}

/// Shows banners and owns their pending removal tasks.
pub struct AlertCenter<H: AlertHost, S: Scheduler> {
    host: Rc<RefCell<H>>,
    scheduler: S,
    pending: Rc<RefCell<HashMap<AlertId, TaskHandle>>>,
    next_id: u64,
    dismiss_after: Duration,
}

impl<H: AlertHost + 'static, S: Scheduler> AlertCenter<H, S> {
    pub fn new(host: H, scheduler: S) -> Self {
        Self {
            host: Rc::new(RefCell::new(host)),
            scheduler,
            pending: Rc::new(RefCell::new(HashMap::new())),
            next_id: 0,
            dismiss_after: ALERT_DISMISS_AFTER,
        }
    }

    #[must_use]
    pub fn with_dismiss_after(mut self, delay: Duration) -> Self {
        self.dismiss_after = delay;
        self
    }

    /// Display `message` and schedule its removal.
    pub fn show(&mut self, message: &str, kind: AlertKind) -> Result<AlertId> {
        self.next_id += 1;
        let alert = Alert {
            id: AlertId(self.next_id),
            message: message.to_string(),
            kind,
        };
        self.host.borrow_mut().insert(&alert)?;

        let id = alert.id;
        let host = Rc::clone(&self.host);
        let pending = Rc::clone(&self.pending);
        let scheduled = self.scheduler.schedule(
            self.dismiss_after,
            Box::new(move || {
                pending.borrow_mut().remove(&id);
                host.borrow_mut().remove(id);
            }),
        );
        match scheduled {
            Ok(handle) => {
                self.pending.borrow_mut().insert(id, handle);
                Ok(id)
            }
            Err(err) => {
                self.host.borrow_mut().remove(id);
                Err(err)
            }
        }
    }

    /// Remove a banner now and cancel its scheduled removal.
    pub fn dismiss(&mut self, id: AlertId) -> bool {
        let handle = self.pending.borrow_mut().remove(&id);
        if let Some(handle) = handle {
            self.scheduler.cancel(handle);
        }
        self.host.borrow_mut().remove(id)
    }

    /// Ids of banners still waiting for their automatic removal.
    pub fn pending(&self) -> Vec<AlertId> {
        let mut ids: Vec<_> = self.pending.borrow().keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn host(&self) -> std::cell::Ref<'_, H> {
        self.host.borrow()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

/// Host that keeps banners in memory, in display order.
#[derive(Debug, Default)]
pub struct MemoryAlertHost {
    alerts: Vec<Alert>,
}

impl MemoryAlertHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }
}

impl AlertHost for MemoryAlertHost {
    fn insert(&mut self, alert: &Alert) -> Result<()> {
        self.alerts.push(alert.clone());
        Ok(())
    }

    fn remove(&mut self, id: AlertId) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|a| a.id != id);
        self.alerts.len() != before
    }
}
