//! Single owner of all task store mutations.
//!
//! The interactive commands and the alarm scanner both talk to the store
//! through a [`StoreHandle`]. Requests are queued on a channel and applied one
//! at a time by the actor, each as a full load, mutate, save cycle, so two
//! writers in the same process can no longer overwrite each other's changes.
//! Records that fail to load are carried through every save untouched.

use super::tasks::{next_id, LoadOutcome, TaskStore};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use crate::{msg_error, msg_warning};
use chrono::NaiveDateTime;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

const QUEUE_CAPACITY: usize = 32;

type Reply<T> = oneshot::Sender<Result<T, TaskError>>;

enum StoreRequest {
    Snapshot { reply: Reply<Vec<Task>> },
    Add { task: Task, reply: Reply<Task> },
    Complete { id: TaskId, reply: Reply<Task> },
    Delete { id: TaskId, reply: Reply<Task> },
    Resolve { position: usize, reply: Reply<Task> },
    AdvanceFired { id: TaskId, fired_due: NaiveDateTime, reply: Reply<Option<NaiveDateTime>> },
    RollOver { reply: Reply<usize> },
}

#[derive(Clone)]
pub struct StoreHandle {
    tx: mpsc::Sender<StoreRequest>,
}

/// Starts the actor on the current tokio runtime and returns its handle.
/// The actor stops once every handle has been dropped.
pub fn spawn(store: TaskStore) -> StoreHandle {
    let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
    let actor = StoreActor {
        store: Arc::new(store),
        rx,
    };
    tokio::spawn(actor.run());
    StoreHandle { tx }
}

impl StoreHandle {
    async fn request<T>(&self, make: impl FnOnce(Reply<T>) -> StoreRequest) -> Result<T, TaskError> {
        let (reply, response) = oneshot::channel();
        self.tx.send(make(reply)).await.map_err(|_| TaskError::StoreClosed)?;
        response.await.map_err(|_| TaskError::StoreClosed)?
    }

    /// Current task list in insertion order.
    pub async fn snapshot(&self) -> Result<Vec<Task>, TaskError> {
        self.request(|reply| StoreRequest::Snapshot { reply }).await
    }

    /// Stores a validated task and returns it with its assigned id.
    pub async fn add(&self, task: Task) -> Result<Task, TaskError> {
        self.request(|reply| StoreRequest::Add { task, reply }).await
    }

    pub async fn complete(&self, id: TaskId) -> Result<Task, TaskError> {
        self.request(|reply| StoreRequest::Complete { id, reply }).await
    }

    pub async fn delete(&self, id: TaskId) -> Result<Task, TaskError> {
        self.request(|reply| StoreRequest::Delete { id, reply }).await
    }

    /// Maps a 1-based list position to the task currently at that position.
    pub async fn resolve(&self, position: usize) -> Result<Task, TaskError> {
        self.request(|reply| StoreRequest::Resolve { position, reply }).await
    }

    /// Reschedules a recurring task that fired at `fired_due`.
    ///
    /// Nothing changes (and `None` is returned) if the task has since been
    /// completed, deleted, moved to another due time or made non-recurring.
    pub async fn advance_fired(&self, id: TaskId, fired_due: NaiveDateTime) -> Result<Option<NaiveDateTime>, TaskError> {
        self.request(|reply| StoreRequest::AdvanceFired { id, fired_due, reply }).await
    }

    /// Moves every completed recurring task to its next occurrence and marks
    /// it pending again. Returns how many tasks were rolled over.
    pub async fn roll_over(&self) -> Result<usize, TaskError> {
        self.request(|reply| StoreRequest::RollOver { reply }).await
    }
}

struct StoreActor {
    store: Arc<TaskStore>,
    rx: mpsc::Receiver<StoreRequest>,
}

impl StoreActor {
    async fn run(mut self) {
        while let Some(request) = self.rx.recv().await {
            let store = Arc::clone(&self.store);
            // File and cipher work runs on the blocking pool. Awaiting it here
            // keeps requests applied one at a time.
            if let Err(e) = tokio::task::spawn_blocking(move || handle(&store, request)).await {
                msg_error!(Message::StoreWorkerFailed(e.to_string()));
            }
        }
    }
}

fn handle(store: &TaskStore, request: StoreRequest) {
    match request {
        StoreRequest::Snapshot { reply } => {
            let _ = reply.send(Ok(Document::load(store).tasks));
        }
        StoreRequest::Add { task, reply } => {
            let _ = reply.send(add(store, task));
        }
        StoreRequest::Complete { id, reply } => {
            let _ = reply.send(complete(store, id));
        }
        StoreRequest::Delete { id, reply } => {
            let _ = reply.send(delete(store, id));
        }
        StoreRequest::Resolve { position, reply } => {
            let _ = reply.send(resolve(store, position));
        }
        StoreRequest::AdvanceFired { id, fired_due, reply } => {
            let _ = reply.send(advance_fired(store, id, fired_due));
        }
        StoreRequest::RollOver { reply } => {
            let _ = reply.send(roll_over(store));
        }
    }
}

/// The loaded task list plus any records that could not be read, which are
/// written back unchanged on save.
struct Document {
    tasks: Vec<Task>,
    unreadable: Vec<Value>,
}

impl Document {
    fn load(store: &TaskStore) -> Document {
        let LoadOutcome { tasks, unreadable, error } = store.load();
        // Unreadable records were already reported one by one.
        if let (Some(error), true) = (&error, unreadable.is_empty()) {
            msg_warning!(Message::StoreLoadRecovered(error.to_string()));
        }
        Document { tasks, unreadable }
    }

    fn save(&self, store: &TaskStore) -> Result<(), TaskError> {
        store.save_keeping(&self.tasks, &self.unreadable)
    }
}

fn add(store: &TaskStore, mut task: Task) -> Result<Task, TaskError> {
    let mut doc = Document::load(store);
    task.id = next_id(&doc.tasks);
    doc.tasks.push(task.clone());
    doc.save(store)?;
    Ok(task)
}

fn complete(store: &TaskStore, id: TaskId) -> Result<Task, TaskError> {
    let mut doc = Document::load(store);
    let task = doc.tasks.iter_mut().find(|t| t.id == id).ok_or(TaskError::NotFound(id))?;
    task.completed = true;
    let completed = task.clone();
    doc.save(store)?;
    Ok(completed)
}

fn delete(store: &TaskStore, id: TaskId) -> Result<Task, TaskError> {
    let mut doc = Document::load(store);
    let index = doc.tasks.iter().position(|t| t.id == id).ok_or(TaskError::NotFound(id))?;
    let removed = doc.tasks.remove(index);
    doc.save(store)?;
    Ok(removed)
}

fn resolve(store: &TaskStore, position: usize) -> Result<Task, TaskError> {
    let tasks = Document::load(store).tasks;
    position
        .checked_sub(1)
        .and_then(|index| tasks.get(index))
        .cloned()
        .ok_or(TaskError::NoTaskAtPosition(position))
}

fn advance_fired(store: &TaskStore, id: TaskId, fired_due: NaiveDateTime) -> Result<Option<NaiveDateTime>, TaskError> {
    let mut doc = Document::load(store);
    let Some(task) = doc.tasks.iter_mut().find(|t| t.id == id) else {
        return Ok(None);
    };
    if task.completed || task.due_instant() != Some(fired_due) {
        return Ok(None);
    }
    let next = task.reschedule();
    if next.is_some() {
        doc.save(store)?;
    }
    Ok(next)
}

fn roll_over(store: &TaskStore) -> Result<usize, TaskError> {
    let mut doc = Document::load(store);
    let rolled = doc
        .tasks
        .iter_mut()
        .filter(|t| t.completed && t.recurring.is_recurring())
        .filter_map(|t| t.reschedule())
        .count();
    if rolled > 0 {
        doc.save(store)?;
    }
    Ok(rolled)
}
