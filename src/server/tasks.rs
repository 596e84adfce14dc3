//! Outstanding background tasks
//!
//! Every unit of work runs on its own named thread. The set keeps the join
//! handles so that all work can be waited on before the owner goes away.

use anyhow::{Context, Result, anyhow};
use std::any::Any;
use std::fmt;
use std::thread::{self, JoinHandle};

/// What a task does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Build a new index and swap it in
    Rebuild,
    /// Answer a stream of queries
    Queries,
}

impl TaskKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Rebuild => "rebuild",
            TaskKind::Queries => "queries",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

enum TaskState {
    Running(JoinHandle<Result<()>>),
    /// The thread could not be started; reported on join
    SpawnFailed(anyhow::Error),
}

struct Task {
    kind: TaskKind,
    id: u64,
    state: TaskState,
}

impl Task {
    fn join(self) -> Result<()> {
        let Task { kind, id, state } = self;
        match state {
            TaskState::Running(handle) => match handle.join() {
                Ok(result) => result.with_context(|| format!("{} task {} failed", kind, id)),
                Err(payload) => Err(anyhow!(
                    "{} task {} panicked: {}",
                    kind,
                    id,
                    panic_message(payload.as_ref())
                )),
            },
            TaskState::SpawnFailed(err) => Err(err),
        }
    }
}

/// Retained handles of in-flight work. Dropping the set waits for all of it.
#[derive(Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `work` on a new thread and retain its handle
    pub fn spawn<F>(&mut self, kind: TaskKind, work: F)
    where
        F: FnOnce() -> Result<()> + Send + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;

        let state = match thread::Builder::new()
            .name(format!("docsearch-{}-{}", kind, id))
            .spawn(work)
        {
            Ok(handle) => TaskState::Running(handle),
            Err(e) => {
                tracing::error!(task = id, %kind, "failed to spawn task: {}", e);
                TaskState::SpawnFailed(
                    anyhow::Error::new(e).context(format!("Failed to spawn {} task {}", kind, id)),
                )
            }
        };

        tracing::debug!(task = id, %kind, "scheduled task");
        self.tasks.push(Task { kind, id, state });
    }

    /// Number of tasks not yet joined
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Wait for every retained task.
    ///
    /// All tasks are joined even if some fail. The first failure is returned;
    /// later ones are logged.
    pub fn join_all(&mut self) -> Result<()> {
        let mut first_error = None;

        for task in self.tasks.drain(..) {
            if let Err(e) = task.join() {
                if first_error.is_none() {
                    first_error = Some(e);
                } else {
                    tracing::error!("{:#}", e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for TaskSet {
    fn drop(&mut self) {
        if let Err(e) = self.join_all() {
            tracing::error!("background task failed: {:#}", e);
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic payload"
    }
}
