use std::{cell::Cell, future::Future, rc::Rc};

use futures::{
    executor::{LocalPool, LocalSpawner},
    future::{AbortHandle, abortable},
    task::LocalSpawnExt,
};

/// Handle to a task launched on a [`TaskScope`].
#[derive(Clone, Debug)]
pub struct Job {
    abort: AbortHandle,
    completed: Rc<Cell<bool>>,
}

impl Job {
    /// Cancel the task. A cancelled task never runs its remaining body.
    pub fn cancel(&self) {
        self.abort.abort();
    }

    /// Whether the task was cancelled before it ran to completion.
    pub fn is_cancelled(&self) -> bool {
        self.abort.is_aborted() && !self.completed.get()
    }

    /// Whether the task ran to completion.
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }

    /// Neither completed nor cancelled.
    pub fn is_active(&self) -> bool {
        !self.completed.get() && !self.abort.is_aborted()
    }
}

/// Single-threaded cooperative task scope.
///
/// Launched tasks are polled only from [`TaskScope::run_until_stalled`]. Dropping the scope
/// cancels every task that has not completed.
pub struct TaskScope {
    pool: LocalPool,
    spawner: LocalSpawner,
    jobs: Vec<Job>,
}

impl TaskScope {
    /// Create an empty scope.
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            pool,
            spawner,
            jobs: Vec::new(),
        }
    }

    /// Launch `task` on this scope. It first runs on the next [`TaskScope::run_until_stalled`].
    pub fn launch<F>(&mut self, task: F) -> Job
    where
        F: Future<Output = ()> + 'static,
    {
        let (task, abort) = abortable(task);
        let completed = Rc::new(Cell::new(false));
        let job = Job {
            abort,
            completed: Rc::clone(&completed),
        };

        let spawned = self.spawner.spawn_local(async move {
            if task.await.is_ok() {
                completed.set(true);
            }
        });
        if let Err(err) = spawned {
            tracing::warn!(%err, "task scope refused a task; cancelling it");
            job.cancel();
            return job;
        }

        self.jobs.push(job.clone());
        job
    }

    /// Poll every launched task until none can make progress.
    pub fn run_until_stalled(&mut self) {
        self.pool.run_until_stalled();
        self.jobs.retain(Job::is_active);
    }

    /// Number of tasks neither completed nor cancelled.
    pub fn active_jobs(&self) -> usize {
        self.jobs.iter().filter(|job| job.is_active()).count()
    }

    /// Cancel every task launched on this scope.
    pub fn cancel(&mut self) {
        for job in self.jobs.drain(..) {
            job.cancel();
        }
        // Aborted tasks resolve on their next poll; drain them out of the pool.
        self.pool.run_until_stalled();
    }
}

impl Default for TaskScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl std::fmt::Debug for TaskScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskScope")
            .field("active_jobs", &self.active_jobs())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/notifier/scope.rs"]
mod tests;
