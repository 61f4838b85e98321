use crate::crawler::CrawlUnit;
use crate::queue::{CrawlTask, TaskQueue};
use crate::storage::Store;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// What a single worker did before the queue ran dry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerReport {
    /// Tasks received and crawled
    pub processed: usize,

    /// Results that could not be written to the store
    pub write_failures: usize,
}

impl WorkerReport {
    fn absorb(&mut self, other: WorkerReport) {
        self.processed += other.processed;
        self.write_failures += other.write_failures;
    }
}

/// A fixed set of workers competing for tasks on one queue
pub struct WorkerPool {
    handles: Vec<JoinHandle<WorkerReport>>,
}

impl WorkerPool {
    /// Spawns `count` workers on the current tokio runtime
    ///
    /// Each worker loops until the queue is closed and drained.
    pub fn spawn(
        count: usize,
        queue: Arc<dyn TaskQueue>,
        store: Arc<dyn Store>,
        unit: CrawlUnit,
    ) -> Self {
        let handles = (0..count)
            .map(|id| {
                let queue = queue.clone();
                let store = store.clone();
                let unit = unit.clone();
                tokio::spawn(async move { run_worker(id, queue, store, unit).await })
            })
            .collect();

        tracing::info!("Started {} workers", count);
        Self { handles }
    }

    /// Waits for every worker to drain the queue
    ///
    /// The queue must be closed first or this never returns.
    pub async fn join(self) -> WorkerReport {
        let mut total = WorkerReport::default();
        for handle in self.handles {
            match handle.await {
                Ok(report) => total.absorb(report),
                Err(e) => tracing::error!("Worker task aborted: {}", e),
            }
        }
        total
    }
}

async fn run_worker(
    id: usize,
    queue: Arc<dyn TaskQueue>,
    store: Arc<dyn Store>,
    unit: CrawlUnit,
) -> WorkerReport {
    let mut report = WorkerReport::default();

    while let Some(task) = queue.receive().await {
        tracing::debug!("Worker {} received {}", id, task.target_url);
        let written = process_task(&unit, &store, &task).await;

        report.processed += 1;
        if !written {
            report.write_failures += 1;
        }
    }

    tracing::debug!("Worker {} finished after {} tasks", id, report.processed);
    report
}

/// Crawls one task and writes its result through to the store
///
/// The store is synchronous, so the write runs on tokio's blocking pool. A
/// write failure is logged and the task is treated as complete; it is not
/// retried. Returns whether the write succeeded.
pub async fn process_task(unit: &CrawlUnit, store: &Arc<dyn Store>, task: &CrawlTask) -> bool {
    let result = unit.run(&task.target_url).await;
    let url = result.url.clone();

    let store = store.clone();
    match tokio::task::spawn_blocking(move || store.upsert(&result)).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            tracing::error!("Failed to store result for {}: {}", url, e);
            false
        }
        Err(e) => {
            tracing::error!("Store write for {} did not complete: {}", url, e);
            false
        }
    }
}
