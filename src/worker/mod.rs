//! Dispatching targets and running workers
//!
//! The [`Dispatcher`] puts one task per target on a [`TaskQueue`]; a
//! [`WorkerPool`] runs N workers that each pull one task at a time, crawl it
//! and write the result through to the store. [`crawl`] wires the two
//! together for a whole seed list.

mod dispatcher;
mod pool;

pub use dispatcher::Dispatcher;
pub use pool::{process_task, WorkerPool, WorkerReport};

use crate::config::Config;
use crate::crawler::CrawlUnit;
use crate::fetch::Fetcher;
use crate::queue::{ChannelQueue, TaskQueue};
use crate::storage::Store;
use crate::url::Target;
use crate::FinderError;
use std::sync::Arc;

/// Crawls every target and writes the results to the store
///
/// Starts the configured number of workers on an in-process queue,
/// dispatches the targets, closes the queue and waits for the workers to
/// drain it.
///
/// # Arguments
///
/// * `config` - Fetcher and worker settings
/// * `store` - Destination for one document per target
/// * `targets` - Normalized seed targets
///
/// # Returns
///
/// * `Ok(WorkerReport)` - Totals across all workers
/// * `Err(FinderError)` - The fetcher could not be built or dispatch failed
pub async fn crawl(
    config: &Config,
    store: Arc<dyn Store>,
    targets: Vec<Target>,
) -> Result<WorkerReport, FinderError> {
    let fetcher = Fetcher::from_config(&config.fetcher)?;
    tracing::info!(
        "Fetch strategies: {}",
        fetcher.strategy_names().join(", ")
    );
    let unit = CrawlUnit::new(Arc::new(fetcher));

    let queue: Arc<dyn TaskQueue> = Arc::new(ChannelQueue::new());
    let pool = WorkerPool::spawn(config.workers.count, queue.clone(), store, unit);

    let dispatched = Dispatcher::new(queue.clone()).dispatch(targets).await;
    queue.close().await;
    let report = pool.join().await;
    dispatched?;

    tracing::info!(
        "Crawl complete: {} tasks processed, {} write failures",
        report.processed,
        report.write_failures
    );
    Ok(report)
}
