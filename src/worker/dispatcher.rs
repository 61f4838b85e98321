use crate::queue::{CrawlTask, TaskQueue};
use crate::url::Target;
use crate::FinderError;
use std::sync::Arc;

/// Submits crawl tasks for seed targets
///
/// Stateless beyond submission: targets are not deduplicated here, and a
/// target dispatched twice is simply crawled twice.
pub struct Dispatcher {
    queue: Arc<dyn TaskQueue>,
}

impl Dispatcher {
    pub fn new(queue: Arc<dyn TaskQueue>) -> Self {
        Self { queue }
    }

    /// Submits one task per target
    ///
    /// # Arguments
    ///
    /// * `targets` - Normalized targets, in submission order
    ///
    /// # Returns
    ///
    /// * `Ok(usize)` - Number of tasks submitted
    /// * `Err(FinderError)` - The queue refused a task (e.g. it was closed)
    pub async fn dispatch<I>(&self, targets: I) -> Result<usize, FinderError>
    where
        I: IntoIterator<Item = Target>,
    {
        let mut submitted = 0;
        for target in targets {
            tracing::debug!("Dispatching {}", target);
            self.queue
                .submit(CrawlTask::new(target.into_string()))
                .await?;
            submitted += 1;
        }

        tracing::info!("Dispatched {} crawl tasks", submitted);
        Ok(submitted)
    }
}
