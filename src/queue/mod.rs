//! Task distribution between the dispatcher and workers
//!
//! The queue carries [`CrawlTask`] payloads. Delivery is treated as
//! at-least-once: workers must tolerate the same target arriving twice,
//! which the store's per-URL upsert makes harmless.

mod channel;

pub use channel::ChannelQueue;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The message a worker receives: one target to crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlTask {
    pub target_url: String,
}

impl CrawlTask {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
        }
    }
}

/// Errors raised by a task queue
#[derive(Debug, Error)]
pub enum QueueError {
    #[error("task queue is closed")]
    Closed,
}

/// A medium that carries crawl tasks from the dispatcher to workers
#[async_trait]
pub trait TaskQueue: Send + Sync {
    /// Submits a task; fire-and-forget from the caller's point of view
    async fn submit(&self, task: CrawlTask) -> Result<(), QueueError>;

    /// Waits for the next task
    ///
    /// Returns None once the queue is closed and every submitted task has
    /// been handed out.
    async fn receive(&self) -> Option<CrawlTask>;

    /// Stops accepting new tasks; already queued tasks are still delivered
    async fn close(&self);
}
