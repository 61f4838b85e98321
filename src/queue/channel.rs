use crate::queue::{CrawlTask, QueueError, TaskQueue};
use async_trait::async_trait;
use tokio::sync::{mpsc, Mutex};

/// In-process queue over an unbounded tokio channel
///
/// The receiving half sits behind a mutex so any number of workers can
/// compete for tasks; each task goes to exactly one of them.
pub struct ChannelQueue {
    sender: Mutex<Option<mpsc::UnboundedSender<CrawlTask>>>,
    receiver: Mutex<mpsc::UnboundedReceiver<CrawlTask>>,
}

impl ChannelQueue {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender: Mutex::new(Some(sender)),
            receiver: Mutex::new(receiver),
        }
    }
}

impl Default for ChannelQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskQueue for ChannelQueue {
    async fn submit(&self, task: CrawlTask) -> Result<(), QueueError> {
        let sender = self.sender.lock().await;
        match sender.as_ref() {
            Some(sender) => sender.send(task).map_err(|_| QueueError::Closed),
            None => Err(QueueError::Closed),
        }
    }

    async fn receive(&self) -> Option<CrawlTask> {
        self.receiver.lock().await.recv().await
    }

    async fn close(&self) {
        // Dropping the only sender lets receivers drain and then see None
        self.sender.lock().await.take();
    }
}
