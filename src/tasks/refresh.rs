//! Background Refresh Queue
//!
//! A bounded queue plus a worker task that runs forced category refreshes
//! off the request path. Submissions are fire-and-forget: the worker logs
//! failures and keeps going, no caller ever observes them.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::models::Category;
use crate::service::TrendingService;

/// Upper bound on refreshes waiting in the queue at once.
const QUEUE_CAPACITY: usize = 32;

// == Refresh Queue ==

/// Handle to the background refresh worker.
pub struct RefreshQueue {
    /// Sending side of the bounded work channel
    tx: mpsc::Sender<Category>,
    /// The worker task, kept for shutdown
    handle: JoinHandle<()>,
}

impl RefreshQueue {
    /// Spawns the worker task and returns the queue handle.
    ///
    /// The worker drains submissions one at a time and runs a forced
    /// refresh for each; the rate limiter inside the service keeps these
    /// fetches spaced like any other.
    pub fn spawn(service: Arc<TrendingService>) -> Self {
        let (tx, mut rx) = mpsc::channel::<Category>(QUEUE_CAPACITY);

        let handle = tokio::spawn(async move {
            info!("Background refresh worker started");
            while let Some(category) = rx.recv().await {
                match service.refresh(category).await {
                    Ok(listings) => {
                        info!(
                            "Background refresh for '{}' cached {} prompts",
                            category,
                            listings.len()
                        );
                    }
                    Err(err) => {
                        warn!("Background refresh for '{}' failed: {}", category, err);
                    }
                }
            }
            info!("Background refresh worker stopped");
        });

        Self { tx, handle }
    }

    // == Submit ==

    /// Queues a category for a background refresh.
    ///
    /// Returns false when the queue is full or the worker is gone; the
    /// failure is logged and otherwise swallowed.
    pub fn submit(&self, category: Category) -> bool {
        match self.tx.try_send(category) {
            Ok(()) => {
                info!("Queued background refresh for '{}'", category);
                true
            }
            Err(err) => {
                warn!(
                    "Could not queue background refresh for '{}': {}",
                    category, err
                );
                false
            }
        }
    }

    // == Shutdown ==

    /// Stops the worker task immediately.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Whether the worker task has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
