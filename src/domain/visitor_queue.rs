//! Coalescing visitor counter.
//!
//! Redirects report one visit per request. Writing each visit straight to the
//! store would turn every redirect into a write, so visits are accumulated
//! per code in memory and flushed by a single background task.
//!
//! # States
//!
//! - **idle**: nothing pending, no drain task running
//! - **draining**: exactly one drain task is running
//!
//! The first [`VisitorQueue::enqueue`] on an idle queue spawns the drain
//! task. The task pops codes oldest-first, issues one
//! [`ShortLinkRepository::increment_visitors`] per code with the accumulated
//! count, and exits as soon as nothing is pending.
//!
//! Pending counts live only in memory and are lost if the process dies.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::Notify;
use tracing::{debug, error, trace, warn};

use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;

/// Visits waiting to be flushed.
///
/// `order` and `counts` always hold the same set of codes and are only
/// touched together under the queue lock.
#[derive(Debug, Default)]
struct PendingVisits {
    running: bool,
    order: VecDeque<String>,
    counts: HashMap<String, u64>,
}

impl PendingVisits {
    /// Records one visit. Returns `true` if a drain task must be started.
    fn record(&mut self, code: &str) -> bool {
        match self.counts.get_mut(code) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(code.to_string(), 1);
                self.order.push_back(code.to_string());
            }
        }

        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    /// Takes the oldest pending code with its count, or marks the queue idle.
    fn pop(&mut self) -> Option<(String, u64)> {
        match self.order.pop_front() {
            Some(code) => {
                let count = self.counts.remove(&code).unwrap_or(0);
                Some((code, count))
            }
            None => {
                self.counts.clear();
                self.running = false;
                None
            }
        }
    }
}

struct Inner {
    repository: Arc<dyn ShortLinkRepository>,
    pending: Mutex<PendingVisits>,
    idle: Notify,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, PendingVisits> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// In-process aggregator of visit counts.
///
/// Cheap to clone; clones share the same pending set and drain task.
/// Separate instances are fully isolated from each other.
#[derive(Clone)]
pub struct VisitorQueue {
    inner: Arc<Inner>,
}

impl VisitorQueue {
    /// Creates an idle queue flushing into `repository`.
    pub fn new(repository: Arc<dyn ShortLinkRepository>) -> Self {
        Self {
            inner: Arc::new(Inner {
                repository,
                pending: Mutex::new(PendingVisits::default()),
                idle: Notify::new(),
            }),
        }
    }

    /// Records one visit for `code`.
    ///
    /// Only holds the queue lock for the in-memory update. If the queue was
    /// idle a drain task is spawned on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    pub fn enqueue(&self, code: &str) {
        let start_worker = self.inner.lock().record(code);
        metrics::counter!("visits_enqueued_total").increment(1);

        if start_worker {
            trace!("Starting visitor drain task");
            tokio::spawn(drain(self.inner.clone()));
        }
    }

    /// Returns `true` if no drain task is running.
    pub fn is_idle(&self) -> bool {
        !self.inner.lock().running
    }

    /// Number of distinct codes with unflushed visits.
    pub fn pending_codes(&self) -> usize {
        self.inner.lock().order.len()
    }

    /// Waits until the queue has drained and gone idle.
    ///
    /// Returns immediately if the queue is already idle.
    pub async fn idle(&self) {
        loop {
            let notified = self.inner.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.is_idle() {
                return;
            }

            notified.await;
        }
    }
}

/// Drain loop: flush pending codes one at a time until none remain.
async fn drain(inner: Arc<Inner>) {
    loop {
        let next = inner.lock().pop();

        let Some((code, visitors)) = next else {
            inner.idle.notify_waiters();
            trace!("Visitor drain task finished");
            return;
        };

        match inner.repository.increment_visitors(&code, visitors).await {
            Ok(()) => {
                metrics::counter!("visitor_flushes_total").increment(1);
                debug!(code = %code, visitors, "Flushed visitor count");
            }
            Err(AppError::NotFound { .. }) => {
                metrics::counter!("visitor_flush_failures_total").increment(1);
                warn!(code = %code, visitors, "Dropped visits for unknown code");
            }
            Err(e) => {
                metrics::counter!("visitor_flush_failures_total").increment(1);
                error!(code = %code, visitors, error = %e, "Failed to flush visitor count");
            }
        }
    }
}
