//! FIFO admission queue with reader/writer access
//!
//! Requests are admitted strictly in submission order by one dispatcher task.
//! Before admitting the next request the dispatcher takes an owned guard on a
//! shared gate: a read guard for [`Access::Shared`] work, the write guard for
//! [`Access::Exclusive`] work. Shared work therefore overlaps with adjacent
//! shared work, while exclusive work waits for everything admitted before it
//! and holds back everything submitted after it.

use super::completion::Completion;
use feedstore_core::Result;
use futures::future::BoxFuture;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, oneshot, RwLock};
use tracing::{debug, trace};

/// How an operation shares the store with its neighbours
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    /// May run alongside other shared operations
    Shared,
    /// Runs alone
    Exclusive,
}

struct Request {
    access: Access,
    operation: &'static str,
    work: BoxFuture<'static, ()>,
}

/// Submission side of a store's dispatcher; clones share one ordering domain
#[derive(Clone)]
pub(crate) struct SyncQueue {
    sender: mpsc::UnboundedSender<Request>,
    handle: Handle,
    path: Arc<PathBuf>,
}

impl SyncQueue {
    /// Start a dispatcher on `handle` for the store at `path`
    pub(crate) fn spawn(path: Arc<PathBuf>, handle: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        handle.spawn(dispatch(receiver, Arc::clone(&path)));
        Self {
            sender,
            handle,
            path,
        }
    }

    /// Queue `work` and return the handle its result will arrive on.
    ///
    /// Admission order is the order of calls to this method.
    pub(crate) fn submit<T, F>(&self, access: Access, operation: &'static str, work: F) -> Completion<T>
    where
        T: Send + 'static,
        F: Future<Output = Result<T>> + Send + 'static,
    {
        let (result_tx, result_rx) = oneshot::channel();
        let request = Request {
            access,
            operation,
            work: Box::pin(async move {
                // The caller may have dropped its completion; the work still ran.
                let _ = result_tx.send(work.await);
            }),
        };

        if self.sender.send(request).is_err() {
            // Dropping the request drops its sender, so the completion resolves as interrupted.
            debug!(path = %self.path.display(), operation, "dispatcher stopped, operation not admitted");
        }

        Completion::new(result_rx, self.handle.clone(), Arc::clone(&self.path), operation)
    }
}

impl std::fmt::Debug for SyncQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncQueue")
            .field("path", &self.path)
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

async fn dispatch(mut receiver: mpsc::UnboundedReceiver<Request>, path: Arc<PathBuf>) {
    let gate = Arc::new(RwLock::new(()));

    // Ends once every SyncQueue clone is dropped and the backlog is drained.
    while let Some(request) = receiver.recv().await {
        let Request {
            access,
            operation,
            work,
        } = request;

        match access {
            Access::Shared => {
                let guard = Arc::clone(&gate).read_owned().await;
                trace!(path = %path.display(), operation, "admitted shared");
                tokio::spawn(async move {
                    work.await;
                    drop(guard);
                });
            }
            Access::Exclusive => {
                let guard = Arc::clone(&gate).write_owned().await;
                trace!(path = %path.display(), operation, "admitted exclusive");
                tokio::spawn(async move {
                    work.await;
                    drop(guard);
                });
            }
        }
    }

    debug!(path = %path.display(), "feed store dispatcher stopped");
}
