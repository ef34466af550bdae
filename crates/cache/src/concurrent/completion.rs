//! Single-delivery result handle for a submitted store operation

use feedstore_core::{Result, StoreError};
use std::future::Future;
use std::marker::PhantomData;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::sync::oneshot;

/// The pending result of one store operation.
///
/// The operation is already queued when this is returned; awaiting it only
/// observes the result. Dropping it does not cancel the operation. If the
/// worker goes away without answering, the result is
/// [`StoreError::Interrupted`] rather than a hang.
#[must_use = "the operation runs regardless, but its result is only observable through the completion"]
pub struct Completion<T> {
    receiver: oneshot::Receiver<Result<T>>,
    handle: Handle,
    path: Arc<PathBuf>,
    operation: &'static str,
}

impl<T> Completion<T> {
    pub(crate) fn new(
        receiver: oneshot::Receiver<Result<T>>,
        handle: Handle,
        path: Arc<PathBuf>,
        operation: &'static str,
    ) -> Self {
        Self {
            receiver,
            handle,
            path,
            operation,
        }
    }

    /// Name of the operation this completion belongs to
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        self.operation
    }

    fn interrupted(&self) -> StoreError {
        StoreError::interrupted(self.path.as_ref().clone(), self.operation)
    }

    /// Block the current thread until the result arrives.
    ///
    /// For callers outside any async runtime. From inside a runtime this
    /// returns [`StoreError::Runtime`] instead of blocking a worker; await the
    /// completion there.
    pub fn wait(self) -> Result<T> {
        if Handle::try_current().is_ok() {
            return Err(StoreError::runtime(format!(
                "cannot block on {} from within an async runtime; await it instead",
                self.operation
            )));
        }
        let interrupted = self.interrupted();
        self.receiver.blocking_recv().unwrap_or(Err(interrupted))
    }
}

impl<T: Send + 'static> Completion<T> {
    /// Deliver the result to `callback` once, on the store's runtime.
    ///
    /// If the runtime refuses or abandons the delivery task, the callback
    /// still runs, with [`StoreError::Interrupted`], wherever the task is
    /// dropped. That may be the calling thread.
    pub fn on_complete<F>(self, callback: F)
    where
        F: FnOnce(Result<T>) + Send + 'static,
    {
        let handle = self.handle.clone();
        let guard = CallbackGuard {
            callback: Some(callback),
            path: Arc::clone(&self.path),
            operation: self.operation,
            _result: PhantomData,
        };
        handle.spawn(async move {
            let result = self.await;
            guard.deliver(result);
        });
    }
}

/// Owns a callback until it has been given a result.
///
/// Dropped undelivered, it hands the callback an interrupted error.
struct CallbackGuard<T, F>
where
    F: FnOnce(Result<T>),
{
    callback: Option<F>,
    path: Arc<PathBuf>,
    operation: &'static str,
    _result: PhantomData<fn(T)>,
}

impl<T, F> CallbackGuard<T, F>
where
    F: FnOnce(Result<T>),
{
    fn deliver(mut self, result: Result<T>) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl<T, F> Drop for CallbackGuard<T, F>
where
    F: FnOnce(Result<T>),
{
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback(Err(StoreError::interrupted(
                self.path.as_ref().clone(),
                self.operation,
            )));
        }
    }
}

impl<T> Future for Completion<T> {
    type Output = Result<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(_)) => Poll::Ready(Err(this.interrupted())),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl<T> std::fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("operation", &self.operation)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
