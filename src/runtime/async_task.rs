//! Async task and stream handles for blocking scoring work.
//!
//! Checkout walks and file reads run on the blocking pool; results travel
//! back over channels.

use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use tokio::sync::{Semaphore, mpsc, oneshot};

/// Single result of a blocking job running behind a concurrency limit.
///
/// Resolves to `Err` when the job panicked or the runtime shut down before it
/// produced a value.
pub struct AsyncTask<T> {
    rx: oneshot::Receiver<T>,
}

impl<T> AsyncTask<T>
where
    T: Send + 'static,
{
    /// Run `f` on the blocking pool once a permit from `limit` is free.
    ///
    /// The permit is held until `f` returns.
    pub fn spawn_limited<F>(limit: Arc<Semaphore>, f: F) -> Self
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        tokio::task::spawn(async move {
            let Ok(_permit) = limit.acquire_owned().await else {
                return;
            };
            if let Ok(value) = tokio::task::spawn_blocking(f).await {
                let _ = tx.send(value);
            }
        });
        Self { rx }
    }
}

impl<T> Future for AsyncTask<T> {
    type Output = Result<T, oneshot::error::RecvError>;

    #[inline]
    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}

/// Results arriving in completion order.
///
/// Ends once every sender has been dropped.
pub struct AsyncStream<T> {
    rx: mpsc::UnboundedReceiver<T>,
}

impl<T> AsyncStream<T> {
    /// Paired sender and stream
    #[must_use]
    pub fn channel() -> (mpsc::UnboundedSender<T>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx })
    }
}

impl<T> Stream for AsyncStream<T> {
    type Item = T;

    #[inline]
    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}
