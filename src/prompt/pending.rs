//! The caller's side of an open prompt.

use crate::error::{Error, Result};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// What the prompt service sends back through the channel.
pub(crate) type Reply<R> = oneshot::Sender<Result<Option<R>>>;

/// A not-yet-resolved answer returned by [`AsyncPrompt::open`](super::AsyncPrompt::open).
///
/// Resolves to `Ok(Some(answer))` when the user picks something, `Ok(None)` when the
/// prompt is dismissed, `Err(Error::PromptSuperseded)` when a newer request preempts it
/// and `Err(Error::PromptClosed)` when the prompt service is dropped first.
///
/// The handle owns only the receiving end of a one-shot channel; it does not
/// borrow the prompt service.
#[derive(Debug)]
#[must_use = "the answer is lost unless the handle is awaited"]
pub struct PendingAnswer<R> {
    kind: &'static str,
    rx: oneshot::Receiver<Result<Option<R>>>,
}

impl<R> PendingAnswer<R> {
    pub(crate) fn channel(kind: &'static str) -> (Reply<R>, Self) {
        let (tx, rx) = oneshot::channel();
        (tx, Self { kind, rx })
    }

    /// Name of the prompt kind this answer belongs to.
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Non-blocking check. `None` while the prompt is still waiting.
    pub fn try_answer(&mut self) -> Option<Result<Option<R>>> {
        match self.rx.try_recv() {
            Ok(reply) => Some(reply),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => {
                Some(Err(Error::PromptClosed { kind: self.kind }))
            }
        }
    }
}

impl PendingAnswer<bool> {
    /// Resolves a confirmation, treating dismissal as "not confirmed".
    pub async fn confirmed(self) -> Result<bool> {
        Ok(self.await?.unwrap_or(false))
    }
}

impl<R> Future for PendingAnswer<R> {
    type Output = Result<Option<R>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let kind = self.kind;
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(reply)) => Poll::Ready(reply),
            Poll::Ready(Err(_)) => Poll::Ready(Err(Error::PromptClosed { kind })),
            Poll::Pending => Poll::Pending,
        }
    }
}
