//! Asynchronous user prompts
//!
//! An [`AsyncPrompt`] bridges a call site that wants to ask the user something and
//! suspend until the answer arrives, and a rendering layer that shows the prompt
//! and later reports what the user picked.
//!
//! - `pending`: the caller's handle, a future resolving to the answer
//! - `confirm`, `scope`, `restore`: the prompt kinds used by the application
//! - `set`: one instance of every kind, for the composition root

use crate::{
    config::ContentionPolicy,
    error::{Error, Result},
};
use log::{debug, warn};
use std::collections::VecDeque;
use tokio::sync::watch;

pub mod confirm;
pub mod pending;
pub mod restore;
pub mod scope;
pub mod set;

pub use confirm::{ConfirmPayload, ConfirmPrompt, ConfirmVariant};
pub use pending::PendingAnswer;
pub use restore::{RestoreChoice, RestorePrompt};
pub use scope::{ScopeChoice, ScopePayload, ScopePrompt};
pub use set::Prompts;

use pending::Reply;

/// Snapshot of a prompt as seen by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptView<P> {
    pub is_open: bool,
    pub payload: Option<P>,
}

impl<P> PromptView<P> {
    fn closed() -> Self {
        Self { is_open: false, payload: None }
    }
}

/// A single-slot prompt of one kind, parameterized over its payload `P` and answer `R`.
///
/// Two states: closed (initial) and open. [`open`](Self::open) moves to open and
/// hands out a [`PendingAnswer`]; [`choose`](Self::choose) resolves it and closes.
/// `is_open()` holds exactly when an answer is pending, and the payload is only
/// present while open.
///
/// All mutation goes through `&mut self`; the instance is owned by the
/// composition root and lent to whoever needs it.
pub struct AsyncPrompt<P, R> {
    kind: &'static str,
    policy: ContentionPolicy,
    payload: Option<P>,
    pending: Option<Reply<R>>,
    queue: VecDeque<(P, Reply<R>)>,
    orphaned: Vec<Reply<R>>,
    view: watch::Sender<PromptView<P>>,
}

impl<P: Clone, R> AsyncPrompt<P, R> {
    pub fn new(kind: &'static str, policy: ContentionPolicy) -> Self {
        let (view, _) = watch::channel(PromptView::closed());
        Self {
            kind,
            policy,
            payload: None,
            pending: None,
            queue: VecDeque::new(),
            orphaned: Vec::new(),
            view,
        }
    }

    /// Shows `payload` and returns a handle that resolves once an answer is chosen.
    ///
    /// There is no timeout: the prompt stays open until [`choose`](Self::choose).
    /// If a request is already pending, the configured [`ContentionPolicy`] decides
    /// what happens to it and to this one.
    pub fn open(&mut self, payload: P) -> Result<PendingAnswer<R>> {
        if self.pending.is_some() {
            match self.policy {
                ContentionPolicy::Reject => {
                    debug!("Rejecting '{}' prompt: a request is still pending", self.kind);
                    return Err(Error::PromptBusy { kind: self.kind });
                }
                ContentionPolicy::Queue => {
                    let (tx, pending) = PendingAnswer::channel(self.kind);
                    self.queue.push_back((payload, tx));
                    debug!(
                        "Queued '{}' prompt request ({} waiting)",
                        self.kind,
                        self.queue.len()
                    );
                    return Ok(pending);
                }
                ContentionPolicy::Preempt => {
                    if let Some(previous) = self.pending.take() {
                        debug!("Preempting pending '{}' prompt", self.kind);
                        let superseded = Error::PromptSuperseded { kind: self.kind };
                        let _ = previous.send(Err(superseded));
                    }
                }
                ContentionPolicy::Orphan => {
                    if let Some(previous) = self.pending.take() {
                        warn!(
                            "'{}' prompt opened while another request was pending; \
                             the earlier caller will never be answered",
                            self.kind
                        );
                        self.orphaned.retain(|tx| !tx.is_closed());
                        self.orphaned.push(previous);
                    }
                }
            }
        }

        let (tx, pending) = PendingAnswer::channel(self.kind);
        self.show(payload, tx);
        Ok(pending)
    }

    /// Resolves the pending request with `answer` (`None` means dismissed) and closes
    /// the prompt. Does nothing when no request is pending.
    pub fn choose(&mut self, answer: Option<R>) {
        let Some(reply) = self.pending.take() else {
            debug!("Ignoring choice for '{}' prompt: nothing is pending", self.kind);
            return;
        };

        if reply.send(Ok(answer)).is_err() {
            debug!("Caller of '{}' prompt stopped waiting before the answer", self.kind);
        }
        self.payload = None;

        match self.next_queued() {
            Some((payload, tx)) => self.show(payload, tx),
            None => self.publish(),
        }
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// The payload currently shown, if the prompt is open.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn policy(&self) -> ContentionPolicy {
        self.policy
    }

    /// Requests waiting behind the displayed one (queue policy only).
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Callers displaced under the orphan policy that are still waiting.
    pub fn orphaned(&self) -> usize {
        self.orphaned.iter().filter(|tx| !tx.is_closed()).count()
    }

    /// Subscribes to open/close changes. The receiver starts at the current view.
    pub fn subscribe(&self) -> watch::Receiver<PromptView<P>> {
        self.view.subscribe()
    }

    fn show(&mut self, payload: P, reply: Reply<R>) {
        debug!("Opening '{}' prompt", self.kind);
        self.payload = Some(payload);
        self.pending = Some(reply);
        self.publish();
    }

    fn next_queued(&mut self) -> Option<(P, Reply<R>)> {
        while let Some((payload, tx)) = self.queue.pop_front() {
            if !tx.is_closed() {
                return Some((payload, tx));
            }
            debug!("Skipping queued '{}' request: caller stopped waiting", self.kind);
        }
        None
    }

    fn publish(&self) {
        self.view.send_replace(PromptView {
            is_open: self.is_open(),
            payload: self.payload.clone(),
        });
    }
}
