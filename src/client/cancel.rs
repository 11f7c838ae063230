//! Caller-controlled cancellation signal
//!
//! A `CancelToken` is cloned into every outgoing request. Tripping any clone
//! wakes every task waiting on `cancelled()`, which is how an in-flight
//! backoff wait or HTTP send is aborted when the user presses Ctrl-C.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared cancellation flag.
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
    receiver: watch::Receiver<bool>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    /// Create a token that has not been cancelled.
    pub fn new() -> Self {
        let (sender, receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
            receiver,
        }
    }

    /// Trip the token. Idempotent.
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether the token has been tripped.
    pub fn is_cancelled(&self) -> bool {
        *self.receiver.borrow()
    }

    /// Resolve once the token is tripped; resolves immediately if it already was.
    pub async fn cancelled(&self) {
        let mut receiver = self.receiver.clone();
        // The sender lives as long as any clone of this token, so the channel
        // cannot close while we wait.
        let closed = receiver.wait_for(|cancelled| *cancelled).await.is_err();
        if closed {
            std::future::pending::<()>().await;
        }
    }
}
