use std::time::Duration;

use playbook::ShareToken;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

use crate::action::Action;

/// The single pending copied-flag reset.
///
/// Arming replaces (and aborts) whatever reset was pending, so at most one
/// timer task is alive at a time.
#[derive(Debug, Default)]
pub struct ResetTimer {
    pending: Option<JoinHandle<()>>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `Action::ShareExpired(token)` on `tx` once `after` has elapsed.
    pub fn arm(&mut self, token: ShareToken, after: Duration, tx: mpsc::Sender<Action>) {
        self.cancel();
        let deadline = Instant::now() + after;
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(Action::ShareExpired(token)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    #[cfg(test)]
    fn is_armed(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
