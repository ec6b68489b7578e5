use std::sync::Arc;

use nationmind_api::HealthCheck;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::status::StatusMessage;

/// A mounted backend status probe.
///
/// Mounting spawns one task that calls the health-check capability once and
/// publishes the outcome. The state starts as [`StatusMessage::Checking`]
/// and changes at most once. Dropping the probe unmounts it: an in-flight
/// call is aborted and its result is never applied.
///
/// There is no timeout and no retry. A capability that never settles leaves
/// the probe in `Checking` until it is unmounted.
#[derive(Debug)]
pub struct StatusProbe {
    state: watch::Receiver<StatusMessage>,
    task: JoinHandle<()>,
}

impl StatusProbe {
    /// Mount the probe and schedule the health check.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount<C>(capability: Arc<C>) -> Self
    where
        C: HealthCheck + 'static,
    {
        let (tx, state) = watch::channel(StatusMessage::Checking);
        let task = tokio::spawn(async move {
            let status = StatusMessage::from(capability.health_check().await);
            debug!(settled = %status, "status probe settled");
            tx.send_replace(status);
        });
        debug!("status probe mounted");
        Self { state, task }
    }

    /// Current state snapshot.
    pub fn status(&self) -> StatusMessage {
        self.state.borrow().clone()
    }

    pub fn is_settled(&self) -> bool {
        self.state.borrow().is_settled()
    }

    /// Wait until the health check settles and return the final state.
    ///
    /// If the probe task ended without settling (the capability panicked),
    /// the current state is returned, which is still `Checking`.
    pub async fn settled(&mut self) -> StatusMessage {
        let settled = self
            .state
            .wait_for(StatusMessage::is_settled)
            .await
            .map(|status| status.clone());
        settled.unwrap_or_else(|_| self.status())
    }

    /// Observe state changes. The probe emits at most one change.
    pub fn subscribe(&self) -> watch::Receiver<StatusMessage> {
        self.state.clone()
    }

    /// Unmount the probe and return the last state it showed.
    pub fn unmount(self) -> StatusMessage {
        self.status()
    }
}

impl Drop for StatusProbe {
    fn drop(&mut self) {
        if !self.task.is_finished() {
            self.task.abort();
            debug!("status probe unmounted before settling, health check cancelled");
        }
    }
}
