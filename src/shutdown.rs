//! Process-wide cancellation of outstanding outbound calls.

use std::future::Future;

use tokio::sync::watch;

/// Fires the shutdown signal once; held by `main`.
#[derive(Debug)]
pub struct ShutdownTrigger(watch::Sender<bool>);

/// Cheap handle cloned into every API client.
#[derive(Debug, Clone)]
pub struct Shutdown(watch::Receiver<bool>);

pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger(tx), Shutdown(rx))
}

impl ShutdownTrigger {
    pub fn trigger(&self) {
        self.0.send_replace(true);
    }
}

impl Shutdown {
    /// A handle that never fires.
    #[cfg(test)]
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        // `cancelled` treats a closed channel as never firing.
        drop(tx);
        Self(rx)
    }

    pub fn is_triggered(&self) -> bool {
        *self.0.borrow()
    }

    async fn cancelled(&self) {
        let mut rx = self.0.clone();
        if rx.wait_for(|stopped| *stopped).await.is_err() {
            std::future::pending::<()>().await
        }
    }

    /// Runs `fut` unless shutdown fires first, in which case `fut` is dropped and `None` returned.
    pub async fn run<F: Future>(&self, fut: F) -> Option<F::Output> {
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}
