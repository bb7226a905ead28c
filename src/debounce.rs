//! Cancel-and-reschedule debounce timer.
//!
//! A [`Debouncer`] delivers one message to the event loop after a fixed
//! delay. Scheduling again replaces the pending delivery; cancelling drops
//! it. The timer itself never touches controller state, it only sends.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delayed single-message sender with cancel-and-reschedule semantics.
#[derive(Debug)]
pub struct Debouncer<M> {
    delay: Duration,
    tx: mpsc::UnboundedSender<M>,
    timer: Option<JoinHandle<()>>,
}

impl<M: Send + 'static> Debouncer<M> {
    pub fn new(delay: Duration, tx: mpsc::UnboundedSender<M>) -> Self {
        Self {
            delay,
            tx,
            timer: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Deliver `message` after the delay, replacing any pending delivery.
    ///
    /// Returns false when no tokio runtime is available; the message is
    /// dropped in that case.
    pub fn schedule(&mut self, message: M) -> bool {
        self.cancel();

        // Guard: only spawn if a tokio runtime is available (avoids panics in sync tests)
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::debug!("No async runtime, debounced message dropped");
            return false;
        };

        let tx = self.tx.clone();
        let delay = self.delay;
        self.timer = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(message);
        }));
        true
    }

    /// Drop the pending delivery, if any. Returns true if one was pending.
    ///
    /// A message that already left the timer before the abort still arrives;
    /// receivers must tolerate it.
    pub fn cancel(&mut self) -> bool {
        match self.timer.take() {
            Some(timer) => {
                let was_pending = !timer.is_finished();
                timer.abort();
                was_pending
            }
            None => false,
        }
    }

    /// True while a delivery is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.timer
            .as_ref()
            .map(|timer| !timer.is_finished())
            .unwrap_or(false)
    }
}

impl<M> Drop for Debouncer<M> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_without_runtime() {
        let (tx, mut rx) = mpsc::unbounded_channel::<u32>();
        let mut debouncer = Debouncer::new(Duration::from_millis(10), tx);

        assert!(!debouncer.schedule(1));
        assert!(!debouncer.is_pending());
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        assert!(debouncer.schedule("page"));
        assert!(debouncer.is_pending());
        assert!(rx.try_recv().is_err());

        tokio::time::advance(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some("page"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_replaces_pending() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.schedule(1);
        tokio::time::advance(Duration::from_millis(300)).await;
        debouncer.schedule(2);

        assert_eq!(rx.recv().await, Some(2));
        tokio::time::advance(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_message() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut debouncer = Debouncer::new(Duration::from_millis(500), tx);

        debouncer.schedule(1);
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        tokio::time::advance(Duration::from_secs(1)).await;
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
    }
}
