//! # Delayed Handoff Redirect
//!
//! After an order is placed the confirmation view opens the WhatsApp link on
//! its own after a short delay. The redirect lives exactly as long as the
//! [`HandoffRedirect`] handle: dropping the handle (tearing down the view)
//! cancels it.
//!
//! ```text
//!  schedule(delay, link) ──► tokio task: sleep(delay) ──► open(link)   (once)
//!          │
//!          └── HandoffRedirect ── drop / cancel ──► task aborted, never opens
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Handle to a pending redirect.
#[derive(Debug)]
pub struct HandoffRedirect {
    handle: Option<JoinHandle<()>>,
}

impl HandoffRedirect {
    /// Schedules `open` to be called with `link` after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(delay: Duration, link: String, open: F) -> Self
    where
        F: FnOnce(String) + Send + 'static,
    {
        debug!(delay_ms = delay.as_millis() as u64, "Scheduling handoff redirect");

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!("Opening handoff link");
            open(link);
        });

        HandoffRedirect {
            handle: Some(handle),
        }
    }

    /// Cancels the redirect if it has not fired yet.
    pub fn cancel(mut self) {
        self.abort();
    }

    /// Whether the redirect has fired or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Waits for the redirect. Returns `true` if it fired.
    ///
    /// The handle stays inside `self` while waiting, so dropping this future
    /// before the redirect fires cancels it like dropping the handle does.
    pub async fn join(mut self) -> bool {
        match self.handle.as_mut() {
            Some(handle) => handle.await.is_ok(),
            None => false,
        }
    }

    fn abort(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                debug!("Handoff redirect cancelled");
            }
            handle.abort();
        }
    }
}

impl Drop for HandoffRedirect {
    fn drop(&mut self) {
        self.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn counting_opener() -> (Arc<AtomicUsize>, Arc<Mutex<Vec<String>>>, impl FnOnce(String) + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let opened = Arc::new(Mutex::new(Vec::new()));
        let (c, o) = (Arc::clone(&count), Arc::clone(&opened));
        let open = move |link: String| {
            c.fetch_add(1, Ordering::SeqCst);
            o.lock().unwrap().push(link);
        };
        (count, opened, open)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_delay() {
        let (count, opened, open) = counting_opener();
        let redirect = HandoffRedirect::schedule(
            Duration::from_secs(5),
            "https://wa.me/917995059659?text=hi".to_string(),
            open,
        );

        tokio::time::sleep(Duration::from_secs(4)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        assert!(redirect.join().await);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            opened.lock().unwrap().as_slice(),
            ["https://wa.me/917995059659?text=hi".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, _, open) = counting_opener();
        let redirect = HandoffRedirect::schedule(Duration::from_secs(5), "link".to_string(), open);

        tokio::time::sleep(Duration::from_secs(1)).await;
        drop(redirect);
        tokio::time::sleep(Duration::from_secs(10)).await;

        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_join_cancels() {
        let (count, _, open) = counting_opener();
        let redirect = HandoffRedirect::schedule(Duration::from_secs(5), "link".to_string(), open);

        let waited = tokio::time::timeout(Duration::from_secs(1), redirect.join()).await;
        assert!(waited.is_err());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_after_fire_is_noop() {
        let (count, _, open) = counting_opener();
        let redirect = HandoffRedirect::schedule(Duration::ZERO, "link".to_string(), open);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(redirect.is_finished());
        redirect.cancel();

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
