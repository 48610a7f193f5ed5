//! Background poll timer
//!
//! Fires a silent-refresh tick at a fixed interval. Ticks are delivered with
//! `try_send` over a bounded(1) channel: while a refresh cycle is still
//! settling, at most one tick stays queued and the rest are dropped, so
//! overlapping refreshes never pile up (drop-overlapping policy).

use crate::events::WidgetEvent;
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;

/// Spawn the poll timer task
pub fn spawn(tx: Sender<WidgetEvent>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; the initial refresh already
        // ran, so skip it.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            match tx.try_send(WidgetEvent::Poll) {
                Ok(()) => {}
                Err(tokio::sync::mpsc::error::TrySendError::Full(_)) => {
                    log::debug!("Refresh still in flight, dropping poll tick");
                }
                Err(tokio::sync::mpsc::error::TrySendError::Closed(_)) => break,
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_arrive_at_interval() {
        let (tx, mut rx) = mpsc::channel(1);
        let handle = spawn(tx, Duration::from_secs(600));

        // Paused time auto-advances to the next pending timer.
        assert_eq!(rx.recv().await, Some(WidgetEvent::Poll));

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_are_dropped_while_consumer_is_busy() {
        let (tx, mut rx) = mpsc::channel(1);
        let handle = spawn(tx, Duration::from_secs(600));

        // Nobody drains the channel for three intervals; only one tick may
        // be queued, the rest are dropped.
        tokio::time::sleep(Duration::from_secs(1801)).await;

        assert_eq!(rx.try_recv().ok(), Some(WidgetEvent::Poll));
        assert!(rx.try_recv().is_err());

        handle.abort();
    }
}
