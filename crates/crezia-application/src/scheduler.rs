//! Deferred steps standing in for network latency.

use std::time::Duration;

use async_trait::async_trait;
use crezia_core::error::{CreziaError, Result};
use tokio_util::sync::CancellationToken;

/// Waits out a simulated delay.
///
/// Implementations must return `CreziaError::Cancelled` as soon as `cancel`
/// fires, and must not complete successfully once it has fired.
#[async_trait]
pub trait Scheduler: Send + Sync {
    async fn defer(&self, delay: Duration, cancel: &CancellationToken) -> Result<()>;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn defer(&self, delay: Duration, cancel: &CancellationToken) -> Result<()> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(CreziaError::Cancelled),
            _ = tokio::time::sleep(delay) => Ok(()),
        }
    }
}

/// Completes immediately, ignoring the delay. For tests and scripted runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImmediateScheduler;

#[async_trait]
impl Scheduler for ImmediateScheduler {
    async fn defer(&self, _delay: Duration, cancel: &CancellationToken) -> Result<()> {
        if cancel.is_cancelled() {
            Err(CreziaError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_waits_full_delay() {
        let start = tokio::time::Instant::now();
        TokioScheduler
            .defer(Duration::from_millis(2000), &CancellationToken::new())
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_scheduler_cancels_midway() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let start = tokio::time::Instant::now();
        let err = TokioScheduler
            .defer(Duration::from_secs(60), &cancel)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(start.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_already_cancelled_token_wins_over_zero_delay() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        assert!(TokioScheduler.defer(Duration::ZERO, &cancel).await.is_err());
        assert!(ImmediateScheduler.defer(Duration::ZERO, &cancel).await.is_err());
    }

    #[tokio::test]
    async fn test_immediate_scheduler_ignores_delay() {
        ImmediateScheduler
            .defer(Duration::from_secs(3600), &CancellationToken::new())
            .await
            .unwrap();
    }
}
