//! The daemon poll loop.

use std::future::Future;
use std::time::Duration;

use cp_app::{CopyPad, PollOutcome};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{info, warn};

/// Counters reported when the loop stops.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub ticks: u64,
    pub captured: u64,
    pub failed: u64,
}

/// Tick `app` every `period` until `shutdown` resolves.
///
/// A failed tick is logged and the loop keeps going; the next tick retries
/// against the same baseline.
pub async fn run_until<F>(app: &mut CopyPad, period: Duration, shutdown: F) -> RunStats
where
    F: Future<Output = ()>,
{
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stats = RunStats::default();

    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                stats.ticks += 1;
                match app.tick() {
                    Ok(PollOutcome::Captured(_)) => stats.captured += 1,
                    Ok(_) => {}
                    Err(err) => {
                        stats.failed += 1;
                        warn!(error = %format!("{err:#}"), "pasteboard poll failed");
                    }
                }
            }
        }
    }

    info!(
        ticks = stats.ticks,
        captured = stats.captured,
        failed = stats.failed,
        "poll loop stopped"
    );
    stats
}

/// [`run_until`] with Ctrl+C as the shutdown signal.
pub async fn run_until_ctrl_c(app: &mut CopyPad, period: Duration) -> RunStats {
    let shutdown = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for Ctrl+C, stopping");
        }
    };
    run_until(app, period, shutdown).await
}
