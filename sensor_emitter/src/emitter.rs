use crate::reporter::ReportSink;
use sensor_codecs::{pool::CategoryPool, report::Report};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Periodic sensor loop: sample a batch, report it, sleep, repeat.
#[derive(Debug, Clone)]
pub struct Emitter {
    location: String,
    pool: CategoryPool,
    batch_size: usize,
    period: Duration,
}

impl Emitter {
    pub fn new(location: String, pool: CategoryPool, batch_size: usize, period: Duration) -> Self {
        Self {
            location,
            pool,
            batch_size,
            period,
        }
    }

    /// Runs until `cancel` fires. The first report goes out immediately,
    /// then one per period. A failed delivery is logged and the loop
    /// carries on with the next cycle.
    pub async fn run<S: ReportSink>(&self, sink: &S, cancel: CancellationToken) -> anyhow::Result<()> {
        loop {
            let data = self
                .pool
                .sample_batch(&mut rand::thread_rng(), self.batch_size);
            let report = Report {
                location: self.location.clone(),
                data,
            };
            // Delivery outcome is logged by the sink; only transport
            // errors surface here, and they never end the loop.
            if let Err(e) = sink.deliver(&report).await {
                tracing::warn!("Failed to deliver report: {e:#}");
            }
            tokio::select! {
                () = tokio::time::sleep(self.period) => {}
                () = cancel.cancelled() => {
                    tracing::info!("Sensor loop stopped");
                    break;
                }
            }
        }
        Ok(())
    }
}
