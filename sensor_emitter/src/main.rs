use anyhow::Context;
use arguments::Arguments;
use clap::Parser;
use emitter::Emitter;
use reporter::HttpReporter;
use sensor_codecs::pool::CategoryPool;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

mod arguments;
mod emitter;
mod reporter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Arguments::parse();

    let pool = CategoryPool::new(args.car_weight, args.motorcycle_weight, args.bus_weight)
        .context("Invalid sensor configuration")?;

    tracing::info!(
        "Sensor started at {} with weights {}:{}:{} (c:m:b). {} vehicles every {} seconds.",
        args.location,
        args.car_weight,
        args.motorcycle_weight,
        args.bus_weight,
        args.batch_size,
        args.period_seconds
    );

    let reporter = HttpReporter::new(args.url);
    tracing::info!("Sending data to {}", reporter.url());

    let emitter = Emitter::new(
        args.location,
        pool,
        args.batch_size,
        Duration::from_secs(args.period_seconds),
    );

    let cancel = CancellationToken::new();
    let stopper = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received Ctrl-C, stopping");
            stopper.cancel();
        }
    });

    emitter.run(&reporter, cancel).await
}
