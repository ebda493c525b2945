use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticket_loadgen::{
    config::Config,
    generator::GenerationOrchestrator,
    sampler::{SeatCountSampler, WeightTable},
    venue::VenueModel,
    writer,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting testdata generator for Billetter load tests");

    let venue = VenueModel::from_config(&config.venue);
    let sampler = SeatCountSampler::new(WeightTable::base());
    let mut orchestrator = GenerationOrchestrator::new(venue, config.generation.clone(), sampler);

    // Генерация синхронная и однопоточная; await только на финальной записи
    let outcome = orchestrator.run();
    outcome.summary.log();

    writer::write_corpus(&config.output.path, &outcome.records).await?;
    info!(
        "Corpus written to {} ({} records)",
        config.output.path,
        outcome.records.len()
    );

    Ok(())
}
