use std::{sync::Arc, time::Duration};

use clap::Args;
use tokio::sync::mpsc;
use tracing::info;
use urbanlift_store::{
    json_file_store::JsonFileShipmentStore,
    shipment_store::ShipmentStore,
    stats::ShipmentStats,
    status_ticker::{RandomTransitionPolicy, StatusTicker, apply_transitions},
};

use crate::{parsers, shipments};

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    store: shipments::StoreArgs,

    /// Time between two status ticks (e.g., "30s", "1m", "PT5M")
    #[arg(long, value_parser = parsers::parse_period, default_value = "30s")]
    interval: Duration,

    /// Stop after this many ticks instead of running until interrupted
    #[arg(long)]
    ticks: Option<u64>,

    /// Seed of the transition draws, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

pub async fn run(args: SimulateArgs, json: bool) -> anyhow::Result<()> {
    let store = Arc::new(JsonFileShipmentStore::open(&args.store.store)?);
    let policy = match args.seed {
        Some(seed) => RandomTransitionPolicy::seeded(seed),
        None => RandomTransitionPolicy::default(),
    };

    let (sender, receiver) = mpsc::channel(64);
    let applier = tokio::spawn(apply_transitions(receiver, Arc::clone(&store)));

    let mut ticker = StatusTicker::new(Arc::clone(&store), policy, sender);
    if let Some(ticks) = args.ticks {
        ticker.set_max_ticks(ticks);
    }

    info!("Simulating status updates every {:?}", args.interval);
    let ticks = ticker
        .run(args.interval, async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;
    let applied = applier.await?;
    info!("{} ticks, {} status changes", ticks, applied);

    shipments::print_stats(&ShipmentStats::from_records(&store.list()?), json)
}
