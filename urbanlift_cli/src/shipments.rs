use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::info;
use urbanlift_matching::{
    optimizer::route_optimizer::RouteOptimizer,
    problem::{
        goods_category::GoodsCategory, shipment::ShipmentRecord, shipment_status::ShipmentStatus,
        urgency::Urgency,
    },
};
use urbanlift_store::{
    collaboration::CollaborationService,
    json_file_store::JsonFileShipmentStore,
    shipment_factory::{ShipmentDraft, ShipmentFactory},
    shipment_store::ShipmentStore,
    stats::ShipmentStats,
};

use crate::output;

#[derive(Args)]
pub struct StoreArgs {
    /// JSON file holding the shipments
    #[arg(long, env = "URBANLIFT_STORE_PATH", default_value = "shipments.json")]
    pub store: PathBuf,
}

#[derive(Subcommand)]
pub enum ShipmentsSubcommands {
    /// Create a priced shipment
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        pickup: String,

        #[arg(long)]
        dropoff: String,

        #[arg(long, default_value = "Other")]
        goods: GoodsCategory,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        #[arg(long, default_value = "normal")]
        urgency: Urgency,

        #[arg(long)]
        description: Option<String>,
    },
    #[command(visible_alias = "ls")]
    List,
    /// Move a shipment forward in its lifecycle
    Status { id: String, status: ShipmentStatus },
    Stats,
    /// Confirm a shared delivery between shipments
    Confirm {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

pub fn run(store: StoreArgs, command: ShipmentsSubcommands, json: bool) -> anyhow::Result<()> {
    let store = JsonFileShipmentStore::open(&store.store)?;
    let optimizer = RouteOptimizer::default();

    match command {
        ShipmentsSubcommands::Add {
            title,
            pickup,
            dropoff,
            goods,
            weight,
            urgency,
            description,
        } => {
            let record = ShipmentFactory::new(&optimizer).create(ShipmentDraft {
                title,
                pickup_location: pickup,
                dropoff_location: dropoff,
                goods_type: goods,
                weight,
                urgency,
                description,
            })?;
            store.append(record.clone())?;
            info!("Created shipment {}", record.id());

            print_records(&[record], json)?;
        }
        ShipmentsSubcommands::List => print_records(&store.list()?, json)?,
        ShipmentsSubcommands::Status { id, status } => {
            let record = store.update_status(&id, status)?;
            info!("Shipment {} is now {}", id, record.status());

            print_records(&[record], json)?;
        }
        ShipmentsSubcommands::Stats => print_stats(&ShipmentStats::from_records(&store.list()?), json)?,
        ShipmentsSubcommands::Confirm { ids } => {
            let outcome = CollaborationService::new(&store, &optimizer).confirm(&ids)?;
            info!(
                "Collaboration confirmed: {} km, savings {}",
                outcome.result.total_distance, outcome.result.total_savings
            );

            if json {
                output::print_json(&outcome)?;
            } else {
                println!("{}", outcome.result.route.join(" → "));
                print_records(&outcome.shipments, false)?;
            }
        }
    }

    Ok(())
}

fn print_records(records: &[ShipmentRecord], json: bool) -> anyhow::Result<()> {
    if json {
        return output::print_json(records);
    }

    let mut table = output::table([
        "Id", "Title", "Pickup", "Drop-off", "Goods", "Weight", "Cost", "Savings", "Status",
    ]);
    for record in records {
        table.add_row(vec![
            record.id().to_owned(),
            record.title().to_owned(),
            record.pickup_location().to_owned(),
            record.dropoff_location().to_owned(),
            record.goods_type().to_string(),
            format!("{} kg", record.weight()),
            record.cost().to_string(),
            record
                .savings()
                .map(|savings| savings.to_string())
                .unwrap_or_default(),
            record.status().to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}

pub fn print_stats(stats: &ShipmentStats, json: bool) -> anyhow::Result<()> {
    if json {
        return output::print_json(stats);
    }

    let mut table = output::table(["Metric", "Value"]);
    table
        .add_row(vec![String::from("Total"), stats.total.to_string()])
        .add_row(vec![String::from("Delivered"), stats.delivered.to_string()])
        .add_row(vec![String::from("In transit"), stats.in_transit.to_string()])
        .add_row(vec![String::from("Pending"), stats.pending.to_string()])
        .add_row(vec![
            String::from("Total savings"),
            stats.total_savings.to_string(),
        ])
        .add_row(vec![
            String::from("Average savings"),
            stats.average_savings.to_string(),
        ])
        .add_row(vec![
            String::from("CO2 reduced"),
            format!("{} kg", stats.co2_reduced),
        ]);
    println!("{table}");

    Ok(())
}
