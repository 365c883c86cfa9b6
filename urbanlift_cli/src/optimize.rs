use std::path::PathBuf;

use clap::Args;
use tracing::info;
use urbanlift_matching::optimizer::{
    optimization_result::OptimizationResult, route_optimizer::RouteOptimizer,
};

use crate::{
    file_utils::{input_files, read_request},
    output,
};

#[derive(Args)]
pub struct InputArgs {
    /// Optimization request file, or a folder of request files
    #[arg(short = 'i', long)]
    pub input: PathBuf,
}

pub fn run(args: InputArgs, json: bool) -> anyhow::Result<()> {
    let optimizer = RouteOptimizer::default();

    for path in input_files(args.input)? {
        info!("Optimizing {:?}", path);
        let request = read_request(&path)?;
        let result = optimizer.optimize_routes(&request.shipments)?;

        if json {
            output::print_json(&result)?;
        } else {
            print_result(&result);
        }
    }

    Ok(())
}

pub fn run_cluster(args: InputArgs, json: bool) -> anyhow::Result<()> {
    let optimizer = RouteOptimizer::default();

    for path in input_files(args.input)? {
        let request = read_request(&path)?;
        let clusters = optimizer.clusterer().cluster(&request.shipments);
        info!("{:?}: {} clusters", path, clusters.len());

        if json {
            output::print_json(&clusters)?;
            continue;
        }

        let mut table = output::table(["Cluster", "Seed", "Shipments"]);
        for (index, cluster) in clusters.iter().enumerate() {
            table.add_row(vec![
                (index + 1).to_string(),
                cluster.seed_id().to_owned(),
                cluster.shipment_ids().join(", "),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}

fn print_result(result: &OptimizationResult) {
    let mut route = output::table(["#", "Stop"]);
    for (index, stop) in result.route.iter().enumerate() {
        route.add_row(vec![(index + 1).to_string(), stop.clone()]);
    }
    println!("{route}");

    let mut summary = output::table(["Metric", "Value"]);
    summary
        .add_row(vec![
            String::from("Total distance"),
            format!("{} km", result.total_distance),
        ])
        .add_row(vec![
            String::from("Estimated time"),
            format!("{} min", result.estimated_minutes),
        ])
        .add_row(vec![
            String::from("Total savings"),
            result.total_savings.to_string(),
        ])
        .add_row(vec![
            String::from("Consolidation score"),
            result.consolidation_score.to_string(),
        ])
        .add_row(vec![
            String::from("CO2 saved"),
            format!("{} kg", result.environmental_impact.co2_saved),
        ])
        .add_row(vec![
            String::from("Fuel saved"),
            format!("{} L", result.environmental_impact.fuel_saved),
        ])
        .add_row(vec![
            String::from("Clusters"),
            result.clusters.len().to_string(),
        ]);
    println!("{summary}");
}
