use clap::Args;
use tracing::info;
use urbanlift_matching::optimizer::route_optimizer::RouteOptimizer;

use crate::{
    file_utils::{input_files, read_request},
    optimize::InputArgs,
    output,
};

#[derive(Args)]
pub struct MatchArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Your own drop-off locations. When given, the shipments are ranked as nearby
    /// collaboration candidates instead of being scored one by one.
    #[arg(long = "dropoff")]
    dropoffs: Vec<String>,
}

pub fn run_smart_match(args: InputArgs, json: bool) -> anyhow::Result<()> {
    let optimizer = RouteOptimizer::default();

    for path in input_files(args.input)? {
        let request = read_request(&path)?;
        let result = optimizer.optimize_cluster(&request)?;
        info!("{:?}: {} shipments clustered", path, result.clustered_shipments.len());

        if json {
            output::print_json(&result)?;
            continue;
        }

        let mut table = output::table(["Metric", "Value"]);
        table
            .add_row(vec![String::from("Cluster"), result.id.clone()])
            .add_row(vec![
                String::from("Shipments"),
                result.clustered_shipments.join(", "),
            ])
            .add_row(vec![String::from("Route"), result.optimized_route.clone()])
            .add_row(vec![
                String::from("Total distance"),
                format!("{} km", result.total_distance),
            ])
            .add_row(vec![
                String::from("Total savings"),
                format!("{:.0}", result.total_savings),
            ])
            .add_row(vec![
                String::from("Estimated delivery"),
                result.estimated_delivery.to_string(),
            ])
            .add_row(vec![
                String::from("Confidence"),
                format!("{}%", result.confidence),
            ]);
        println!("{table}");
    }

    Ok(())
}

pub fn run(args: MatchArgs, json: bool) -> anyhow::Result<()> {
    let optimizer = RouteOptimizer::default();

    for path in input_files(args.input.input)? {
        let request = read_request(&path)?;

        if !args.dropoffs.is_empty() {
            let nearby = optimizer.rank_nearby(&args.dropoffs, request.shipments);

            if json {
                output::print_json(&nearby)?;
                continue;
            }

            let mut table = output::table(["Shipment", "Drop-off", "Score", "Same area"]);
            for candidate in &nearby {
                table.add_row(vec![
                    candidate.shipment.id().to_owned(),
                    candidate.shipment.dropoff_location().to_owned(),
                    format!("{}%", candidate.compatibility_score),
                    if candidate.is_highlighted { "yes" } else { "" }.to_owned(),
                ]);
            }
            println!("{table}");
            continue;
        }

        let opportunities = request
            .shipments
            .iter()
            .map(|shipment| {
                (
                    shipment.id(),
                    optimizer.find_matching_opportunities(shipment),
                )
            })
            .collect::<Vec<_>>();

        if json {
            output::print_json(&opportunities)?;
            continue;
        }

        let mut table = output::table([
            "Shipment",
            "Matches",
            "Confidence",
            "Savings",
            "Location",
            "Goods",
            "Timing",
            "Weight",
        ]);
        for (id, opportunity) in &opportunities {
            let factors = &opportunity.matching_factors;
            table.add_row(vec![
                id.to_string(),
                opportunity.has_matches.to_string(),
                format!("{}%", opportunity.confidence),
                opportunity.estimated_savings.to_string(),
                format!("{:.1}", factors.location),
                format!("{:.1}", factors.goods),
                format!("{:.1}", factors.timing),
                format!("{:.1}", factors.weight),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
