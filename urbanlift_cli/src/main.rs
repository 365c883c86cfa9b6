use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use urbanlift_matching::json::schema::{generate_json_schema, generate_result_json_schema};

use crate::{
    matching::MatchArgs,
    optimize::InputArgs,
    shipments::{ShipmentsSubcommands, StoreArgs},
    simulate::SimulateArgs,
};

mod file_utils;
mod matching;
mod optimize;
mod output;
mod parsers;
mod shipments;
mod simulate;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long, global = true)]
    debug: bool,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build one shared route over every shipment of a request
    #[command(visible_alias = "o")]
    Optimize {
        #[command(flatten)]
        args: InputArgs,
    },
    /// Group shipments whose drop-offs are close to each other
    Cluster {
        #[command(flatten)]
        args: InputArgs,
    },
    /// Price a shared run for the first open shipments of a request
    SmartMatch {
        #[command(flatten)]
        args: InputArgs,
    },
    /// Score how easily each shipment can be shared
    Match {
        #[command(flatten)]
        args: MatchArgs,
    },
    Shipments {
        #[command(flatten)]
        store: StoreArgs,

        #[command(subcommand)]
        commands: ShipmentsSubcommands,
    },
    /// Advance shipment statuses over time
    Simulate {
        #[command(flatten)]
        args: SimulateArgs,
    },
    /// Print the JSON schema of optimization requests
    Schema {
        /// Print the schema of optimization results instead
        #[arg(long)]
        result: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Optimize { args }) => optimize::run(args, cli.json)?,
        Some(Commands::Cluster { args }) => optimize::run_cluster(args, cli.json)?,
        Some(Commands::SmartMatch { args }) => matching::run_smart_match(args, cli.json)?,
        Some(Commands::Match { args }) => matching::run(args, cli.json)?,
        Some(Commands::Shipments { store, commands }) => {
            shipments::run(store, commands, cli.json)?
        }
        Some(Commands::Simulate { args }) => simulate::run(args, cli.json).await?,
        Some(Commands::Schema { result }) => {
            let schema = if result {
                generate_result_json_schema()?
            } else {
                generate_json_schema()?
            };
            println!("{schema}");
        }
        None => {}
    }

    Ok(())
}
