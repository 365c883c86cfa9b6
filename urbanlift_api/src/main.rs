mod blocking;
mod error;
mod optimize;
mod routes;
mod shipments;
mod state;

use std::sync::Arc;

use axum::http::Method;
use axum::serve;
use mimalloc::MiMalloc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{Level, info};
use urbanlift_matching::optimizer::route_optimizer::RouteOptimizer;
use urbanlift_store::{
    json_file_store::JsonFileShipmentStore, memory_store::MemoryShipmentStore,
    shipment_store::ShipmentStore,
};

use crate::routes::api_routes;
use crate::state::AppState;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let store: Arc<dyn ShipmentStore> = match std::env::var("URBANLIFT_STORE_PATH") {
        Ok(path) => {
            info!("Storing shipments in {}", path);
            Arc::new(JsonFileShipmentStore::open(path)?)
        }
        Err(_) => {
            info!("URBANLIFT_STORE_PATH not set, shipments are kept in memory");
            Arc::new(MemoryShipmentStore::default())
        }
    };

    let state = Arc::new(AppState {
        optimizer: RouteOptimizer::default(),
        store,
    });

    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any)
        .allow_headers(Any);

    let app = api_routes(state).layer(ServiceBuilder::new().layer(cors_layer));

    let addr = std::env::var("URBANLIFT_API_ADDR").unwrap_or_else(|_| String::from(DEFAULT_ADDR));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    serve(listener, app).await?;

    Ok(())
}
