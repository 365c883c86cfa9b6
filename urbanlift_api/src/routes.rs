use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::{optimize, shipments, state::AppState};

pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/optimize", post(optimize::optimize_handler))
        .route("/optimize/cluster", post(optimize::optimize_cluster_handler))
        .route("/match", post(optimize::match_handler))
        .route(
            "/shipments",
            get(shipments::list_handler).post(shipments::create_handler),
        )
        .route("/shipments/nearby", get(shipments::nearby_handler))
        .route("/shipments/{id}/status", post(shipments::status_handler))
        .route("/collaborations", post(shipments::collaboration_handler))
        .route("/stats", get(shipments::stats_handler))
        .with_state(state)
}
