use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;
use urbanlift_matching::{
    json::types::JsonOptimizationRequest,
    optimizer::{
        optimization_result::OptimizationResult,
        smart_match::{MatchOpportunity, SmartMatchResult},
    },
};

use crate::{blocking::run_blocking, error::ApiError, state::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentOpportunity {
    shipment_id: String,
    #[serde(flatten)]
    opportunity: MatchOpportunity,
}

pub async fn optimize_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOptimizationRequest>,
) -> Result<Json<OptimizationResult>, ApiError> {
    let request = body.build_request()?;

    let result = run_blocking(&state, move |state| {
        Ok(state.optimizer.optimize_routes(&request.shipments)?)
    })
    .await?;

    Ok(Json(result))
}

pub async fn optimize_cluster_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOptimizationRequest>,
) -> Result<Json<SmartMatchResult>, ApiError> {
    let request = body.build_request()?;

    let result = run_blocking(&state, move |state| {
        Ok(state.optimizer.optimize_cluster(&request)?)
    })
    .await?;

    Ok(Json(result))
}

pub async fn match_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<JsonOptimizationRequest>,
) -> Result<Json<Vec<ShipmentOpportunity>>, ApiError> {
    let request = body.build_request()?;

    let opportunities = run_blocking(&state, move |state| {
        Ok(request
            .shipments
            .iter()
            .map(|shipment| ShipmentOpportunity {
                shipment_id: shipment.id().to_owned(),
                opportunity: state.optimizer.find_matching_opportunities(shipment),
            })
            .collect())
    })
    .await?;

    Ok(Json(opportunities))
}
