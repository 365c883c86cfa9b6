use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use urbanlift_matching::{
    optimizer::smart_match::NearbyShipment,
    problem::{shipment::ShipmentRecord, shipment_status::ShipmentStatus},
};
use urbanlift_store::{
    collaboration::{CollaborationOutcome, CollaborationService},
    shipment_factory::{ShipmentDraft, ShipmentFactory},
    stats::ShipmentStats,
};

use crate::{blocking::run_blocking, error::ApiError, state::AppState};

#[derive(Deserialize)]
pub struct StatusBody {
    status: ShipmentStatus,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationBody {
    shipment_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct NearbyQuery {
    /// Drop-off locations of the caller, separated by `;`.
    dropoffs: String,
}

pub async fn list_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ShipmentRecord>>, ApiError> {
    let records = run_blocking(&state, |state| Ok(state.store.list()?)).await?;

    Ok(Json(records))
}

pub async fn create_handler(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<ShipmentDraft>,
) -> Result<(StatusCode, Json<ShipmentRecord>), ApiError> {
    let record = run_blocking(&state, move |state| {
        let record = ShipmentFactory::new(&state.optimizer).create(draft)?;
        state.store.append(record.clone())?;
        Ok(record)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn status_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<StatusBody>,
) -> Result<Json<ShipmentRecord>, ApiError> {
    let record = run_blocking(&state, move |state| {
        Ok(state.store.update_status(&id, body.status)?)
    })
    .await?;

    Ok(Json(record))
}

pub async fn nearby_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<Vec<NearbyShipment>>, ApiError> {
    let nearby = run_blocking(&state, move |state| {
        let dropoffs = query
            .dropoffs
            .split(';')
            .map(str::trim)
            .filter(|dropoff| !dropoff.is_empty())
            .collect::<Vec<_>>();
        let candidates = state
            .store
            .list()?
            .into_iter()
            .filter(|record| record.status().is_open())
            .collect();

        Ok(state.optimizer.rank_nearby(&dropoffs, candidates))
    })
    .await?;

    Ok(Json(nearby))
}

pub async fn collaboration_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CollaborationBody>,
) -> Result<Json<CollaborationOutcome>, ApiError> {
    let outcome = run_blocking(&state, move |state| {
        Ok(CollaborationService::new(&state.store, &state.optimizer).confirm(&body.shipment_ids)?)
    })
    .await?;

    Ok(Json(outcome))
}

pub async fn stats_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ShipmentStats>, ApiError> {
    let stats = run_blocking(&state, |state| {
        Ok(ShipmentStats::from_records(&state.store.list()?))
    })
    .await?;

    Ok(Json(stats))
}
