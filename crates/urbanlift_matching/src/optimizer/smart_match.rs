use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{problem::shipment::ShipmentRecord, scoring::compatibility_factors::CompatibilityFactors};

#[derive(Debug, Clone)]
pub struct OptimizationRequest {
    pub shipments: Vec<ShipmentRecord>,
    pub requested_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub shipment_id: String,
    pub title: String,
    pub goods: String,
    pub pickup_location: String,
    pub dropoff_location: String,
}

impl From<&ShipmentRecord> for Participant {
    fn from(shipment: &ShipmentRecord) -> Self {
        Participant {
            shipment_id: shipment.id().to_owned(),
            title: shipment.title().to_owned(),
            goods: shipment.goods_type().to_string(),
            pickup_location: shipment.pickup_location().to_owned(),
            dropoff_location: shipment.dropoff_location().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SmartMatchResult {
    pub id: String,
    pub clustered_shipments: Vec<String>,
    pub optimized_route: String,
    pub total_distance: u64,
    pub total_savings: f64,
    pub estimated_delivery: Timestamp,
    pub confidence: u8,
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MatchOpportunity {
    pub has_matches: bool,
    pub confidence: u8,
    pub estimated_savings: u64,
    pub matching_factors: CompatibilityFactors,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyShipment {
    pub shipment: ShipmentRecord,
    pub compatibility_score: u8,
    pub is_highlighted: bool,
}
