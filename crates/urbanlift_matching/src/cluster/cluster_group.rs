use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shipments whose drop-offs lie close to the drop-off of the seed shipment.
/// Recomputed on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClusterGroup {
    shipment_ids: Vec<String>,
}

impl ClusterGroup {
    pub fn new(seed_id: impl Into<String>) -> Self {
        Self {
            shipment_ids: vec![seed_id.into()],
        }
    }

    pub fn seed_id(&self) -> &str {
        &self.shipment_ids[0]
    }

    pub fn shipment_ids(&self) -> &[String] {
        &self.shipment_ids
    }

    pub fn push(&mut self, shipment_id: impl Into<String>) {
        self.shipment_ids.push(shipment_id.into());
    }

    pub fn contains(&self, shipment_id: &str) -> bool {
        self.shipment_ids.iter().any(|id| id == shipment_id)
    }

    pub fn len(&self) -> usize {
        self.shipment_ids.len()
    }

    /// A group always holds at least its seed.
    pub fn is_empty(&self) -> bool {
        false
    }
}
