use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Route details folded into a shipment once it joins a confirmed collaboration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub distance_km: u64,
    pub stops: usize,
    pub shared_with: usize,
}
