use jiff::SignedDuration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::cluster::cluster_group::ClusterGroup;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalImpact {
    /// Kilograms of CO2.
    pub co2_saved: u64,
    /// Liters of fuel.
    pub fuel_saved: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub route: Vec<String>,
    /// Whole kilometers.
    pub total_distance: u64,
    pub estimated_time: SignedDuration,
    pub estimated_minutes: u64,
    pub total_savings: u64,
    pub consolidation_score: u8,
    pub environmental_impact: EnvironmentalImpact,
    pub clusters: Vec<ClusterGroup>,
}
