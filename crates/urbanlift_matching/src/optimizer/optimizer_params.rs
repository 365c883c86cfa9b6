use serde::{Deserialize, Serialize};

use crate::{
    cluster::proximity_clusterer::DEFAULT_PROXIMITY_RADIUS,
    problem::{kilometers::Kilometers, kmh::Kmh},
};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerParams {
    /// Drop-offs closer than this to a cluster seed join its cluster.
    pub proximity_radius: Kilometers,
    pub average_speed: Kmh,

    /// Extra savings credited to a consolidated route, as a share of the summed savings.
    pub consolidation_bonus_ratio: f64,

    pub co2_kg_per_shipment: f64,
    pub fuel_liters_per_shipment: f64,

    /// Overall compatibility a shipment needs before it is reported as matchable.
    pub match_threshold: f64,

    /// Maximum number of shipments grouped by a smart match.
    pub cluster_size_limit: usize,
}

impl Default for OptimizerParams {
    fn default() -> Self {
        Self {
            proximity_radius: DEFAULT_PROXIMITY_RADIUS,
            average_speed: Kmh::default(),
            consolidation_bonus_ratio: 0.25,
            co2_kg_per_shipment: 3.2,
            fuel_liters_per_shipment: 1.8,
            match_threshold: 0.7,
            cluster_size_limit: 3,
        }
    }
}
