use fxhash::FxHashSet;
use tracing::debug;

use crate::{
    cluster::cluster_group::ClusterGroup,
    distance::distance_estimator::DistanceEstimator,
    geocoding::geocoder::Geocoder,
    problem::{kilometers::Kilometers, shipment::ShipmentRecord},
};

pub const DEFAULT_PROXIMITY_RADIUS: Kilometers = Kilometers::new(10.0);

/// Greedy single pass clustering on drop-off proximity.
///
/// Each unassigned shipment, in input order, seeds a new group and absorbs every other
/// unassigned shipment whose drop-off is strictly closer than `radius` to the seed's drop-off.
/// Membership depends on the input order and the number of groups is not minimal.
pub struct ProximityClusterer<'a, G> {
    estimator: &'a DistanceEstimator<G>,
    radius: Kilometers,
}

impl<'a, G: Geocoder> ProximityClusterer<'a, G> {
    pub fn new(estimator: &'a DistanceEstimator<G>, radius: Kilometers) -> Self {
        Self { estimator, radius }
    }

    pub fn radius(&self) -> Kilometers {
        self.radius
    }

    pub fn cluster(&self, shipments: &[ShipmentRecord]) -> Vec<ClusterGroup> {
        let mut assigned: FxHashSet<&str> = FxHashSet::default();
        let mut clusters = Vec::new();

        for seed in shipments {
            if !assigned.insert(seed.id()) {
                continue;
            }

            let mut group = ClusterGroup::new(seed.id());

            for other in shipments {
                if assigned.contains(other.id()) {
                    continue;
                }

                let distance = self
                    .estimator
                    .distance(seed.dropoff_location(), other.dropoff_location());

                if distance < self.radius {
                    group.push(other.id());
                    assigned.insert(other.id());
                }
            }

            debug!(seed = seed.id(), members = group.len(), "cluster formed");
            clusters.push(group);
        }

        clusters
    }
}
