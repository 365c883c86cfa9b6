use std::cmp::Reverse;

use tracing::{debug, instrument};

use crate::{
    cluster::proximity_clusterer::ProximityClusterer,
    distance::distance_estimator::DistanceEstimator,
    geocoding::{geocoder::Geocoder, static_geocoder::StaticGeocoder},
    optimizer::{
        error::OptimizationError,
        optimization_result::{EnvironmentalImpact, OptimizationResult},
        optimizer_params::OptimizerParams,
        smart_match::{
            MatchOpportunity, NearbyShipment, OptimizationRequest, Participant, SmartMatchResult,
        },
    },
    pricing::pricing_model::{FlatRatePricing, PricingModel, Quote},
    problem::shipment::ShipmentRecord,
    route::{route_sequencer::RouteSequencer, sequenced_route::SequencedRoute},
    scoring::{
        compatibility_factors::to_percentage, compatibility_scorer::CompatibilityScorer,
        consolidation::consolidation_score,
    },
};

/// Entry point of the matching heuristics.
///
/// Holds only configuration: every call is a pure function of its arguments, so one optimizer
/// can serve concurrent requests.
pub struct RouteOptimizer<G = StaticGeocoder, P = FlatRatePricing> {
    estimator: DistanceEstimator<G>,
    pricing: P,
    scorer: CompatibilityScorer,
    params: OptimizerParams,
}

impl RouteOptimizer {
    pub fn new(params: OptimizerParams) -> Self {
        Self::with_components(
            DistanceEstimator::with_static_table(),
            FlatRatePricing::default(),
            CompatibilityScorer::default(),
            params,
        )
    }
}

impl Default for RouteOptimizer {
    fn default() -> Self {
        Self::new(OptimizerParams::default())
    }
}

impl<G: Geocoder, P: PricingModel> RouteOptimizer<G, P> {
    pub fn with_components(
        estimator: DistanceEstimator<G>,
        pricing: P,
        scorer: CompatibilityScorer,
        params: OptimizerParams,
    ) -> Self {
        Self {
            estimator,
            pricing,
            scorer,
            params,
        }
    }

    pub fn params(&self) -> &OptimizerParams {
        &self.params
    }

    pub fn estimator(&self) -> &DistanceEstimator<G> {
        &self.estimator
    }

    pub fn pricing(&self) -> &P {
        &self.pricing
    }

    pub fn scorer(&self) -> &CompatibilityScorer {
        &self.scorer
    }

    pub fn clusterer(&self) -> ProximityClusterer<'_, G> {
        ProximityClusterer::new(&self.estimator, self.params.proximity_radius)
    }

    pub fn sequencer(&self) -> RouteSequencer<'_, G> {
        RouteSequencer::new(&self.estimator, self.params.average_speed)
    }

    /// Price of a new shipment travelling alone from `pickup` to `dropoff`.
    pub fn quote(&self, pickup: &str, dropoff: &str, weight_kg: f64) -> Quote {
        let distance = self.estimator.distance(pickup, dropoff);
        self.pricing.quote(distance, weight_kg)
    }

    /// Sequences all pickups followed by all drop-offs into a single shared route.
    #[instrument(skip_all, level = "debug", fields(shipments = shipments.len()))]
    pub fn optimize_routes(
        &self,
        shipments: &[ShipmentRecord],
    ) -> Result<OptimizationResult, OptimizationError> {
        if shipments.is_empty() {
            return Err(OptimizationError::NoShipments);
        }

        let route = self.sequencer().sequence(&combined_stops(shipments));
        let clusters = self.clusterer().cluster(shipments);

        let savings: u64 = shipments
            .iter()
            .map(|shipment| self.pricing.expected_savings(shipment))
            .sum();
        let consolidation_bonus =
            (savings as f64 * self.params.consolidation_bonus_ratio).floor() as u64;

        let n = shipments.len() as f64;

        debug!(
            clusters = clusters.len(),
            distance = route.total_distance(),
            savings,
            consolidation_bonus,
            "routes optimized"
        );

        Ok(OptimizationResult {
            total_distance: route.total_distance(),
            estimated_time: route.estimated_time(),
            estimated_minutes: route.estimated_minutes(),
            route: route.stops().to_vec(),
            total_savings: savings + consolidation_bonus,
            consolidation_score: consolidation_score(shipments),
            environmental_impact: EnvironmentalImpact {
                co2_saved: (n * self.params.co2_kg_per_shipment).floor() as u64,
                fuel_saved: (n * self.params.fuel_liters_per_shipment).floor() as u64,
            },
            clusters,
        })
    }

    /// Groups the first open shipments of the request into one shared run and prices it
    /// against sending each vehicle alone.
    #[instrument(skip_all, level = "debug", fields(shipments = request.shipments.len()))]
    pub fn optimize_cluster(
        &self,
        request: &OptimizationRequest,
    ) -> Result<SmartMatchResult, OptimizationError> {
        if request.shipments.is_empty() {
            return Err(OptimizationError::NoShipments);
        }

        let members = request
            .shipments
            .iter()
            .filter(|shipment| shipment.status().is_open())
            .take(self.params.cluster_size_limit)
            .collect::<Vec<_>>();

        if members.is_empty() {
            return Err(OptimizationError::NoEligibleShipments(
                request.shipments.len(),
            ));
        }

        let route = self.sequencer().sequence(&combined_stops(members.iter().copied()));

        let base_cost = route.total_distance() as f64 * self.pricing.per_km_rate();
        let shared_cost = base_cost * self.pricing.shared_cost_ratio();

        let confidence = members
            .iter()
            .map(|shipment| self.scorer.score(shipment).overall())
            .sum::<f64>()
            / members.len() as f64;

        let estimated_delivery = request.requested_at.checked_add(route.estimated_time())?;

        Ok(SmartMatchResult {
            id: format!("CLUSTER_{}", request.requested_at.as_millisecond()),
            clustered_shipments: members.iter().map(|s| s.id().to_owned()).collect(),
            optimized_route: route.render(),
            total_distance: route.total_distance(),
            total_savings: base_cost - shared_cost,
            estimated_delivery,
            confidence: to_percentage(confidence),
            participants: members.into_iter().map(Participant::from).collect(),
        })
    }

    /// Scores a single shipment for how easily it can be shared.
    pub fn find_matching_opportunities(&self, shipment: &ShipmentRecord) -> MatchOpportunity {
        let factors = self.scorer.score(shipment);

        if factors.overall() > self.params.match_threshold {
            MatchOpportunity {
                has_matches: true,
                confidence: factors.confidence(),
                estimated_savings: (shipment.cost() as f64 * self.pricing.savings_ratio()).floor()
                    as u64,
                matching_factors: factors,
            }
        } else {
            MatchOpportunity {
                has_matches: false,
                confidence: 0,
                estimated_savings: 0,
                matching_factors: factors,
            }
        }
    }

    /// Orders other merchants' shipments for display: those heading to an area the user also
    /// delivers to come first, then by compatibility.
    pub fn rank_nearby<S: AsRef<str>>(
        &self,
        user_dropoffs: &[S],
        candidates: Vec<ShipmentRecord>,
    ) -> Vec<NearbyShipment> {
        let user_dropoffs = user_dropoffs
            .iter()
            .map(|dropoff| {
                let dropoff = dropoff.as_ref();
                (dropoff.to_lowercase(), area_key(dropoff))
            })
            .collect::<Vec<_>>();

        let mut nearby = candidates
            .into_iter()
            .map(|shipment| {
                let area = area_key(shipment.dropoff_location());
                let is_highlighted = !area.is_empty()
                    && user_dropoffs.iter().any(|(dropoff, user_area)| {
                        dropoff.contains(&area)
                            || (!user_area.is_empty() && area.contains(user_area.as_str()))
                    });

                NearbyShipment {
                    compatibility_score: self.scorer.score(&shipment).confidence(),
                    is_highlighted,
                    shipment,
                }
            })
            .collect::<Vec<_>>();

        nearby.sort_by_key(|n| (!n.is_highlighted, Reverse(n.compatibility_score)));

        nearby
    }

    pub fn sequence_shipments(&self, shipments: &[ShipmentRecord]) -> SequencedRoute {
        self.sequencer().sequence(&combined_stops(shipments))
    }
}

fn combined_stops<'a>(shipments: impl IntoIterator<Item = &'a ShipmentRecord>) -> Vec<&'a str> {
    let (pickups, dropoffs): (Vec<&str>, Vec<&str>) = shipments
        .into_iter()
        .map(|shipment| (shipment.pickup_location(), shipment.dropoff_location()))
        .unzip();

    pickups.into_iter().chain(dropoffs).collect()
}

/// Neighbourhood part of a free-text address: the text before the first comma, lower-cased.
fn area_key(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}
