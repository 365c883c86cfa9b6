use fxhash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, instrument};
use urbanlift_matching::{
    geocoding::geocoder::Geocoder,
    optimizer::{optimization_result::OptimizationResult, route_optimizer::RouteOptimizer},
    pricing::pricing_model::PricingModel,
    problem::{route_summary::RouteSummary, shipment::ShipmentRecord},
};

use crate::{error::StoreError, shipment_store::ShipmentStore};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollaborationOutcome {
    pub result: OptimizationResult,
    pub shipments: Vec<ShipmentRecord>,
}

/// Confirms shared deliveries and records the outcome on every member.
pub struct CollaborationService<'a, S, G, P> {
    store: &'a S,
    optimizer: &'a RouteOptimizer<G, P>,
}

impl<'a, S: ShipmentStore, G: Geocoder, P: PricingModel> CollaborationService<'a, S, G, P> {
    pub fn new(store: &'a S, optimizer: &'a RouteOptimizer<G, P>) -> Self {
        Self { store, optimizer }
    }

    /// Optimizes the shared route of `ids` and folds the route summary and expected savings
    /// into each record. Nothing is written unless every step succeeds.
    #[instrument(skip_all, level = "debug", fields(shipments = ids.len()))]
    pub fn confirm(&self, ids: &[String]) -> Result<CollaborationOutcome, StoreError> {
        let mut seen = FxHashSet::default();
        let ids = ids
            .iter()
            .filter(|id| seen.insert(id.as_str()))
            .cloned()
            .collect::<Vec<_>>();

        let members = ids
            .iter()
            .map(|id| {
                self.store
                    .get(id)?
                    .ok_or_else(|| StoreError::NotFound(id.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = self.optimizer.optimize_routes(&members)?;

        let summary = RouteSummary {
            distance_km: result.total_distance,
            stops: result.route.len(),
            shared_with: members.len() - 1,
        };
        let savings = members
            .iter()
            .map(|member| {
                (
                    member.id().to_owned(),
                    self.optimizer.pricing().expected_savings(member),
                )
            })
            .collect::<FxHashMap<_, _>>();

        let shipments = self.store.update_many(&ids, &mut |record| {
            record.set_route_data(summary.clone());
            if let Some(&saving) = savings.get(record.id()) {
                record.set_savings(saving);
            }
            Ok(())
        })?;

        debug!(
            distance = summary.distance_km,
            stops = summary.stops,
            "collaboration confirmed"
        );

        Ok(CollaborationOutcome { result, shipments })
    }
}

#[cfg(test)]
mod tests {
    use urbanlift_matching::optimizer::error::OptimizationError;

    use super::*;
    use crate::{memory_store::MemoryShipmentStore, test_utils::ShipmentFixture};

    fn store() -> MemoryShipmentStore {
        MemoryShipmentStore::new(vec![
            ShipmentFixture::new("1")
                .pickup("Karol Bagh, New Delhi")
                .dropoff("Lajpat Nagar, New Delhi")
                .build(),
            ShipmentFixture::new("2")
                .pickup("Azadpur Mandi, New Delhi")
                .dropoff("Connaught Place, New Delhi")
                .savings(180)
                .build(),
        ])
        .unwrap()
    }

    #[test]
    fn test_confirm_updates_every_member() {
        let store = store();
        let optimizer = RouteOptimizer::default();
        let service = CollaborationService::new(&store, &optimizer);

        let outcome = service
            .confirm(&[String::from("1"), String::from("2")])
            .unwrap();

        assert_eq!(outcome.shipments.len(), 2);
        for record in store.list().unwrap() {
            let route = record.route_data().unwrap();
            assert_eq!(route.shared_with, 1);
            assert_eq!(route.stops, 4);
            assert_eq!(route.distance_km, outcome.result.total_distance);
        }

        // floor(450 * 0.3) when no savings were recorded yet
        assert_eq!(store.get("1").unwrap().unwrap().savings(), Some(135));
        assert_eq!(store.get("2").unwrap().unwrap().savings(), Some(180));
    }

    #[test]
    fn test_unknown_id_writes_nothing() {
        let store = store();
        let optimizer = RouteOptimizer::default();
        let service = CollaborationService::new(&store, &optimizer);

        let result = service.confirm(&[String::from("1"), String::from("missing")]);

        assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "missing"));
        assert!(
            store
                .list()
                .unwrap()
                .iter()
                .all(|record| record.route_data().is_none())
        );
    }

    #[test]
    fn test_empty_collaboration() {
        let store = store();
        let optimizer = RouteOptimizer::default();
        let service = CollaborationService::new(&store, &optimizer);

        let result = service.confirm(&[]);

        assert!(matches!(
            result,
            Err(StoreError::Optimization(OptimizationError::NoShipments))
        ));
    }

    #[test]
    fn test_duplicate_ids_count_once() {
        let store = store();
        let optimizer = RouteOptimizer::default();
        let service = CollaborationService::new(&store, &optimizer);

        let outcome = service
            .confirm(&[String::from("1"), String::from("1")])
            .unwrap();

        assert_eq!(outcome.shipments.len(), 1);
        assert_eq!(outcome.shipments[0].route_data().unwrap().shared_with, 0);
    }
}
