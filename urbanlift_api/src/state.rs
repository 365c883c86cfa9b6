use std::sync::Arc;

use urbanlift_matching::optimizer::route_optimizer::RouteOptimizer;
use urbanlift_store::shipment_store::ShipmentStore;

pub struct AppState {
    pub optimizer: RouteOptimizer,
    pub store: Arc<dyn ShipmentStore>,
}
