use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tracing::debug;
use urbanlift_matching::{
    geocoding::geocoder::Geocoder,
    optimizer::route_optimizer::RouteOptimizer,
    pricing::pricing_model::PricingModel,
    problem::{
        error::ShipmentError,
        goods_category::GoodsCategory,
        shipment::{ShipmentRecord, ShipmentRecordBuilder},
        shipment_status::ShipmentStatus,
        urgency::Urgency,
    },
};
use uuid::Uuid;

/// What a merchant fills in when creating a shipment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentDraft {
    pub title: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub goods_type: GoodsCategory,
    pub weight: f64,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub description: Option<String>,
}

pub struct ShipmentFactory<'a, G, P> {
    optimizer: &'a RouteOptimizer<G, P>,
}

impl<'a, G: Geocoder, P: PricingModel> ShipmentFactory<'a, G, P> {
    pub fn new(optimizer: &'a RouteOptimizer<G, P>) -> Self {
        Self { optimizer }
    }

    pub fn create(&self, draft: ShipmentDraft) -> Result<ShipmentRecord, ShipmentError> {
        self.create_at(draft, Timestamp::now())
    }

    /// Priced record with a fresh `SHIP_` id, waiting in Processing.
    pub fn create_at(
        &self,
        draft: ShipmentDraft,
        created_at: Timestamp,
    ) -> Result<ShipmentRecord, ShipmentError> {
        let quote = self.optimizer.quote(
            &draft.pickup_location,
            &draft.dropoff_location,
            draft.weight,
        );

        let mut builder = ShipmentRecordBuilder::default();
        builder
            .set_id(format!("SHIP_{}", Uuid::new_v4().simple()))
            .set_title(draft.title)
            .set_pickup_location(draft.pickup_location)
            .set_dropoff_location(draft.dropoff_location)
            .set_goods_type(draft.goods_type)
            .set_weight(draft.weight)
            .set_cost(quote.cost)
            .set_savings(quote.savings)
            .set_urgency(draft.urgency)
            .set_status(ShipmentStatus::Processing)
            .set_created_at(created_at);

        if let Some(description) = draft.description {
            builder.set_description(description);
        }

        let record = builder.build()?;
        debug!(id = record.id(), cost = quote.cost, "shipment created");

        Ok(record)
    }
}
