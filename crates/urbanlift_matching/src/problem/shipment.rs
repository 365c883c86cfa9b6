use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::problem::{
    error::ShipmentError, goods_category::GoodsCategory, route_summary::RouteSummary,
    shipment_status::ShipmentStatus, urgency::Urgency,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentRecord {
    id: String,
    title: String,
    pickup_location: String,
    dropoff_location: String,
    goods_type: GoodsCategory,
    weight: f64,
    cost: u64,
    #[serde(default)]
    urgency: Urgency,
    #[serde(default)]
    status: ShipmentStatus,
    created_at: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    savings: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    route_data: Option<RouteSummary>,
}

impl ShipmentRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn pickup_location(&self) -> &str {
        &self.pickup_location
    }

    pub fn dropoff_location(&self) -> &str {
        &self.dropoff_location
    }

    pub fn goods_type(&self) -> GoodsCategory {
        self.goods_type
    }

    /// Weight in kilograms.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn urgency(&self) -> Urgency {
        self.urgency
    }

    pub fn status(&self) -> ShipmentStatus {
        self.status
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn savings(&self) -> Option<u64> {
        self.savings
    }

    pub fn route_data(&self) -> Option<&RouteSummary> {
        self.route_data.as_ref()
    }

    pub fn set_status(&mut self, status: ShipmentStatus) -> Result<(), ShipmentError> {
        if !self.status.can_transition_to(status) {
            return Err(ShipmentError::InvalidTransition {
                id: self.id.clone(),
                from: self.status,
                to: status,
            });
        }

        self.status = status;
        Ok(())
    }

    pub fn set_savings(&mut self, savings: u64) {
        self.savings = Some(savings);
    }

    pub fn set_route_data(&mut self, route_data: RouteSummary) {
        self.route_data = Some(route_data);
    }
}

#[derive(Default)]
pub struct ShipmentRecordBuilder {
    id: Option<String>,
    title: Option<String>,
    pickup_location: Option<String>,
    dropoff_location: Option<String>,
    goods_type: Option<GoodsCategory>,
    weight: Option<f64>,
    cost: Option<u64>,
    urgency: Option<Urgency>,
    status: Option<ShipmentStatus>,
    created_at: Option<Timestamp>,
    description: Option<String>,
    savings: Option<u64>,
}

impl ShipmentRecordBuilder {
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut ShipmentRecordBuilder {
        self.id = Some(id.into());
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut ShipmentRecordBuilder {
        self.title = Some(title.into());
        self
    }

    pub fn set_pickup_location(
        &mut self,
        pickup_location: impl Into<String>,
    ) -> &mut ShipmentRecordBuilder {
        self.pickup_location = Some(pickup_location.into());
        self
    }

    pub fn set_dropoff_location(
        &mut self,
        dropoff_location: impl Into<String>,
    ) -> &mut ShipmentRecordBuilder {
        self.dropoff_location = Some(dropoff_location.into());
        self
    }

    pub fn set_goods_type(&mut self, goods_type: GoodsCategory) -> &mut ShipmentRecordBuilder {
        self.goods_type = Some(goods_type);
        self
    }

    pub fn set_weight(&mut self, weight: f64) -> &mut ShipmentRecordBuilder {
        self.weight = Some(weight);
        self
    }

    pub fn set_cost(&mut self, cost: u64) -> &mut ShipmentRecordBuilder {
        self.cost = Some(cost);
        self
    }

    pub fn set_urgency(&mut self, urgency: Urgency) -> &mut ShipmentRecordBuilder {
        self.urgency = Some(urgency);
        self
    }

    pub fn set_status(&mut self, status: ShipmentStatus) -> &mut ShipmentRecordBuilder {
        self.status = Some(status);
        self
    }

    pub fn set_created_at(&mut self, created_at: Timestamp) -> &mut ShipmentRecordBuilder {
        self.created_at = Some(created_at);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut ShipmentRecordBuilder {
        self.description = Some(description.into());
        self
    }

    pub fn set_savings(&mut self, savings: u64) -> &mut ShipmentRecordBuilder {
        self.savings = Some(savings);
        self
    }

    pub fn build(self) -> Result<ShipmentRecord, ShipmentError> {
        let weight = self.weight.unwrap_or_default();
        if !weight.is_finite() || weight < 0.0 {
            return Err(ShipmentError::InvalidWeight(weight.to_string()));
        }

        let id = self.id.ok_or(ShipmentError::MissingField("id"))?;

        Ok(ShipmentRecord {
            title: self.title.unwrap_or_else(|| id.clone()),
            id,
            pickup_location: self
                .pickup_location
                .ok_or(ShipmentError::MissingField("pickupLocation"))?,
            dropoff_location: self
                .dropoff_location
                .ok_or(ShipmentError::MissingField("dropoffLocation"))?,
            goods_type: self.goods_type.unwrap_or(GoodsCategory::Other),
            weight,
            cost: self.cost.unwrap_or_default(),
            urgency: self.urgency.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Timestamp::now),
            description: self.description,
            savings: self.savings,
            route_data: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let mut builder = ShipmentRecordBuilder::default();
        builder
            .set_id("SHIP_1")
            .set_pickup_location("Karol Bagh, New Delhi")
            .set_dropoff_location("Okhla, New Delhi")
            .set_goods_type(GoodsCategory::Textiles)
            .set_weight(12.0)
            .set_cost(450);

        let shipment = builder.build().unwrap();

        assert_eq!(shipment.id(), "SHIP_1");
        assert_eq!(shipment.title(), "SHIP_1");
        assert_eq!(shipment.status(), ShipmentStatus::Processing);
        assert_eq!(shipment.urgency(), Urgency::Normal);
        assert_eq!(shipment.savings(), None);
    }

    #[test]
    fn test_builder_requires_locations() {
        let mut builder = ShipmentRecordBuilder::default();
        builder.set_id("SHIP_1").set_pickup_location("Karol Bagh, New Delhi");

        assert_eq!(
            builder.build(),
            Err(ShipmentError::MissingField("dropoffLocation"))
        );
    }

    #[test]
    fn test_builder_rejects_negative_weight() {
        let mut builder = ShipmentRecordBuilder::default();
        builder
            .set_id("SHIP_1")
            .set_pickup_location("a")
            .set_dropoff_location("b")
            .set_weight(-3.0);

        assert!(matches!(
            builder.build(),
            Err(ShipmentError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_status_cannot_move_backwards() {
        let mut builder = ShipmentRecordBuilder::default();
        builder
            .set_id("SHIP_1")
            .set_pickup_location("a")
            .set_dropoff_location("b")
            .set_status(ShipmentStatus::InTransit);
        let mut shipment = builder.build().unwrap();

        let result = shipment.set_status(ShipmentStatus::Pending);

        assert_eq!(
            result,
            Err(ShipmentError::InvalidTransition {
                id: String::from("SHIP_1"),
                from: ShipmentStatus::InTransit,
                to: ShipmentStatus::Pending,
            })
        );
        assert_eq!(shipment.status(), ShipmentStatus::InTransit);

        shipment.set_status(ShipmentStatus::Delivered).unwrap();
        assert_eq!(shipment.status(), ShipmentStatus::Delivered);
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{
            "id": "SHIP_1",
            "title": "Sarees",
            "pickupLocation": "Karol Bagh, New Delhi",
            "dropoffLocation": "Lajpat Nagar, New Delhi",
            "goodsType": "Textiles",
            "weight": 8.5,
            "cost": 320,
            "urgency": "standard",
            "status": "In Transit",
            "createdAt": "2025-06-10T08:00:00Z"
        }"#;

        let shipment: ShipmentRecord = serde_json::from_str(json).unwrap();

        assert_eq!(shipment.goods_type(), GoodsCategory::Textiles);
        assert_eq!(shipment.urgency(), Urgency::Normal);
        assert_eq!(shipment.status(), ShipmentStatus::InTransit);

        let value = serde_json::to_value(&shipment).unwrap();
        assert_eq!(value["dropoffLocation"], "Lajpat Nagar, New Delhi");
        assert!(value.get("savings").is_none());
    }
}
