use jiff::Timestamp;

use crate::problem::{
    goods_category::GoodsCategory,
    shipment::{ShipmentRecord, ShipmentRecordBuilder},
    shipment_status::ShipmentStatus,
    urgency::Urgency,
};

pub fn test_timestamp() -> Timestamp {
    "2025-06-10T08:00:00Z".parse().unwrap()
}

pub struct ShipmentFixture {
    builder: ShipmentRecordBuilder,
}

impl ShipmentFixture {
    pub fn new(id: &str) -> Self {
        let mut builder = ShipmentRecordBuilder::default();
        builder
            .set_id(id)
            .set_pickup_location("Okhla, New Delhi")
            .set_dropoff_location("Lajpat Nagar, New Delhi")
            .set_goods_type(GoodsCategory::Electronics)
            .set_weight(10.0)
            .set_cost(500)
            .set_created_at(test_timestamp());

        Self { builder }
    }

    pub fn pickup(mut self, pickup: &str) -> Self {
        self.builder.set_pickup_location(pickup);
        self
    }

    pub fn dropoff(mut self, dropoff: &str) -> Self {
        self.builder.set_dropoff_location(dropoff);
        self
    }

    pub fn goods(mut self, goods: GoodsCategory) -> Self {
        self.builder.set_goods_type(goods);
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.builder.set_weight(weight);
        self
    }

    pub fn cost(mut self, cost: u64) -> Self {
        self.builder.set_cost(cost);
        self
    }

    pub fn savings(mut self, savings: u64) -> Self {
        self.builder.set_savings(savings);
        self
    }

    pub fn urgency(mut self, urgency: Urgency) -> Self {
        self.builder.set_urgency(urgency);
        self
    }

    pub fn status(mut self, status: ShipmentStatus) -> Self {
        self.builder.set_status(status);
        self
    }

    pub fn build(self) -> ShipmentRecord {
        self.builder.build().unwrap()
    }
}

pub fn create_shipments(shipments: &[(&str, &str, &str)]) -> Vec<ShipmentRecord> {
    shipments
        .iter()
        .map(|&(id, pickup, dropoff)| {
            ShipmentFixture::new(id)
                .pickup(pickup)
                .dropoff(dropoff)
                .build()
        })
        .collect()
}
