use jiff::Timestamp;
use rand::RngCore;
use urbanlift_matching::problem::{
    goods_category::GoodsCategory,
    shipment::{ShipmentRecord, ShipmentRecordBuilder},
    shipment_status::ShipmentStatus,
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
            .set_pickup_location("Karol Bagh, New Delhi")
            .set_dropoff_location("Connaught Place, New Delhi")
            .set_goods_type(GoodsCategory::Textiles)
            .set_weight(12.0)
            .set_cost(450)
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

    pub fn status(mut self, status: ShipmentStatus) -> Self {
        self.builder.set_status(status);
        self
    }

    pub fn savings(mut self, savings: u64) -> Self {
        self.builder.set_savings(savings);
        self
    }

    pub fn build(self) -> ShipmentRecord {
        self.builder.build().unwrap()
    }
}

pub fn create_shipment(id: &str) -> ShipmentRecord {
    ShipmentFixture::new(id).build()
}

pub fn create_shipment_with_status(id: &str, status: ShipmentStatus) -> ShipmentRecord {
    ShipmentFixture::new(id).status(status).build()
}

/// Rng returning the same value forever. `MockRng::new(0)` makes every `random_bool` succeed,
/// `MockRng::new(u64::MAX)` makes them all fail.
pub struct MockRng {
    value: u64,
}

impl MockRng {
    pub fn new(value: u64) -> Self {
        MockRng { value }
    }
}

impl RngCore for MockRng {
    fn next_u32(&mut self) -> u32 {
        (self.value >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.value.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
