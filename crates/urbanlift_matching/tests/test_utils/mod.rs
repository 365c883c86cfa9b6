use jiff::Timestamp;
use urbanlift_matching::problem::{
    goods_category::GoodsCategory,
    shipment::{ShipmentRecord, ShipmentRecordBuilder},
};

pub fn create_shipment(id: &str, pickup: &str, dropoff: &str) -> ShipmentRecord {
    let mut builder = ShipmentRecordBuilder::default();
    builder
        .set_id(id)
        .set_pickup_location(pickup)
        .set_dropoff_location(dropoff)
        .set_goods_type(GoodsCategory::Electronics)
        .set_weight(10.0)
        .set_cost(600)
        .set_created_at(Timestamp::UNIX_EPOCH);

    builder.build().unwrap()
}

pub fn location_names(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
