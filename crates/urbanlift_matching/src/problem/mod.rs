pub mod error;
pub mod goods_category;
pub mod kilometers;
pub mod kmh;
pub mod location;
pub mod route_summary;
pub mod shipment;
pub mod shipment_status;
pub mod urgency;
