pub mod geocoder;
pub mod static_geocoder;
