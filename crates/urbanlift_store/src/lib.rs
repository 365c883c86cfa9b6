pub mod collaboration;
pub mod error;
pub mod json_file_store;
pub mod memory_store;
pub mod shipment_factory;
pub mod shipment_records;
pub mod shipment_store;
pub mod stats;
pub mod status_ticker;

#[cfg(test)]
pub(crate) mod test_utils;
