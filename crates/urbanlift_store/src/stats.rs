use serde::{Deserialize, Serialize};
use urbanlift_matching::problem::{shipment::ShipmentRecord, shipment_status::ShipmentStatus};

/// Kilograms of CO2 credited for every delivered shipment.
pub const CO2_KG_PER_DELIVERY: f64 = 2.5;

/// Dashboard counters over the whole store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentStats {
    pub total: usize,
    pub delivered: usize,
    pub in_transit: usize,
    /// Shipments that have not left yet, Processing included.
    pub pending: usize,
    pub total_savings: u64,
    pub co2_reduced: u64,
    pub average_savings: u64,
}

impl ShipmentStats {
    pub fn from_records(records: &[ShipmentRecord]) -> Self {
        let count = |status: ShipmentStatus| {
            records
                .iter()
                .filter(|record| record.status() == status)
                .count()
        };

        let delivered = count(ShipmentStatus::Delivered);
        let total_savings = records
            .iter()
            .filter_map(|record| record.savings())
            .sum::<u64>();

        ShipmentStats {
            total: records.len(),
            delivered,
            in_transit: count(ShipmentStatus::InTransit),
            pending: records
                .iter()
                .filter(|record| record.status().is_open())
                .count(),
            total_savings,
            co2_reduced: (delivered as f64 * CO2_KG_PER_DELIVERY).floor() as u64,
            average_savings: total_savings / records.len().max(1) as u64,
        }
    }
}
