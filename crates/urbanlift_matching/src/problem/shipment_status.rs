use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::problem::error::ShipmentError;

/// Lifecycle of a shipment. Statuses only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Deserialize, Serialize)]
pub enum ShipmentStatus {
    #[default]
    Processing,
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    Delivered,
}

impl ShipmentStatus {
    pub fn next(&self) -> Option<ShipmentStatus> {
        match self {
            ShipmentStatus::Processing => Some(ShipmentStatus::Pending),
            ShipmentStatus::Pending => Some(ShipmentStatus::InTransit),
            ShipmentStatus::InTransit => Some(ShipmentStatus::Delivered),
            ShipmentStatus::Delivered => None,
        }
    }

    pub fn can_transition_to(&self, target: ShipmentStatus) -> bool {
        target >= *self
    }

    /// Shipments that have not left the merchant yet and can still join a shared route.
    pub fn is_open(&self) -> bool {
        matches!(self, ShipmentStatus::Processing | ShipmentStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipmentStatus::Processing => "Processing",
            ShipmentStatus::Pending => "Pending",
            ShipmentStatus::InTransit => "In Transit",
            ShipmentStatus::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipmentStatus {
    type Err = ShipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "processing" => Ok(ShipmentStatus::Processing),
            "pending" => Ok(ShipmentStatus::Pending),
            "in transit" | "intransit" => Ok(ShipmentStatus::InTransit),
            "delivered" => Ok(ShipmentStatus::Delivered),
            _ => Err(ShipmentError::UnknownStatus(s.to_owned())),
        }
    }
}
