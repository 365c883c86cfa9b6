use thiserror::Error;

use crate::problem::shipment_status::ShipmentStatus;

#[derive(Debug, Error, PartialEq)]
pub enum ShipmentError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unknown urgency level: {0}")]
    UnknownUrgency(String),

    #[error("Unknown shipment status: {0}")]
    UnknownStatus(String),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Shipment {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ShipmentStatus,
        to: ShipmentStatus,
    },
}
