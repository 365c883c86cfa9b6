use std::path::PathBuf;

use thiserror::Error;
use urbanlift_matching::{optimizer::error::OptimizationError, problem::error::ShipmentError};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Shipment {0} not found")]
    NotFound(String),

    #[error("Shipment {0} already exists")]
    DuplicateId(String),

    #[error("Tick period must be positive")]
    ZeroTickPeriod,

    #[error(transparent)]
    Shipment(#[from] ShipmentError),

    #[error(transparent)]
    Optimization(#[from] OptimizationError),

    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed shipment file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
