use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptimizationError {
    #[error("No shipments to optimize")]
    NoShipments,

    #[error("None of the {0} shipments is open for collaboration")]
    NoEligibleShipments(usize),

    #[error("Estimated delivery is out of range: {0}")]
    Time(#[from] jiff::Error),
}
