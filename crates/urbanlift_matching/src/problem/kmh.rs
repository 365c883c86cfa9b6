use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Kmh(f64);

impl Kmh {
    pub fn new(value: f64) -> Self {
        Kmh(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Kmh {
    /// Assumed average speed of a delivery van in city traffic.
    fn default() -> Self {
        Kmh(25.0)
    }
}
