use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Heuristic sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CompatibilityFactors {
    pub location: f64,
    pub goods: f64,
    pub timing: f64,
    pub weight: f64,
}

impl CompatibilityFactors {
    pub fn overall(&self) -> f64 {
        (self.location + self.goods + self.timing + self.weight) / 4.0
    }

    /// Overall score as an integer percentage.
    pub fn confidence(&self) -> u8 {
        to_percentage(self.overall())
    }
}

pub(crate) fn to_percentage(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overall_is_mean() {
        let factors = CompatibilityFactors {
            location: 0.9,
            goods: 0.8,
            timing: 0.8,
            weight: 0.9,
        };

        assert!((factors.overall() - 0.85).abs() < 1e-9);
        assert_eq!(factors.confidence(), 85);
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(to_percentage(1.7), 100);
        assert_eq!(to_percentage(-0.2), 0);
        assert_eq!(to_percentage(f64::NAN), 0);
    }
}
