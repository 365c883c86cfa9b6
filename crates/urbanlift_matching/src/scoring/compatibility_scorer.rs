use crate::{
    problem::{goods_category::GoodsCategory, shipment::ShipmentRecord, urgency::Urgency},
    scoring::{
        compatibility_factors::CompatibilityFactors,
        goods_compatibility::GoodsCompatibilityTable,
    },
};

/// Areas with dense merchant coverage. Matched as lower-case substrings.
pub const DEFAULT_KNOWN_AREAS: [&str; 4] =
    ["chandni chowk", "connaught place", "lajpat nagar", "karol bagh"];

#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    goods_table: GoodsCompatibilityTable,
    known_areas: Vec<String>,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(
            GoodsCompatibilityTable::default(),
            DEFAULT_KNOWN_AREAS.iter().map(|area| area.to_string()).collect(),
        )
    }
}

impl CompatibilityScorer {
    pub fn new(goods_table: GoodsCompatibilityTable, known_areas: Vec<String>) -> Self {
        Self {
            goods_table,
            known_areas: known_areas
                .into_iter()
                .map(|area| area.to_lowercase())
                .collect(),
        }
    }

    pub fn goods_table(&self) -> &GoodsCompatibilityTable {
        &self.goods_table
    }

    pub fn score(&self, shipment: &ShipmentRecord) -> CompatibilityFactors {
        CompatibilityFactors {
            location: self.location_score(shipment.pickup_location(), shipment.dropoff_location()),
            goods: self.goods_score(shipment.goods_type()),
            timing: timing_score(shipment.urgency()),
            weight: weight_score(shipment.weight()),
        }
    }

    pub fn is_known_area(&self, location: &str) -> bool {
        let location = location.to_lowercase();
        self.known_areas.iter().any(|area| location.contains(area))
    }

    pub fn location_score(&self, pickup: &str, dropoff: &str) -> f64 {
        if self.is_known_area(pickup) && self.is_known_area(dropoff) {
            0.9
        } else {
            0.6
        }
    }

    pub fn goods_score(&self, goods: GoodsCategory) -> f64 {
        self.goods_table.score(goods)
    }
}

pub fn timing_score(urgency: Urgency) -> f64 {
    match urgency {
        Urgency::Low => 0.9,
        Urgency::Normal => 0.8,
        Urgency::High => 0.6,
        Urgency::Urgent => 0.3,
        Urgency::Medium => 0.7,
    }
}

/// Bands are applied to the weight truncated to whole kilograms.
pub fn weight_score(weight_kg: f64) -> f64 {
    let weight = weight_kg.trunc();
    if (5.0..=25.0).contains(&weight) {
        0.9
    } else if (25.0..=50.0).contains(&weight) {
        0.7
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ShipmentFixture;

    #[test]
    fn test_location_score() {
        let scorer = CompatibilityScorer::default();

        assert_eq!(
            scorer.location_score("Karol Bagh, New Delhi", "Connaught Place, Delhi"),
            0.9
        );
        assert_eq!(
            scorer.location_score("KAROL BAGH market", "near lajpat nagar"),
            0.9
        );
        assert_eq!(
            scorer.location_score("Karol Bagh, New Delhi", "Gurgaon Sector 14"),
            0.6
        );
    }

    #[test]
    fn test_timing_score() {
        let lowest = Urgency::ALL
            .iter()
            .map(|&urgency| timing_score(urgency))
            .fold(f64::INFINITY, f64::min);

        assert_eq!(lowest, timing_score(Urgency::Urgent));
        assert_eq!(timing_score(Urgency::Urgent), 0.3);
        assert_eq!(timing_score(Urgency::Low), 0.9);
        assert_eq!(timing_score(Urgency::Medium), 0.7);
    }

    #[test]
    fn test_weight_score() {
        assert_eq!(weight_score(10.0), 0.9);
        assert_eq!(weight_score(5.0), 0.9);
        assert_eq!(weight_score(25.0), 0.9);
        assert_eq!(weight_score(25.9), 0.9);
        assert_eq!(weight_score(26.0), 0.7);
        assert_eq!(weight_score(50.0), 0.7);
        assert_eq!(weight_score(4.9), 0.5);
        assert_eq!(weight_score(51.0), 0.5);
        assert_eq!(weight_score(0.0), 0.5);
    }

    #[test]
    fn test_score() {
        let scorer = CompatibilityScorer::default();
        let shipment = ShipmentFixture::new("1")
            .pickup("Karol Bagh, New Delhi")
            .dropoff("Lajpat Nagar, New Delhi")
            .goods(GoodsCategory::Electronics)
            .urgency(Urgency::Normal)
            .weight(10.0)
            .build();

        let factors = scorer.score(&shipment);

        assert_eq!(
            factors,
            CompatibilityFactors {
                location: 0.9,
                goods: 0.8,
                timing: 0.8,
                weight: 0.9,
            }
        );
        assert_eq!(factors.confidence(), 85);
    }

    #[test]
    fn test_score_is_a_percentage() {
        let scorer = CompatibilityScorer::default();

        for goods in GoodsCategory::ALL {
            for urgency in Urgency::ALL {
                for weight in [0.0, 7.0, 30.0, 400.0] {
                    let shipment = ShipmentFixture::new("1")
                        .goods(goods)
                        .urgency(urgency)
                        .weight(weight)
                        .build();
                    let confidence = scorer.score(&shipment).confidence();
                    assert!(confidence <= 100);
                    assert!(confidence >= 45);
                }
            }
        }
    }
}
