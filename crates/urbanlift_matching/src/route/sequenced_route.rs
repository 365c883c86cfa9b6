use jiff::SignedDuration;

use crate::problem::{kilometers::Kilometers, kmh::Kmh};

pub const ROUTE_SEPARATOR: &str = " → ";

#[derive(Debug, Clone, PartialEq)]
pub struct SequencedRoute {
    stops: Vec<String>,
    hops: Vec<Kilometers>,
    average_speed: Kmh,
}

impl SequencedRoute {
    pub(crate) fn new(stops: Vec<String>, hops: Vec<Kilometers>, average_speed: Kmh) -> Self {
        debug_assert_eq!(hops.len(), stops.len().saturating_sub(1));
        Self {
            stops,
            hops,
            average_speed,
        }
    }

    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Distance of each leg, `hops()[i]` goes from `stops()[i]` to `stops()[i + 1]`.
    pub fn hops(&self) -> &[Kilometers] {
        &self.hops
    }

    pub fn distance(&self) -> Kilometers {
        self.hops.iter().copied().sum()
    }

    /// Total distance rounded down to whole kilometers.
    pub fn total_distance(&self) -> u64 {
        self.distance().whole()
    }

    pub fn estimated_time(&self) -> SignedDuration {
        self.distance() / self.average_speed
    }

    pub fn estimated_minutes(&self) -> u64 {
        let minutes = self.distance().value() / self.average_speed.value() * 60.0;
        if minutes.is_finite() {
            minutes.max(0.0).floor() as u64
        } else {
            u64::MAX
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn render(&self) -> String {
        self.stops.join(ROUTE_SEPARATOR)
    }
}
