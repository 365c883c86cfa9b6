use crate::{
    geocoding::{geocoder::Geocoder, static_geocoder::StaticGeocoder},
    problem::{kilometers::Kilometers, location::Location},
};

/// Straight-line distance between named locations.
#[derive(Debug, Clone)]
pub struct DistanceEstimator<G = StaticGeocoder> {
    geocoder: G,
}

impl DistanceEstimator {
    pub fn with_static_table() -> Self {
        Self {
            geocoder: StaticGeocoder::default(),
        }
    }
}

impl Default for DistanceEstimator {
    fn default() -> Self {
        Self::with_static_table()
    }
}

impl<G: Geocoder> DistanceEstimator<G> {
    pub fn new(geocoder: G) -> Self {
        Self { geocoder }
    }

    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    pub fn resolve(&self, name: &str) -> Location {
        self.geocoder.resolve(name)
    }

    pub fn distance(&self, from: &str, to: &str) -> Kilometers {
        if from == to {
            return Kilometers::ZERO;
        }

        let from = self.geocoder.resolve(from);
        let to = self.geocoder.resolve(to);

        from.haversine_distance(&to)
    }
}
