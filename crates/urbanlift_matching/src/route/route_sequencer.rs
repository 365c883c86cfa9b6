use tracing::debug;

use crate::{
    distance::{distance_estimator::DistanceEstimator, distance_matrix::DistanceMatrix},
    geocoding::geocoder::Geocoder,
    problem::{kilometers::Kilometers, kmh::Kmh},
    route::sequenced_route::SequencedRoute,
};

/// Nearest neighbor ordering of a set of stops.
///
/// Starts at the first name in the input and always moves to the closest stop not yet visited.
/// Ties go to the stop that appears first in the input. Repeated names are visited once.
/// There is no optimality guarantee.
pub struct RouteSequencer<'a, G> {
    estimator: &'a DistanceEstimator<G>,
    average_speed: Kmh,
}

impl<'a, G: Geocoder> RouteSequencer<'a, G> {
    pub fn new(estimator: &'a DistanceEstimator<G>, average_speed: Kmh) -> Self {
        Self {
            estimator,
            average_speed,
        }
    }

    pub fn sequence<S: AsRef<str>>(&self, locations: &[S]) -> SequencedRoute {
        let mut names: Vec<&str> = Vec::with_capacity(locations.len());
        for location in locations {
            let location = location.as_ref();
            if !names.contains(&location) {
                names.push(location);
            }
        }

        if names.is_empty() {
            return SequencedRoute::new(vec![], vec![], self.average_speed);
        }

        let matrix = DistanceMatrix::from_names(self.estimator, &names);
        let mut unvisited = (1..names.len()).collect::<Vec<_>>();
        let mut current = 0;
        let mut stops = vec![names[0].to_owned()];
        let mut hops = Vec::with_capacity(unvisited.len());

        while !unvisited.is_empty() {
            let mut nearest = 0;
            let mut min_distance = Kilometers::new(f64::INFINITY);
            for (position, &candidate) in unvisited.iter().enumerate() {
                let distance = matrix.get(current, candidate);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = position;
                }
            }

            current = unvisited.remove(nearest);
            stops.push(names[current].to_owned());
            hops.push(min_distance);
        }

        let route = SequencedRoute::new(stops, hops, self.average_speed);
        debug!(
            stops = route.stops().len(),
            distance = route.distance().value(),
            "route sequenced"
        );

        route
    }
}
