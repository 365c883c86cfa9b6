use rayon::prelude::*;

use crate::{
    distance::distance_estimator::DistanceEstimator, geocoding::geocoder::Geocoder,
    problem::kilometers::Kilometers,
};

/// This matrix use a flat structure to store distances between named locations.
/// The index for a pair is `from * num_locations + to`.
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    names: Vec<String>,
    distances: Vec<Kilometers>,
}

impl DistanceMatrix {
    pub fn from_names<G: Geocoder, S: AsRef<str>>(
        estimator: &DistanceEstimator<G>,
        names: &[S],
    ) -> Self {
        let locations = names
            .iter()
            .map(|name| estimator.resolve(name.as_ref()))
            .collect::<Vec<_>>();
        let num_locations = locations.len();

        let distances = (0..num_locations * num_locations)
            .into_par_iter()
            .map(|index| {
                let (from, to) = (index / num_locations, index % num_locations);
                if from == to {
                    Kilometers::ZERO
                } else {
                    locations[from].haversine_distance(&locations[to])
                }
            })
            .collect();

        Self {
            names: names.iter().map(|name| name.as_ref().to_owned()).collect(),
            distances,
        }
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.names.len() + to
    }

    pub fn get(&self, from: usize, to: usize) -> Kilometers {
        self.distances[self.index(from, to)]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn num_locations(&self) -> usize {
        self.names.len()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.num_locations();
        (0..n).all(|i| (0..n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix() {
        let estimator = DistanceEstimator::with_static_table();
        let names = vec![
            String::from("Sector 62, Noida"),
            String::from("Okhla, New Delhi"),
            String::from("Azadpur Mandi, New Delhi"),
        ];

        let matrix = DistanceMatrix::from_names(&estimator, &names);

        assert_eq!(matrix.num_locations(), 3);
        assert!(matrix.is_symmetric());
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), Kilometers::ZERO);
            for j in 0..3 {
                assert_eq!(matrix.get(i, j), estimator.distance(&names[i], &names[j]));
            }
        }
    }

    #[test]
    fn test_empty_matrix() {
        let matrix =
            DistanceMatrix::from_names::<_, &str>(&DistanceEstimator::with_static_table(), &[]);

        assert_eq!(matrix.num_locations(), 0);
        assert!(matrix.names().is_empty());
    }
}
