use fxhash::FxHashMap;
use tracing::debug;

use crate::{geocoding::geocoder::Geocoder, problem::location::Location};

/// Central Delhi, used for any name missing from the table.
pub const FALLBACK_COORDINATES: (f64, f64) = (28.6, 77.2);

const KNOWN_LOCATIONS: [(&str, f64, f64); 8] = [
    ("Sector 62, Noida", 28.6280, 77.3649),
    ("Lajpat Nagar, New Delhi", 28.5677, 77.2431),
    ("Karol Bagh, New Delhi", 28.6519, 77.1909),
    ("Connaught Place, New Delhi", 28.6315, 77.2167),
    ("Azadpur Mandi, New Delhi", 28.7041, 77.1850),
    ("Gurgaon Sector 14", 28.4595, 77.0266),
    ("Okhla, New Delhi", 28.5355, 77.2640),
    ("Faridabad Industrial Area", 28.3670, 77.3155),
];

/// Lookup table geocoder. Names are matched exactly.
#[derive(Debug, Clone)]
pub struct StaticGeocoder {
    table: FxHashMap<String, (f64, f64)>,
    fallback: (f64, f64),
}

impl Default for StaticGeocoder {
    fn default() -> Self {
        let table = KNOWN_LOCATIONS
            .iter()
            .map(|&(name, lat, lon)| (name.to_owned(), (lat, lon)))
            .collect();

        Self {
            table,
            fallback: FALLBACK_COORDINATES,
        }
    }
}

impl StaticGeocoder {
    pub fn empty(fallback: (f64, f64)) -> Self {
        Self {
            table: FxHashMap::default(),
            fallback,
        }
    }

    pub fn with_location(mut self, name: impl Into<String>, lat: f64, lon: f64) -> Self {
        self.table.insert(name.into(), (lat, lon));
        self
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve(&self, name: &str) -> Location {
        let (lat, lon) = match self.table.get(name) {
            Some(&coordinates) => coordinates,
            None => {
                debug!(name, "unknown location, using fallback coordinates");
                self.fallback
            }
        };

        Location::from_lat_lon(name, lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location() {
        let geocoder = StaticGeocoder::default();
        let location = geocoder.resolve("Gurgaon Sector 14");

        assert_eq!(location.lat(), 28.4595);
        assert_eq!(location.lon(), 77.0266);
        assert_eq!(location.name(), "Gurgaon Sector 14");
        assert_eq!(geocoder.len(), 8);
    }

    #[test]
    fn test_unknown_location_uses_fallback() {
        let geocoder = StaticGeocoder::default();
        let location = geocoder.resolve("Chandni Chowk, Delhi");

        assert_eq!((location.lat(), location.lon()), FALLBACK_COORDINATES);
    }

    #[test]
    fn test_lookup_is_exact() {
        let geocoder = StaticGeocoder::default();

        assert!(geocoder.is_known("Okhla, New Delhi"));
        assert!(!geocoder.is_known("okhla, new delhi"));
    }

    #[test]
    fn test_with_location() {
        let geocoder = StaticGeocoder::empty((0.0, 0.0)).with_location("Depot", 1.0, 2.0);
        let location = geocoder.resolve("Depot");

        assert_eq!((location.lat(), location.lon()), (1.0, 2.0));
        assert_eq!((geocoder.resolve("x").lat(), geocoder.resolve("x").lon()), (0.0, 0.0));
    }
}
