use crate::problem::kilometers::Kilometers;

const EARTH_RADIUS_KM: f64 = 6371.0;

/// A named point. Coordinates are stored as a `geo::Point` with x = longitude, y = latitude.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    name: String,
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Great-circle distance on a sphere of radius 6371 km.
    pub fn haversine_distance(&self, to: &Location) -> Kilometers {
        let delta_lat = (to.lat() - self.lat()).to_radians();
        let delta_lon = (to.lon() - self.lon()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + self.lat().to_radians().cos()
                * to.lat().to_radians().cos()
                * (delta_lon / 2.0).sin().powi(2);

        // Rounding can push `a` marginally outside [0, 1] for antipodal points
        let a = a.clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        Kilometers::new(EARTH_RADIUS_KM * c)
    }
}

impl From<&Location> for geo::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

impl From<&Location> for geo::Coord<f64> {
    fn from(val: &Location) -> Self {
        geo::Coord {
            x: val.lon(),
            y: val.lat(),
        }
    }
}
