use crate::problem::location::Location;

/// Resolves a free-text location name to coordinates.
///
/// Resolution never fails: implementations fall back to a default coordinate for names they
/// do not know, so distance estimates degrade instead of erroring.
pub trait Geocoder: Send + Sync {
    fn resolve(&self, name: &str) -> Location;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn resolve(&self, name: &str) -> Location {
        (**self).resolve(name)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for std::sync::Arc<G> {
    fn resolve(&self, name: &str) -> Location {
        (**self).resolve(name)
    }
}
