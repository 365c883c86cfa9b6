pub mod cluster;
pub mod distance;
pub mod geocoding;
pub mod json;
pub mod optimizer;
pub mod pricing;
pub mod problem;
pub mod route;
pub mod scoring;

#[cfg(test)]
pub(crate) mod test_utils;
