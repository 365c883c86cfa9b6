pub mod distance_estimator;
pub mod distance_matrix;
