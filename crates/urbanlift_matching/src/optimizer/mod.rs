pub mod error;
pub mod optimization_result;
pub mod optimizer_params;
pub mod route_optimizer;
pub mod smart_match;
