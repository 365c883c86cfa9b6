pub mod compatibility_factors;
pub mod compatibility_scorer;
pub mod consolidation;
pub mod goods_compatibility;
