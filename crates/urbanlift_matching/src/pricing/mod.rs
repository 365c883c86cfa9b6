pub mod pricing_model;
