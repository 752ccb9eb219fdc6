//! Use cases (application services)

pub mod load_catalog;
pub mod predict_price;
