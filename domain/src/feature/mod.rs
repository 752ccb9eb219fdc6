//! Feature input handling
//!
//! - [`raw::RawFeatureInput`]: the four fields as an adapter received them
//! - [`record::FeatureRecord`]: the validated, typed record models consume

pub mod raw;
pub mod record;
