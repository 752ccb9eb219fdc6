//! Application-level configuration.
//!
//! - [`PipelineConfig`]: where artifacts and the dataset live, and which
//!   models run when a caller selects none

pub mod pipeline_config;

pub use pipeline_config::PipelineConfig;
