//! Trained model artifacts
//!
//! Artifacts are JSON documents tagged by `kind`. The store loads each
//! configured file once at startup and implements the
//! [`ArtifactStore`] port.
//!
//! # Components
//!
//! - [`store::FileArtifactStore`] - Per-key load state and inference dispatch
//! - [`linear::LinearRegressionArtifact`] - One-hot encoded linear regression
//!
//! # Example artifact
//!
//! ```json
//! {
//!   "kind": "linear_regression",
//!   "intercept": 10.0,
//!   "coefficients": {"total_sqft": 0.08, "bath": 5.0, "bhk": 15.0},
//!   "locations": {"Whitefield": 3.5},
//!   "handle_unknown": "ignore"
//! }
//! ```
//!
//! [`ArtifactStore`]: pricing_application::ArtifactStore

pub mod error;
pub mod linear;
pub mod store;
