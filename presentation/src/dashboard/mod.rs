//! Interactive terminal dashboard
//!
//! One screen: property inputs on the left, the estimate on the right.

mod app;
mod state;
mod widget;

pub use app::DashboardApp;
pub use state::{
    BATH_DEFAULT, BHK_DEFAULT, DashboardState, Estimate, Field, ROOMS_MAX, ROOMS_MIN,
    SQFT_DEFAULT, SQFT_MAX, SQFT_MIN, SQFT_STEP,
};
pub use widget::DashboardWidget;
