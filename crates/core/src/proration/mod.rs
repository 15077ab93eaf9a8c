//! Time-proration of subscription cost across calendar windows.

mod proration_calculator;
mod proration_model;

pub use proration_calculator::allocate;
pub use proration_model::DateWindow;
