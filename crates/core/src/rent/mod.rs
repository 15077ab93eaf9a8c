//! Rental income and rent-due projection for fixed assets.

mod rent_calculator;
mod rent_model;

pub use rent_calculator::{effective_window, monthly_income, next_due, yearly_income};
pub use rent_model::{RentDueProjection, RentDueUrgency};
