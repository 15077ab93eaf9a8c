//! Straight-line depreciation - calculator and result model.

mod depreciation_calculator;
mod depreciation_model;

pub use depreciation_calculator::straight_line;
pub use depreciation_model::DepreciationFigures;
