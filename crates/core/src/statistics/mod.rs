//! Year-over-year statistics - aggregation models and service.

mod statistics_model;
mod statistics_service;

pub use statistics_model::{
    statistics_years, CategoryBreakdown, FixedStatusCounts, FixedYearlyStatistics, MonthlyPoint,
    VirtualStatusCounts, VirtualYearlyStatistics, YearlySummary,
};
pub use statistics_service::{StatisticsService, StatisticsServiceTrait};
