//! TimeValue Core - Domain entities, calculators, and traits.
//!
//! This crate contains the core business logic for TimeValue: virtual
//! (time-limited) and fixed (depreciable) asset models, the proration and
//! depreciation calculators, and the statistics aggregation built on top of
//! them. It is transport-agnostic and defines repository traits that are
//! implemented by the `timevalue-client` crate against the REST backend.

pub mod categories;
pub mod constants;
pub mod depreciation;
pub mod errors;
pub mod expenses;
pub mod fixed_assets;
pub mod projects;
pub mod proration;
pub mod rent;
pub mod settings;
pub mod statistics;
pub mod utils;
pub mod virtual_assets;

// Re-export common types from the asset modules
pub use fixed_assets::*;
pub use virtual_assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
