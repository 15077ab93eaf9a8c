//! Fixed assets (depreciable physical property) - domain models, services,
//! and traits.

mod fixed_assets_model;
#[cfg(test)]
mod fixed_assets_model_tests;
mod fixed_assets_service;
mod fixed_assets_traits;

pub use fixed_assets_model::{
    DepreciationMethod, FixedAsset, FixedAssetStatus, FixedAssetUpdate, NewFixedAsset,
};
pub use fixed_assets_service::FixedAssetsService;
pub use fixed_assets_traits::{FixedAssetRepositoryTrait, FixedAssetServiceTrait};
