//! Virtual assets (time-limited subscriptions/memberships) - domain models,
//! services, and traits.

mod virtual_assets_model;
mod virtual_assets_service;
mod virtual_assets_traits;

pub use virtual_assets_model::{
    NewVirtualAsset, VirtualAsset, VirtualAssetStatus, VirtualAssetUpdate,
};
pub use virtual_assets_service::VirtualAssetsService;
pub use virtual_assets_traits::{VirtualAssetRepositoryTrait, VirtualAssetServiceTrait};
