use crate::errors::Result;
use crate::fixed_assets::{FixedAsset, FixedAssetUpdate, NewFixedAsset};
use async_trait::async_trait;

/// Trait for fixed asset repository operations.
#[async_trait]
pub trait FixedAssetRepositoryTrait: Send + Sync {
    async fn list_fixed_assets(&self) -> Result<Vec<FixedAsset>>;
    async fn get_fixed_asset(&self, asset_id: &str) -> Result<FixedAsset>;
    async fn create_fixed_asset(&self, new_asset: NewFixedAsset) -> Result<FixedAsset>;
    async fn update_fixed_asset(&self, update: FixedAssetUpdate) -> Result<FixedAsset>;
    async fn delete_fixed_asset(&self, asset_id: &str) -> Result<()>;
}

/// Trait for fixed asset service operations.
#[async_trait]
pub trait FixedAssetServiceTrait: Send + Sync {
    async fn get_fixed_assets(&self) -> Result<Vec<FixedAsset>>;
    async fn get_fixed_asset(&self, asset_id: &str) -> Result<FixedAsset>;
    async fn create_fixed_asset(&self, new_asset: NewFixedAsset) -> Result<FixedAsset>;
    async fn update_fixed_asset(&self, update: FixedAssetUpdate) -> Result<FixedAsset>;
    async fn delete_fixed_asset(&self, asset_id: &str) -> Result<()>;
}
