use crate::errors::Result;
use crate::virtual_assets::{NewVirtualAsset, VirtualAsset, VirtualAssetUpdate};
use async_trait::async_trait;

/// Trait for virtual asset repository operations.
///
/// Implemented by the client crate against the REST backend; the backend
/// owns persistence and identity.
#[async_trait]
pub trait VirtualAssetRepositoryTrait: Send + Sync {
    async fn list_virtual_assets(&self) -> Result<Vec<VirtualAsset>>;
    async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset>;
    async fn create_virtual_asset(&self, new_asset: NewVirtualAsset) -> Result<VirtualAsset>;
    async fn update_virtual_asset(&self, update: VirtualAssetUpdate) -> Result<VirtualAsset>;
    async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()>;
    /// Assets whose end date falls within the next `within_days` days.
    async fn list_expiring(&self, within_days: i64) -> Result<Vec<VirtualAsset>>;
}

/// Trait for virtual asset service operations.
#[async_trait]
pub trait VirtualAssetServiceTrait: Send + Sync {
    async fn get_virtual_assets(&self) -> Result<Vec<VirtualAsset>>;
    async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset>;
    async fn create_virtual_asset(&self, new_asset: NewVirtualAsset) -> Result<VirtualAsset>;
    async fn update_virtual_asset(&self, update: VirtualAssetUpdate) -> Result<VirtualAsset>;
    async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()>;
    async fn get_expiring_assets(&self, within_days: i64) -> Result<Vec<VirtualAsset>>;
}
