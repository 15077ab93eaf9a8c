use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};
use crate::virtual_assets::{NewVirtualAsset, VirtualAsset, VirtualAssetUpdate};

use super::virtual_assets_traits::{VirtualAssetRepositoryTrait, VirtualAssetServiceTrait};

/// Service for virtual asset CRUD.
///
/// Validation happens here, before anything reaches the backend; business
/// errors coming back from the backend are passed through untouched.
pub struct VirtualAssetsService {
    repository: Arc<dyn VirtualAssetRepositoryTrait>,
}

impl VirtualAssetsService {
    pub fn new(repository: Arc<dyn VirtualAssetRepositoryTrait>) -> Self {
        VirtualAssetsService { repository }
    }

    fn validate(
        name: &str,
        total_amount: Decimal,
        start_date: chrono::NaiveDate,
        end_date: chrono::NaiveDate,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if total_amount < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Total amount must not be negative".to_string(),
            )
            .into());
        }
        if end_date < start_date {
            return Err(ValidationError::InvalidInput(
                "End date must not precede start date".to_string(),
            )
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl VirtualAssetServiceTrait for VirtualAssetsService {
    async fn get_virtual_assets(&self) -> Result<Vec<VirtualAsset>> {
        self.repository.list_virtual_assets().await
    }

    async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset> {
        self.repository.get_virtual_asset(asset_id).await
    }

    async fn create_virtual_asset(&self, new_asset: NewVirtualAsset) -> Result<VirtualAsset> {
        Self::validate(
            &new_asset.name,
            new_asset.total_amount,
            new_asset.start_date,
            new_asset.end_date,
        )?;
        debug!("Creating virtual asset '{}'", new_asset.name);
        self.repository.create_virtual_asset(new_asset).await
    }

    async fn update_virtual_asset(&self, update: VirtualAssetUpdate) -> Result<VirtualAsset> {
        Self::validate(
            &update.name,
            update.total_amount,
            update.start_date,
            update.end_date,
        )?;
        self.repository.update_virtual_asset(update).await
    }

    async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()> {
        debug!("Deleting virtual asset {}", asset_id);
        self.repository.delete_virtual_asset(asset_id).await
    }

    async fn get_expiring_assets(&self, within_days: i64) -> Result<Vec<VirtualAsset>> {
        self.repository.list_expiring(within_days).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::sync::RwLock;

    struct MockVirtualAssetRepository {
        assets: RwLock<Vec<VirtualAsset>>,
    }

    impl MockVirtualAssetRepository {
        fn new() -> Self {
            Self {
                assets: RwLock::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl VirtualAssetRepositoryTrait for MockVirtualAssetRepository {
        async fn list_virtual_assets(&self) -> Result<Vec<VirtualAsset>> {
            Ok(self.assets.read().unwrap().clone())
        }

        async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset> {
            self.assets
                .read()
                .unwrap()
                .iter()
                .find(|a| a.id == asset_id)
                .cloned()
                .ok_or_else(|| crate::errors::Error::Repository("not found".to_string()))
        }

        async fn create_virtual_asset(&self, new_asset: NewVirtualAsset) -> Result<VirtualAsset> {
            let asset = VirtualAsset {
                id: format!("va-{}", self.assets.read().unwrap().len() + 1),
                name: new_asset.name,
                category_id: new_asset.category_id,
                category_name: String::new(),
                total_amount: new_asset.total_amount,
                start_date: new_asset.start_date,
                end_date: new_asset.end_date,
                description: new_asset.description,
                account_username: new_asset.account_username,
                account_password: new_asset.account_password,
                created_at: None,
                updated_at: None,
            };
            self.assets.write().unwrap().push(asset.clone());
            Ok(asset)
        }

        async fn update_virtual_asset(&self, _: VirtualAssetUpdate) -> Result<VirtualAsset> {
            unimplemented!()
        }

        async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()> {
            self.assets.write().unwrap().retain(|a| a.id != asset_id);
            Ok(())
        }

        async fn list_expiring(&self, _: i64) -> Result<Vec<VirtualAsset>> {
            unimplemented!()
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn new_asset(name: &str) -> NewVirtualAsset {
        NewVirtualAsset {
            name: name.to_string(),
            category_id: "cat-1".to_string(),
            total_amount: dec!(365),
            start_date: d(2024, 1, 1),
            end_date: d(2024, 12, 31),
            description: None,
            account_username: None,
            account_password: None,
        }
    }

    #[tokio::test]
    async fn test_create_valid_asset() {
        let service = VirtualAssetsService::new(Arc::new(MockVirtualAssetRepository::new()));
        let created = service.create_virtual_asset(new_asset("Video")).await.unwrap();
        assert_eq!(created.name, "Video");
    }

    #[tokio::test]
    async fn test_create_rejects_blank_name() {
        let service = VirtualAssetsService::new(Arc::new(MockVirtualAssetRepository::new()));
        let result = service.create_virtual_asset(new_asset("  ")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_amount() {
        let service = VirtualAssetsService::new(Arc::new(MockVirtualAssetRepository::new()));
        let mut asset = new_asset("Video");
        asset.total_amount = dec!(-1);
        assert!(service.create_virtual_asset(asset).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_inverted_dates() {
        let service = VirtualAssetsService::new(Arc::new(MockVirtualAssetRepository::new()));
        let mut asset = new_asset("Video");
        asset.start_date = d(2024, 12, 31);
        asset.end_date = d(2024, 1, 1);
        assert!(service.create_virtual_asset(asset).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_asset() {
        let service = VirtualAssetsService::new(Arc::new(MockVirtualAssetRepository::new()));
        let created = service.create_virtual_asset(new_asset("Video")).await.unwrap();
        service.delete_virtual_asset(&created.id).await.unwrap();
        assert!(service.get_virtual_assets().await.unwrap().is_empty());
    }
}
