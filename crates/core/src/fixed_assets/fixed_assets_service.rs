use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use crate::constants::RENT_DUE_DAY_MAX;
use crate::errors::{Result, ValidationError};
use crate::fixed_assets::{FixedAsset, FixedAssetUpdate, NewFixedAsset};

use super::fixed_assets_traits::{FixedAssetRepositoryTrait, FixedAssetServiceTrait};

/// Service for fixed asset CRUD.
pub struct FixedAssetsService {
    repository: Arc<dyn FixedAssetRepositoryTrait>,
}

impl FixedAssetsService {
    pub fn new(repository: Arc<dyn FixedAssetRepositoryTrait>) -> Self {
        FixedAssetsService { repository }
    }

    fn validate(
        name: &str,
        original_value: Decimal,
        residual_rate: Decimal,
        useful_life_years: u32,
        rent_price: Option<Decimal>,
        rent_due_day: Option<u32>,
    ) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if original_value < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Original value must not be negative".to_string(),
            )
            .into());
        }
        if residual_rate < Decimal::ZERO || residual_rate > Decimal::ONE_HUNDRED {
            return Err(ValidationError::InvalidInput(
                "Residual rate must be between 0 and 100".to_string(),
            )
            .into());
        }
        if useful_life_years < 1 {
            return Err(ValidationError::InvalidInput(
                "Useful life must be at least 1 year".to_string(),
            )
            .into());
        }
        if let Some(price) = rent_price {
            if price < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(
                    "Rent price must not be negative".to_string(),
                )
                .into());
            }
        }
        if let Some(day) = rent_due_day {
            if day < 1 || day > RENT_DUE_DAY_MAX {
                return Err(ValidationError::InvalidInput(format!(
                    "Rent due day must be between 1 and {}",
                    RENT_DUE_DAY_MAX
                ))
                .into());
            }
        }
        Ok(())
    }
}

#[async_trait]
impl FixedAssetServiceTrait for FixedAssetsService {
    async fn get_fixed_assets(&self) -> Result<Vec<FixedAsset>> {
        self.repository.list_fixed_assets().await
    }

    async fn get_fixed_asset(&self, asset_id: &str) -> Result<FixedAsset> {
        self.repository.get_fixed_asset(asset_id).await
    }

    async fn create_fixed_asset(&self, new_asset: NewFixedAsset) -> Result<FixedAsset> {
        Self::validate(
            &new_asset.name,
            new_asset.original_value,
            new_asset.residual_rate,
            new_asset.useful_life_years,
            new_asset.rent_price,
            new_asset.rent_due_day,
        )?;
        debug!("Creating fixed asset '{}'", new_asset.name);
        self.repository.create_fixed_asset(new_asset).await
    }

    async fn update_fixed_asset(&self, update: FixedAssetUpdate) -> Result<FixedAsset> {
        Self::validate(
            &update.name,
            update.original_value,
            update.residual_rate,
            update.useful_life_years,
            update.rent_price,
            update.rent_due_day,
        )?;
        self.repository.update_fixed_asset(update).await
    }

    async fn delete_fixed_asset(&self, asset_id: &str) -> Result<()> {
        debug!("Deleting fixed asset {}", asset_id);
        self.repository.delete_fixed_asset(asset_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed_assets::{DepreciationMethod, FixedAssetStatus};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    struct MockFixedAssetRepository;

    #[async_trait]
    impl FixedAssetRepositoryTrait for MockFixedAssetRepository {
        async fn list_fixed_assets(&self) -> Result<Vec<FixedAsset>> {
            Ok(Vec::new())
        }
        async fn get_fixed_asset(&self, _: &str) -> Result<FixedAsset> {
            unimplemented!()
        }
        async fn create_fixed_asset(&self, new_asset: NewFixedAsset) -> Result<FixedAsset> {
            Ok(FixedAsset {
                id: "fa-1".to_string(),
                name: new_asset.name,
                category_id: new_asset.category_id,
                original_value: new_asset.original_value,
                residual_rate: new_asset.residual_rate,
                purchase_date: new_asset.purchase_date,
                useful_life_years: new_asset.useful_life_years,
                status: new_asset.status,
                ..Default::default()
            })
        }
        async fn update_fixed_asset(&self, _: FixedAssetUpdate) -> Result<FixedAsset> {
            unimplemented!()
        }
        async fn delete_fixed_asset(&self, _: &str) -> Result<()> {
            Ok(())
        }
    }

    fn new_asset() -> NewFixedAsset {
        NewFixedAsset {
            name: "Laptop".to_string(),
            category_id: "cat-9".to_string(),
            original_value: dec!(9000),
            residual_rate: dec!(5),
            purchase_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
            useful_life_years: 3,
            depreciation_start_date: None,
            depreciation_method: DepreciationMethod::StraightLine,
            status: FixedAssetStatus::InUse,
            disposed_date: None,
            rent_price: None,
            rent_deposit: None,
            rent_start_date: None,
            rent_end_date: None,
            rent_due_day: None,
            tenant_name: None,
            tenant_phone: None,
        }
    }

    fn service() -> FixedAssetsService {
        FixedAssetsService::new(Arc::new(MockFixedAssetRepository))
    }

    #[tokio::test]
    async fn test_create_valid_asset() {
        let created = service().create_fixed_asset(new_asset()).await.unwrap();
        assert_eq!(created.name, "Laptop");
    }

    #[tokio::test]
    async fn test_create_rejects_zero_useful_life() {
        let mut asset = new_asset();
        asset.useful_life_years = 0;
        assert!(service().create_fixed_asset(asset).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_residual_rate_above_100() {
        let mut asset = new_asset();
        asset.residual_rate = dec!(101);
        assert!(service().create_fixed_asset(asset).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_rent_due_day() {
        let mut asset = new_asset();
        asset.status = FixedAssetStatus::Rent;
        asset.rent_price = Some(dec!(1000));
        asset.rent_due_day = Some(29);
        assert!(service().create_fixed_asset(asset).await.is_err());

        let mut asset = new_asset();
        asset.rent_due_day = Some(0);
        assert!(service().create_fixed_asset(asset).await.is_err());
    }

    #[tokio::test]
    async fn test_create_rejects_negative_rent_price() {
        let mut asset = new_asset();
        asset.rent_price = Some(dec!(-5));
        assert!(service().create_fixed_asset(asset).await.is_err());
    }
}
