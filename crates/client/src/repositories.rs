//! Core repository traits implemented over the REST API.
//!
//! Thin adapters: every method maps one-to-one onto an [`ApiClient`]
//! endpoint. Services in `timevalue-core` depend only on the traits, so
//! they never see HTTP.

use std::sync::Arc;

use async_trait::async_trait;

use timevalue_core::categories::{Category, CategoryKind, CategoryRepositoryTrait};
use timevalue_core::errors::Result;
use timevalue_core::expenses::{Expense, ExpenseRepositoryTrait, NewExpense};
use timevalue_core::fixed_assets::{
    FixedAsset, FixedAssetRepositoryTrait, FixedAssetUpdate, NewFixedAsset,
};
use timevalue_core::projects::{NewProject, Project, ProjectRepositoryTrait};
use timevalue_core::settings::{NotificationSettings, Preferences, SettingsRepositoryTrait};
use timevalue_core::virtual_assets::{
    NewVirtualAsset, VirtualAsset, VirtualAssetRepositoryTrait, VirtualAssetUpdate,
};

use crate::client::ApiClient;

/// REST-backed virtual asset repository.
pub struct ApiVirtualAssetRepository {
    client: Arc<ApiClient>,
}

impl ApiVirtualAssetRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VirtualAssetRepositoryTrait for ApiVirtualAssetRepository {
    async fn list_virtual_assets(&self) -> Result<Vec<VirtualAsset>> {
        self.client.list_virtual_assets().await
    }

    async fn get_virtual_asset(&self, asset_id: &str) -> Result<VirtualAsset> {
        self.client.get_virtual_asset(asset_id).await
    }

    async fn create_virtual_asset(&self, new_asset: NewVirtualAsset) -> Result<VirtualAsset> {
        self.client.create_virtual_asset(&new_asset).await
    }

    async fn update_virtual_asset(&self, update: VirtualAssetUpdate) -> Result<VirtualAsset> {
        self.client.update_virtual_asset(&update).await
    }

    async fn delete_virtual_asset(&self, asset_id: &str) -> Result<()> {
        self.client.delete_virtual_asset(asset_id).await
    }

    async fn list_expiring(&self, within_days: i64) -> Result<Vec<VirtualAsset>> {
        self.client.list_expiring_assets(within_days).await
    }
}

/// REST-backed fixed asset repository.
pub struct ApiFixedAssetRepository {
    client: Arc<ApiClient>,
}

impl ApiFixedAssetRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl FixedAssetRepositoryTrait for ApiFixedAssetRepository {
    async fn list_fixed_assets(&self) -> Result<Vec<FixedAsset>> {
        self.client.list_fixed_assets().await
    }

    async fn get_fixed_asset(&self, asset_id: &str) -> Result<FixedAsset> {
        self.client.get_fixed_asset(asset_id).await
    }

    async fn create_fixed_asset(&self, new_asset: NewFixedAsset) -> Result<FixedAsset> {
        self.client.create_fixed_asset(&new_asset).await
    }

    async fn update_fixed_asset(&self, update: FixedAssetUpdate) -> Result<FixedAsset> {
        self.client.update_fixed_asset(&update).await
    }

    async fn delete_fixed_asset(&self, asset_id: &str) -> Result<()> {
        self.client.delete_fixed_asset(asset_id).await
    }
}

/// REST-backed category repository.
pub struct ApiCategoryRepository {
    client: Arc<ApiClient>,
}

impl ApiCategoryRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for ApiCategoryRepository {
    async fn list_categories(&self, kind: CategoryKind) -> Result<Vec<Category>> {
        self.client.list_categories(kind).await
    }

    async fn create_category(
        &self,
        name: &str,
        icon: Option<&str>,
        kind: CategoryKind,
    ) -> Result<Category> {
        self.client.create_category(name, icon, kind).await
    }

    async fn delete_category(&self, category_id: &str) -> Result<()> {
        self.client.delete_category(category_id).await
    }
}

/// REST-backed project repository.
pub struct ApiProjectRepository {
    client: Arc<ApiClient>,
}

impl ApiProjectRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProjectRepositoryTrait for ApiProjectRepository {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        self.client.list_projects().await
    }

    async fn create_project(&self, new_project: NewProject) -> Result<Project> {
        self.client.create_project(&new_project).await
    }

    async fn delete_project(&self, project_id: &str) -> Result<()> {
        self.client.delete_project(project_id).await
    }
}

/// REST-backed expense repository.
pub struct ApiExpenseRepository {
    client: Arc<ApiClient>,
}

impl ApiExpenseRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExpenseRepositoryTrait for ApiExpenseRepository {
    async fn list_expenses(&self, asset_id: &str) -> Result<Vec<Expense>> {
        self.client.list_expenses(asset_id).await
    }

    async fn create_expense(&self, asset_id: &str, new_expense: NewExpense) -> Result<Expense> {
        self.client.create_expense(asset_id, &new_expense).await
    }

    async fn delete_expense(&self, asset_id: &str, expense_id: &str) -> Result<()> {
        self.client.delete_expense(asset_id, expense_id).await
    }
}

/// REST-backed settings repository.
pub struct ApiSettingsRepository {
    client: Arc<ApiClient>,
}

impl ApiSettingsRepository {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SettingsRepositoryTrait for ApiSettingsRepository {
    async fn get_notification_settings(&self) -> Result<NotificationSettings> {
        self.client.get_notification_settings().await
    }

    async fn update_notification_settings(
        &self,
        settings: &NotificationSettings,
    ) -> Result<NotificationSettings> {
        self.client.update_notification_settings(settings).await
    }

    async fn get_preferences(&self) -> Result<Preferences> {
        self.client.get_preferences().await
    }

    async fn update_preferences(&self, preferences: &Preferences) -> Result<Preferences> {
        self.client.update_preferences(preferences).await
    }
}
