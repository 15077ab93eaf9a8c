use crate::categories::{Category, CategoryKind};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for category repository operations.
#[async_trait]
pub trait CategoryRepositoryTrait: Send + Sync {
    async fn list_categories(&self, kind: CategoryKind) -> Result<Vec<Category>>;
    async fn create_category(&self, name: &str, icon: Option<&str>, kind: CategoryKind)
        -> Result<Category>;
    async fn delete_category(&self, category_id: &str) -> Result<()>;
}
