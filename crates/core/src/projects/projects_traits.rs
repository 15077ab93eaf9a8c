use crate::errors::Result;
use crate::projects::{NewProject, Project};
use async_trait::async_trait;

/// Trait for project repository operations.
#[async_trait]
pub trait ProjectRepositoryTrait: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;
    async fn create_project(&self, new_project: NewProject) -> Result<Project>;
    async fn delete_project(&self, project_id: &str) -> Result<()>;
}
