//! Projects - domain models and traits.

mod projects_model;
mod projects_traits;

pub use projects_model::{NewProject, Project};
pub use projects_traits::ProjectRepositoryTrait;
