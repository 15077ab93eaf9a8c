use crate::errors::Result;
use crate::expenses::{Expense, NewExpense};
use async_trait::async_trait;

/// Trait for expense repository operations. Expenses are nested under
/// their owning asset.
#[async_trait]
pub trait ExpenseRepositoryTrait: Send + Sync {
    async fn list_expenses(&self, asset_id: &str) -> Result<Vec<Expense>>;
    async fn create_expense(&self, asset_id: &str, new_expense: NewExpense) -> Result<Expense>;
    async fn delete_expense(&self, asset_id: &str, expense_id: &str) -> Result<()>;
}
