//! Per-asset expenses - domain models and traits.

mod expenses_model;
mod expenses_traits;

pub use expenses_model::{Expense, NewExpense};
pub use expenses_traits::ExpenseRepositoryTrait;
