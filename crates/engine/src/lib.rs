pub use budget::{BudgetStatus, evaluate};
pub use deletion::{DeletionState, DeletionWorkflow};
pub use expense::{Expense, ExpenseSnapshot, ExpenseViews};
pub use pagination::Pagination;
pub use summary::{CategorySummary, summarize};

mod budget;
mod deletion;
mod expense;
mod pagination;
mod summary;
