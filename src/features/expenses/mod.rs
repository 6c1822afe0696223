pub mod types;

pub use types::Expense;
