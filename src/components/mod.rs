//! UI Components
//!
//! Reusable Leptos components.

mod expense_form;
mod expense_list;

pub use expense_form::ExpenseForm;
pub use expense_list::ExpenseList;
