//! UI components for the cash drawer counter. Every renderer is an `impl`
//! block on `CashDrawerApp`, so components share state without plumbing.

pub mod count_table;
pub mod header;
pub mod modals;
pub mod styling;
pub mod summary;

pub use modals::export_modal::ExportChoice;
