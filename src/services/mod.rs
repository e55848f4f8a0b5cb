//! Service layer for finplan
//!
//! The service layer provides business logic on top of a record store,
//! handling validation and the load -> change -> save cycle. Services never
//! see file paths; the store is injected.

pub mod budget;
pub mod history;

pub use budget::BudgetService;
pub use history::HistoryService;
