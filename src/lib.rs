//! finplan - Terminal personal-finance planner
//!
//! This library provides the core functionality for the finplan application:
//! a monthly budget of net income and fixed expenses, a health score derived
//! from it, compound-growth projections for monthly investments and a
//! month-by-month history of the surplus.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `analysis`: Pure computations (ratios, health score, projections, trends)
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, periods, budget, history entries)
//! - `storage`: Record stores (JSON files, in-memory)
//! - `services`: Business logic over an injected store
//! - `reports`: Terminal reports
//! - `display`: Formatting helpers and tables
//! - `export`: CSV export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finplan::config::{paths::FinplanPaths, settings::Settings};
//! use finplan::storage::JsonFileStore;
//! use finplan::services::BudgetService;
//!
//! let paths = FinplanPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = JsonFileStore::new(&paths);
//! let health = BudgetService::new(&store).health(&settings.scoring);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinplanError, FinplanResult};
