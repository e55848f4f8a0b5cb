//! Configuration module for finplan
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence (currency, scoring policy, projection defaults)

pub mod paths;
pub mod settings;

pub use paths::FinplanPaths;
pub use settings::{InvestmentDefaults, Settings};
