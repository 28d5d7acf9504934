//! Personal asset projection library
//!
//! This crate is the computation core of a personal finance tracker: it
//! projects total wealth (cash + equity holdings) forward in daily steps out
//! to a configurable age, reconstructs past balances from a transaction
//! ledger, and derives peak/goal analytics. It supports:
//! - Daily wealth series spanning reconstructed history and projected future
//! - Ledger replay onto category-addressed accounts
//! - Recurring budget rules with optional active windows
//! - Deterministic equity growth at a fixed annual rate
//! - Peak, age-at-peak, balance-at-target-age and goal-achievement metrics
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic scenario setup:
//!
//! ```ignore
//! use shisan_core::config::{BudgetRuleBuilder, ScenarioBuilder};
//! use shisan_core::{GoalConfig, analyze, project};
//!
//! let config = ScenarioBuilder::new()
//!     .birth_date(2000, 4, 2)
//!     .cash_account("普通預金", 1_000_000.0)
//!     .equity_account("投資信託", 500_000.0, 0.05)
//!     .budget(BudgetRuleBuilder::month(2025, 4)
//!         .income(300_000.0)
//!         .expense(200_000.0)
//!         .contribution("積立投資", 50_000.0))
//!     .build();
//!
//! let today = jiff::civil::date(2025, 4, 10);
//! let series = project(&config, today);
//! let summary = analyze(&series, today, &GoalConfig::standard(config.current_age(today)));
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod date_math;
pub mod error;
pub mod format;
pub mod growth;
pub mod ledger;
pub mod projection;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::{GoalConfig, WealthSummary, analyze};
pub use config::{BudgetRuleBuilder, ProjectionConfig, ScenarioBuilder};
pub use projection::project;
