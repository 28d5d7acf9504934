//! Scenario configuration
//!
//! The main configuration type is `ProjectionConfig`, which carries
//! everything one projection run needs. The engine never consults a clock
//! and never mutates the config; after any edit the caller rebuilds the
//! series by calling the engine again.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to assemble scenarios, use the builder DSL:
//!
//! ```ignore
//! use shisan_core::config::{BudgetRuleBuilder, ScenarioBuilder};
//!
//! let config = ScenarioBuilder::new()
//!     .birth_date(2000, 4, 2)
//!     .anchor(2024, 10, 1)
//!
//!     // Current holdings
//!     .cash_account("普通預金", 1_000_000.0)
//!     .equity_account("投資信託", 500_000.0, 0.05)
//!
//!     // Recurring monthly plan
//!     .budget(BudgetRuleBuilder::month(2025, 4)
//!         .income(300_000.0)
//!         .expense(200_000.0)
//!         .contribution("積立投資", 50_000.0))
//!
//!     // Ledger history
//!     .income_on(2025, 3, 25, 300_000.0, "給料")
//!     .expense_on(2025, 4, 2, 12_800.0, "食費")
//!     .build();
//! ```

use jiff::civil::Date;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::model::{AccountId, AssetAccount, BudgetRule, Transaction, TransactionKind};

pub mod builder;

pub use builder::{BudgetRuleBuilder, ScenarioBuilder};

/// Terminal age bounding the projection horizon when none is configured.
pub const DEFAULT_LIMIT_AGE: u8 = 100;

fn default_limit_age() -> u8 {
    DEFAULT_LIMIT_AGE
}

/// Complete scenario configuration
///
/// One value of this type, plus an explicit "today", fully determines a
/// projection run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    // === Holdings ===
    /// Base accounts: balances as captured at the anchor date, before any
    /// ledger replay.
    #[serde(default)]
    pub accounts: Vec<AssetAccount>,

    // === Recurring plan ===
    #[serde(default)]
    pub budget_rules: Vec<BudgetRule>,

    // === History ===
    #[serde(default)]
    pub transactions: Vec<Transaction>,

    // === Profile ===
    /// Day the accounts were captured. Reconstruction for days before this
    /// reports the base balances unchanged.
    pub anchor_date: Option<Date>,

    /// Birth date, for the age-derived horizon and age analytics.
    pub birth_date: Option<Date>,

    /// Terminal age for the projection horizon.
    #[serde(default = "default_limit_age")]
    pub limit_age: u8,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            accounts: Vec::new(),
            budget_rules: Vec::new(),
            transactions: Vec::new(),
            anchor_date: None,
            birth_date: None,
            limit_age: default_limit_age(),
        }
    }
}

impl ProjectionConfig {
    /// Create a new empty configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Age in whole years as of `today`, or `None` without a birth date.
    ///
    /// Month/day aware: the year ticks over on the birthday itself, not on
    /// January 1st.
    #[must_use]
    pub fn current_age(&self, today: Date) -> Option<u8> {
        let birth = self.birth_date?;
        let years = today.year() - birth.year();

        if today.month() < birth.month()
            || (today.month() == birth.month() && today.day() < birth.day())
        {
            Some((years - 1) as u8)
        } else {
            Some(years as u8)
        }
    }

    /// Optional pre-flight check on the scenario's references and numbers.
    ///
    /// The compute path never runs this: a broken reference is skipped
    /// during replay and non-finite numbers flow through the totals.
    /// Callers accepting external payloads run it before computing.
    pub fn validate(&self) -> Result<()> {
        let known: FxHashSet<AccountId> = self.accounts.iter().map(|a| a.account_id).collect();

        for account in &self.accounts {
            if !account.balance.is_finite() {
                return Err(ValidationError::NonFiniteBalance(account.account_id));
            }
        }

        for transaction in &self.transactions {
            if !transaction.amount.is_finite() {
                return Err(ValidationError::NonFiniteAmount(transaction.transaction_id));
            }
            for account_id in [transaction.from_account, transaction.to_account]
                .into_iter()
                .flatten()
            {
                if !known.contains(&account_id) {
                    return Err(ValidationError::UnknownAccount {
                        transaction_id: transaction.transaction_id,
                        account_id,
                    });
                }
            }
            match transaction.kind {
                TransactionKind::Income => {
                    if transaction.to_account.is_none() {
                        return Err(ValidationError::MissingDestination(
                            transaction.transaction_id,
                        ));
                    }
                }
                TransactionKind::Expense => {
                    if transaction.from_account.is_none() {
                        return Err(ValidationError::MissingSource(transaction.transaction_id));
                    }
                }
                TransactionKind::EquityContribution => {
                    if transaction.from_account.is_none() {
                        return Err(ValidationError::MissingSource(transaction.transaction_id));
                    }
                    if transaction.to_account.is_none() {
                        return Err(ValidationError::MissingDestination(
                            transaction.transaction_id,
                        ));
                    }
                }
            }
        }

        for rule in &self.budget_rules {
            let finite = rule.income.is_finite()
                && rule.expense.is_finite()
                && rule.contributions.iter().all(|c| c.amount.is_finite());
            if !finite {
                return Err(ValidationError::NonFiniteRule(rule.rule_id));
            }
        }

        Ok(())
    }
}
