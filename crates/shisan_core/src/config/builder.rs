//! Scenario Builder
//!
//! The ScenarioBuilder provides a fluent API for assembling scenarios with
//! automatic ID assignment and name-based account wiring, shaped like the
//! flows the surrounding application drives (onboarding, budget screen,
//! ledger entry form).
//!
//! # Example
//!
//! ```ignore
//! use shisan_core::config::{BudgetRuleBuilder, ScenarioBuilder};
//!
//! let config = ScenarioBuilder::new()
//!     .birth_date(2000, 4, 2)
//!     .cash_account("普通預金", 1_000_000.0)
//!     .equity_account("投資信託", 500_000.0, 0.05)
//!     .budget(BudgetRuleBuilder::month(2025, 4)
//!         .income(300_000.0)
//!         .expense(200_000.0)
//!         .contribution("積立投資", 50_000.0))
//!     .income_on(2025, 3, 25, 300_000.0, "給料")
//!     .build();
//! ```

use jiff::civil::Date;
use rustc_hash::FxHashMap;

use super::ProjectionConfig;
use crate::model::{
    AccountId, AssetAccount, AssetKind, BudgetRule, ContributionRule, DateWindow, MonthKey,
    RuleId, Transaction, TransactionId, TransactionKind,
};

/// Builder for assembling a scenario with automatic ID assignment
pub struct ScenarioBuilder {
    config: ProjectionConfig,
    account_names: FxHashMap<String, AccountId>,
    pending_entries: Vec<PendingEntry>,
    next_account_id: u16,
    next_rule_id: u16,
    next_transaction_id: u32,
}

/// Ledger entry waiting for account wiring (resolved during build)
#[derive(Debug, Clone)]
struct PendingEntry {
    date: Date,
    amount: f64,
    memo: String,
    kind: TransactionKind,
    from_name: Option<String>,
    to_name: Option<String>,
}

fn resolve(
    names: &FxHashMap<String, AccountId>,
    name: Option<&str>,
    fallback: Option<AccountId>,
) -> Option<AccountId> {
    match name {
        Some(n) => names.get(n).copied(),
        None => fallback,
    }
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Create a new scenario builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
            account_names: FxHashMap::default(),
            pending_entries: Vec::new(),
            next_account_id: 0,
            next_rule_id: 0,
            next_transaction_id: 0,
        }
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Set the birth date
    #[must_use]
    pub fn birth_date(mut self, year: i16, month: i8, day: i8) -> Self {
        self.config.birth_date = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Set the anchor date (the day the accounts were captured)
    #[must_use]
    pub fn anchor(mut self, year: i16, month: i8, day: i8) -> Self {
        self.config.anchor_date = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Set the terminal age bounding the projection horizon
    #[must_use]
    pub fn limit_age(mut self, age: u8) -> Self {
        self.config.limit_age = age;
        self
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Add a cash account with its captured balance
    #[must_use]
    pub fn cash_account(mut self, name: impl Into<String>, balance: f64) -> Self {
        let name = name.into();
        let account_id = AccountId(self.next_account_id);
        self.next_account_id += 1;

        self.account_names.insert(name.clone(), account_id);
        self.config
            .accounts
            .push(AssetAccount::cash(account_id, name, balance));
        self
    }

    /// Add an equity account with its captured balance and annual rate
    #[must_use]
    pub fn equity_account(
        mut self,
        name: impl Into<String>,
        balance: f64,
        annual_return: f64,
    ) -> Self {
        let name = name.into();
        let account_id = AccountId(self.next_account_id);
        self.next_account_id += 1;

        self.account_names.insert(name.clone(), account_id);
        self.config
            .accounts
            .push(AssetAccount::equity(account_id, name, balance, annual_return));
        self
    }

    // =========================================================================
    // Budget rules
    // =========================================================================

    /// Add a recurring budget rule
    #[must_use]
    pub fn budget(mut self, builder: BudgetRuleBuilder) -> Self {
        let rule_id = RuleId(self.next_rule_id);
        self.next_rule_id += 1;

        self.config.budget_rules.push(builder.build(rule_id));
        self
    }

    // =========================================================================
    // Ledger entries
    // =========================================================================
    //
    // Amounts are magnitudes: the entry kind carries the sign, and expense
    // entries are stored negated. Unnamed entries are wired to the first
    // account of the matching category during build; named entries that do
    // not resolve are left unwired, which the replay then skips.

    /// Record an income entry, wired to the first cash account
    #[must_use]
    pub fn income_on(
        mut self,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::Income,
            from_name: None,
            to_name: None,
        });
        self
    }

    /// Record an income entry into a named account
    #[must_use]
    pub fn income_to(
        mut self,
        account: impl Into<String>,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::Income,
            from_name: None,
            to_name: Some(account.into()),
        });
        self
    }

    /// Record an expense entry, wired to the first cash account
    #[must_use]
    pub fn expense_on(
        mut self,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: -amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::Expense,
            from_name: None,
            to_name: None,
        });
        self
    }

    /// Record an expense entry from a named account
    #[must_use]
    pub fn expense_from(
        mut self,
        account: impl Into<String>,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: -amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::Expense,
            from_name: Some(account.into()),
            to_name: None,
        });
        self
    }

    /// Record a contribution from the first cash account into the first
    /// equity account
    #[must_use]
    pub fn contribution_on(
        mut self,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::EquityContribution,
            from_name: None,
            to_name: None,
        });
        self
    }

    /// Record a contribution between two named accounts
    #[must_use]
    pub fn contribution_via(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        year: i16,
        month: i8,
        day: i8,
        amount: f64,
        memo: impl Into<String>,
    ) -> Self {
        self.pending_entries.push(PendingEntry {
            date: jiff::civil::date(year, month, day),
            amount: amount.abs(),
            memo: memo.into(),
            kind: TransactionKind::EquityContribution,
            from_name: Some(from.into()),
            to_name: Some(to.into()),
        });
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Build the scenario configuration
    ///
    /// Resolves account wiring for every pending ledger entry. Never fails:
    /// unresolvable names are left unwired.
    #[must_use]
    pub fn build(mut self) -> ProjectionConfig {
        let first_cash = self
            .config
            .accounts
            .iter()
            .find(|a| a.is_kind(AssetKind::Cash))
            .map(|a| a.account_id);
        let first_equity = self
            .config
            .accounts
            .iter()
            .find(|a| a.is_kind(AssetKind::Equity))
            .map(|a| a.account_id);

        // Drain entries first to avoid borrow issues
        let pending: Vec<PendingEntry> = self.pending_entries.drain(..).collect();
        for entry in pending {
            let transaction_id = TransactionId(self.next_transaction_id);
            self.next_transaction_id += 1;

            let (from_account, to_account) = match entry.kind {
                TransactionKind::Income => (
                    None,
                    resolve(&self.account_names, entry.to_name.as_deref(), first_cash),
                ),
                TransactionKind::Expense => (
                    resolve(&self.account_names, entry.from_name.as_deref(), first_cash),
                    None,
                ),
                TransactionKind::EquityContribution => (
                    resolve(&self.account_names, entry.from_name.as_deref(), first_cash),
                    resolve(&self.account_names, entry.to_name.as_deref(), first_equity),
                ),
            };

            self.config.transactions.push(Transaction {
                transaction_id,
                date: entry.date,
                amount: entry.amount,
                memo: entry.memo,
                kind: entry.kind,
                from_account,
                to_account,
            });
        }

        self.config
    }
}

/// Builder for one recurring budget rule
#[derive(Debug, Clone)]
pub struct BudgetRuleBuilder {
    month: MonthKey,
    income: f64,
    expense: f64,
    contributions: Vec<ContributionRule>,
    window: DateWindow,
}

impl BudgetRuleBuilder {
    /// New rule keyed to one effective calendar month, unbounded window
    #[must_use]
    pub fn month(year: i16, month: i8) -> Self {
        Self {
            month: MonthKey::new(year, month),
            income: 0.0,
            expense: 0.0,
            contributions: Vec::new(),
            window: DateWindow::unbounded(),
        }
    }

    /// Monthly income
    #[must_use]
    pub fn income(mut self, amount: f64) -> Self {
        self.income = amount;
        self
    }

    /// Monthly expense, as a magnitude
    #[must_use]
    pub fn expense(mut self, amount: f64) -> Self {
        self.expense = amount;
        self
    }

    /// Add a recurring contribution with no window of its own
    #[must_use]
    pub fn contribution(mut self, name: impl Into<String>, amount: f64) -> Self {
        self.contributions.push(ContributionRule {
            name: name.into(),
            amount,
            window: DateWindow::unbounded(),
        });
        self
    }

    /// Add a recurring contribution active only inside `window`
    #[must_use]
    pub fn contribution_within(
        mut self,
        name: impl Into<String>,
        amount: f64,
        window: DateWindow,
    ) -> Self {
        self.contributions.push(ContributionRule {
            name: name.into(),
            amount,
            window,
        });
        self
    }

    /// Rule takes effect on this day (inclusive)
    #[must_use]
    pub fn starting(mut self, year: i16, month: i8, day: i8) -> Self {
        self.window.start = Some(jiff::civil::date(year, month, day));
        self
    }

    /// Rule stops applying from this day (exclusive)
    #[must_use]
    pub fn ending(mut self, year: i16, month: i8, day: i8) -> Self {
        self.window.end = Some(jiff::civil::date(year, month, day));
        self
    }

    fn build(self, rule_id: RuleId) -> BudgetRule {
        BudgetRule {
            rule_id,
            month: self.month,
            income: self.income,
            expense: self.expense,
            contributions: self.contributions,
            window: self.window,
        }
    }
}
