//! Transaction ledger replay.
//!
//! Historical balances are never stored. Any past day's balance sheet is
//! reconstructed by copying the base accounts and replaying every ledger
//! entry dated on or before that day, in input order. The replay is a pure
//! function of its inputs; mutating or deleting an entry means recomputing
//! every derived series from scratch.

use jiff::civil::Date;

use crate::model::{AssetAccount, AssetKind, Transaction, TransactionKind};

/// A point-in-time copy of the scenario's accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceSheet {
    pub accounts: Vec<AssetAccount>,
}

impl BalanceSheet {
    /// Deep copy of the base accounts, before any replay.
    #[must_use]
    pub fn of(base: &[AssetAccount]) -> Self {
        Self {
            accounts: base.to_vec(),
        }
    }

    /// First account of `kind` in list order.
    #[must_use]
    pub fn first(&self, kind: AssetKind) -> Option<&AssetAccount> {
        self.accounts.iter().find(|a| a.is_kind(kind))
    }

    fn first_mut(&mut self, kind: AssetKind) -> Option<&mut AssetAccount> {
        self.accounts.iter_mut().find(|a| a.is_kind(kind))
    }

    /// Sum over every account.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Sum over every account of one category.
    #[must_use]
    pub fn kind_total(&self, kind: AssetKind) -> f64 {
        self.accounts
            .iter()
            .filter(|a| a.is_kind(kind))
            .map(|a| a.balance)
            .sum()
    }

    /// Apply one ledger entry to the sheet.
    ///
    /// A contribution moves `abs(amount)` from the first cash account into
    /// the first equity account, and is skipped unless both categories are
    /// present. Income and expense add their stored signed amount to the
    /// first cash account, and are skipped without one.
    pub fn apply(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionKind::EquityContribution => {
                let cash = self
                    .accounts
                    .iter()
                    .position(|a| a.is_kind(AssetKind::Cash));
                let equity = self
                    .accounts
                    .iter()
                    .position(|a| a.is_kind(AssetKind::Equity));
                if let (Some(c), Some(e)) = (cash, equity) {
                    let moved = transaction.amount.abs();
                    self.accounts[c].balance -= moved;
                    self.accounts[e].balance += moved;
                }
            }
            TransactionKind::Income | TransactionKind::Expense => {
                if let Some(cash) = self.first_mut(AssetKind::Cash) {
                    cash.balance += transaction.amount;
                }
            }
        }
    }
}

/// Reconstruct the balance sheet as of the end of `day`.
///
/// Filters entries with `date <= day`, preserving input order, and replays
/// them onto a fresh copy of `base`. Future-dated entries never apply.
#[must_use]
pub fn snapshot_as_of(
    base: &[AssetAccount],
    transactions: &[Transaction],
    day: Date,
) -> BalanceSheet {
    let mut sheet = BalanceSheet::of(base);
    for transaction in transactions.iter().filter(|t| t.on_or_before(day)) {
        sheet.apply(transaction);
    }
    sheet
}
