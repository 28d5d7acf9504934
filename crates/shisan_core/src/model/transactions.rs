//! Ledger transactions
//!
//! A transaction is one dated cash-flow entry. Amounts carry their sign as
//! stored by the application: income positive, expenses negative. Equity
//! contributions move `abs(amount)` between the cash and equity categories
//! regardless of the stored sign.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::ids::{AccountId, TransactionId};

/// What a transaction does when replayed onto a balance sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Credit to the cash account (stored amount positive).
    Income,
    /// Debit from the cash account (stored amount negative).
    Expense,
    /// Transfer from the cash account into the equity account.
    EquityContribution,
}

/// One dated entry in the transaction ledger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: TransactionId,
    pub date: Date,
    /// Signed amount: positive credit, negative debit.
    pub amount: f64,
    pub memo: String,
    pub kind: TransactionKind,
    /// Source account. Expected for `Expense` and `EquityContribution`.
    pub from_account: Option<AccountId>,
    /// Destination account. Expected for `Income` and `EquityContribution`.
    pub to_account: Option<AccountId>,
}

impl Transaction {
    /// Whether this entry is dated on or before `day`.
    #[must_use]
    #[inline]
    pub fn on_or_before(&self, day: Date) -> bool {
        self.date <= day
    }
}
