//! Asset account definitions
//!
//! An account is one bucket of wealth: either liquid cash or an equity
//! holding with an optional annual growth rate. The projection engine
//! addresses accounts by category, not identity: where a single "cash" or
//! "equity" balance is needed, the first account of that category in list
//! order is used. Totals sum over every account of a category.

use serde::{Deserialize, Serialize};

use super::ids::AccountId;

/// Category of an asset account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Liquid cash: bank balance, wallet. Never grows on its own.
    Cash,
    /// Equity holding: funds, stock. Grows at `annual_return` when set.
    Equity,
}

/// One asset account with its current balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAccount {
    pub account_id: AccountId,
    pub name: String,
    pub kind: AssetKind,
    /// Balance in the scenario's single currency unit (yen in the
    /// shipping application).
    pub balance: f64,
    /// Annual nominal growth rate as a fraction (0.05 = 5%). Only
    /// meaningful for [`AssetKind::Equity`]; ignored for cash.
    pub annual_return: Option<f64>,
}

impl AssetAccount {
    /// New cash account with no growth rate.
    #[must_use]
    pub fn cash(account_id: AccountId, name: impl Into<String>, balance: f64) -> Self {
        Self {
            account_id,
            name: name.into(),
            kind: AssetKind::Cash,
            balance,
            annual_return: None,
        }
    }

    /// New equity account with an annual growth rate.
    #[must_use]
    pub fn equity(
        account_id: AccountId,
        name: impl Into<String>,
        balance: f64,
        annual_return: f64,
    ) -> Self {
        Self {
            account_id,
            name: name.into(),
            kind: AssetKind::Equity,
            balance,
            annual_return: Some(annual_return),
        }
    }

    #[must_use]
    #[inline]
    pub fn is_kind(&self, kind: AssetKind) -> bool {
        self.kind == kind
    }
}
