mod accounts;
mod budget;
mod ids;
mod series;
mod transactions;

pub use accounts::{AssetAccount, AssetKind};
pub use budget::{BudgetRule, ContributionRule, DateWindow, MonthKey};
pub use ids::{AccountId, RuleId, TransactionId};
pub use series::{CalendarSeries, DaySnapshot};
pub use transactions::{Transaction, TransactionKind};
