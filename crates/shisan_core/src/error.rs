use std::fmt;

use crate::model::{AccountId, RuleId, TransactionId};

/// Errors reported by the optional scenario pre-flight check.
///
/// The replay and projection paths never raise these: a broken reference is
/// silently skipped and a non-finite number propagates through the totals.
/// Callers that want to reject bad input up front run
/// `ProjectionConfig::validate` before computing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A transaction references an account id not present in the scenario
    UnknownAccount {
        transaction_id: TransactionId,
        account_id: AccountId,
    },
    /// An expense or contribution has no source account set
    MissingSource(TransactionId),
    /// An income or contribution has no destination account set
    MissingDestination(TransactionId),
    NonFiniteAmount(TransactionId),
    NonFiniteBalance(AccountId),
    NonFiniteRule(RuleId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownAccount {
                transaction_id,
                account_id,
            } => {
                write!(
                    f,
                    "transaction {transaction_id:?} references unknown account {account_id:?}"
                )
            }
            ValidationError::MissingSource(id) => {
                write!(f, "transaction {id:?} requires a source account")
            }
            ValidationError::MissingDestination(id) => {
                write!(f, "transaction {id:?} requires a destination account")
            }
            ValidationError::NonFiniteAmount(id) => {
                write!(f, "transaction {id:?} has a non-finite amount")
            }
            ValidationError::NonFiniteBalance(id) => {
                write!(f, "account {id:?} has a non-finite balance")
            }
            ValidationError::NonFiniteRule(id) => {
                write!(f, "budget rule {id:?} has a non-finite amount")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
