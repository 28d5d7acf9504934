//! Peak and goal analytics over a computed wealth series.
//!
//! This module answers the summary questions the projection alone does
//! not: when does total wealth peak, how old is the user then, what is the
//! balance around a target age, and when is a target amount first reached.
//!
//! ```ignore
//! use shisan_core::analysis::{GoalConfig, analyze};
//!
//! let series = shisan_core::project(&config, today);
//! let summary = analyze(&series, today, &GoalConfig::standard(config.current_age(today)));
//!
//! if let Some(day) = summary.peak_day {
//!     println!("peak {} on {}", summary.peak_total, day);
//! }
//! ```
//!
//! Every scan is chronological and ties resolve to the earliest day. The
//! series is consumed read-only; callers re-run the analysis after any
//! recomputation of the series.

mod config;
mod evaluator;
mod metrics;

pub use config::*;
pub use evaluator::*;
pub use metrics::*;
