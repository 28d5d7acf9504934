//! Integration tests for the asset projection engine
//!
//! Tests are organized by topic:
//! - `ledger` - Transaction replay and balance reconstruction
//! - `projection` - Day-indexed wealth series and window derivation
//! - `analysis` - Peak, age, and goal analytics
//! - `builder_dsl` - Builder DSL for fluent scenario setup
//! - `scenario_io` - Serde payloads and scenario validation

mod projection;
