//! Currency display helpers.
//!
//! Japanese denomination buckets for summary readouts. Lossy by design:
//! values are rounded into the largest bucket they clear and cannot be
//! recovered from the string.

/// Format an amount into the largest denomination bucket it clears.
///
/// ≥10^8 → `億円`, ≥10^4 → `万円`, ≥10^3 → `千円`, else `円`, rounding half
/// away from zero inside the bucket. Negative amounts fall through to the
/// unit bucket with their sign.
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount >= 100_000_000.0 {
        format!("{}億円", (amount / 100_000_000.0).round())
    } else if amount >= 10_000.0 {
        format!("{}万円", (amount / 10_000.0).round())
    } else if amount >= 1_000.0 {
        format!("{}千円", (amount / 1_000.0).round())
    } else {
        format!("{}円", amount.round())
    }
}
