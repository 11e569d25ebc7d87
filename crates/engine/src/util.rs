//! Internal helpers shared by the ledger operations.

/// Round a money figure to 2 decimals.
///
/// Rounds the exact binary value of `value`, ties to even. `100.005_f64` is
/// stored slightly below the midpoint so it becomes `100.0`, while the sum
/// `100.004 + 0.001` lands slightly above it and becomes `100.01`.
pub(crate) fn round_money(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
