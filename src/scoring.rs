//! Score formula with multiplier and optional flat bonus.

/// Returns `seed * multiplier`, plus `bonus` when the bonus counts.
///
/// A bonus counts only when present, non-zero and not NaN; `Some(0.0)` and
/// `Some(f64::NAN)` behave exactly like `None`.
pub fn calculate_fs(seed: f64, multiplier: f64, bonus: Option<f64>) -> f64 {
    let base = seed * multiplier;
    match bonus {
        Some(bonus) if bonus != 0.0 && !bonus.is_nan() => base + bonus,
        _ => base,
    }
}
