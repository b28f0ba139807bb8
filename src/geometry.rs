//! Distance between two points on the canvas.

use crate::{GameUtilError, GameUtilResult};

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// Note the argument order: both x coordinates come first. Non-finite input
/// propagates (NaN in, NaN out); use [`checked_vector_distance`] to reject it.
pub fn calc_vector_distance(x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    (x1 - x2).hypot(y1 - y2)
}

/// Like [`calc_vector_distance`], but fails with `InvalidInput` when any
/// coordinate is NaN or infinite.
pub fn checked_vector_distance(x1: f64, x2: f64, y1: f64, y2: f64) -> GameUtilResult<f64> {
    for (name, value) in [("x1", x1), ("x2", x2), ("y1", y1), ("y2", y2)] {
        if !value.is_finite() {
            return Err(GameUtilError::InvalidInput(format!(
                "{name} must be a finite number, got {value}"
            )));
        }
    }
    Ok(calc_vector_distance(x1, x2, y1, y2))
}
