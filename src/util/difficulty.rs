/// Map a difficulty value in `0..=10` onto the three-point curve
/// `min` (0) / `mid` (5) / `max` (10).
///
/// Values outside of the range are extrapolated.
///
/// The difficulty is truncated to `f32` first so that results match the
/// single-precision reference client down to the last digits.
pub fn difficulty_range(difficulty: f64, min: f64, mid: f64, max: f64) -> f64 {
    let difficulty = f64::from(difficulty as f32);

    if difficulty > 5.0 {
        mid + (max - mid) * (difficulty - 5.0) / 5.0
    } else if difficulty < 5.0 {
        mid - (mid - min) * (5.0 - difficulty) / 5.0
    } else {
        mid
    }
}

/// Inverse of [`difficulty_range`].
///
/// Recovers the difficulty value that would produce `value` on the curve
/// `min` / `mid` / `max`. The value is truncated to `f32` as well.
pub fn inverse_difficulty_range(value: f64, min: f64, mid: f64, max: f64) -> f64 {
    let value = f64::from(value as f32);

    let min_step = (min - mid) / 5.0;
    let max_step = (mid - max) / 5.0;

    // Lower half of the curve lies on the same side of `mid` as `min`
    if (value - mid) * min_step > 0.0 {
        -(value - min) / min_step
    } else {
        5.0 - (value - mid) / max_step
    }
}
