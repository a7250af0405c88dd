// File: crates/snap-core/src/round.rs
// Summary: Step-rounding helper shared by coordinate and angular snapping.

/// Round `value` to the nearest multiple of `step`.
///
/// Ties round half away from zero (the `f64::round` rule), in both signs:
/// `round_to_step(2.5, 1.0) == 3.0` and `round_to_step(-2.5, 1.0) == -3.0`.
/// Every snap path goes through this helper, so snapping the same point
/// twice lands on the same multiple.
///
/// `step` must be positive; callers obtain it from a normalized config.
#[inline]
pub fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}
