//! Scalar helpers shared by the vector operations.

/// Absolute tolerance used for approximate equality.
///
/// The tolerance is absolute, not relative, so it is too strict for values
/// of large magnitude (where adjacent `f32`s are further apart than this) and
/// too loose for values much smaller than it. Use the [`approx::RelativeEq`]
/// implementations when that matters.
///
/// Differences are widened to `f64` before being compared with it, since the
/// nearest `f32` to `1e-6` lies slightly below it.
pub const EPSILON: f64 = 1e-6;

/// Whether `a` and `b` differ by less than [`EPSILON`].
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    is_negligible(b - a)
}

/// Whether the magnitude of `difference` is less than [`EPSILON`].
#[inline]
pub fn is_negligible(difference: f32) -> bool {
    f64::from(difference.abs()) < EPSILON
}

/// Returns `a` if it is strictly greater than `b`, otherwise `b`.
///
/// Unlike [`f32::max`], a NaN `a` yields `b` while a NaN `b` yields NaN.
#[inline]
pub fn greater(a: f32, b: f32) -> f32 {
    if a > b { a } else { b }
}

/// Returns `a` if it is strictly less than `b`, otherwise `b`.
///
/// Unlike [`f32::min`], a NaN `a` yields `b` while a NaN `b` yields NaN.
#[inline]
pub fn lesser(a: f32, b: f32) -> f32 {
    if a < b { a } else { b }
}

/// Clamps `value` with `lesser(greater(value, lower), upper)`.
///
/// The bounds are not validated. If `lower > upper`, the result is `upper`.
#[inline]
pub fn clamp(value: f32, lower: f32, upper: f32) -> f32 {
    lesser(greater(value, lower), upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_uses_strict_absolute_tolerance() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(0.0, 5e-7));
        assert!(!approx_eq(0.0, 2e-6));
        assert!(!approx_eq(0.0, f32::NAN));
    }

    #[test]
    fn approx_eq_accepts_difference_of_f32_epsilon_literal() {
        assert!(approx_eq(0.0, 1e-6));
        assert!(approx_eq(1e-6, 0.0));
        assert!(is_negligible(-1e-6));
    }

    #[test]
    fn approx_eq_rejects_difference_just_above_tolerance() {
        let above = f32::from_bits(1e-6_f32.to_bits() + 1);
        assert!(f64::from(above) > EPSILON);
        assert!(!approx_eq(0.0, above));
    }

    #[test]
    fn approx_eq_fails_for_neighboring_large_values() {
        let large = 1e8_f32;
        let next = f32::from_bits(large.to_bits() + 1);
        assert!(!approx_eq(large, next));
    }

    #[test]
    fn greater_and_lesser_pick_correct_argument() {
        assert_eq!(greater(1.0, 2.0), 2.0);
        assert_eq!(greater(3.0, 2.0), 3.0);
        assert_eq!(lesser(1.0, 2.0), 1.0);
        assert_eq!(lesser(3.0, 2.0), 2.0);
    }

    #[test]
    fn greater_and_lesser_return_second_argument_for_nan_first() {
        assert_eq!(greater(f32::NAN, 2.0), 2.0);
        assert_eq!(lesser(f32::NAN, 2.0), 2.0);
        assert!(greater(2.0, f32::NAN).is_nan());
        assert!(lesser(2.0, f32::NAN).is_nan());
    }

    #[test]
    fn clamp_keeps_value_within_ordered_bounds() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    }

    #[test]
    fn clamp_with_inverted_bounds_gives_upper_bound() {
        assert_eq!(clamp(5.0, 3.0, 1.0), 1.0);
        assert_eq!(clamp(0.0, 3.0, 1.0), 1.0);
        assert_eq!(clamp(2.0, 3.0, 1.0), 1.0);
    }
}
