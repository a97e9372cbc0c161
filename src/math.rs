//! Math utility functions.

use num_traits::Float;

/// Wrap an angle in degrees into the range [0, 360).
pub fn wrap_hue<T: Float>(hue: T) -> T {
    let full = T::from(360.0).unwrap_or_else(T::max_value);
    let wrapped = hue % full;
    let wrapped = if wrapped < T::zero() {
        wrapped + full
    } else {
        wrapped
    };

    // A tiny negative input can land exactly on 360 after the addition.
    if wrapped >= full {
        T::zero()
    } else {
        wrapped
    }
}

/// Returns true if `value` lies within `min..=max`. NaN is never in range.
pub fn in_range<T: Float>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() < T::epsilon()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_forward() {
        assert_eq!(wrap_hue(0.0_f64), 0.0);
        assert_eq!(wrap_hue(360.0_f64), 0.0);
        assert_eq!(wrap_hue(-30.0_f64), 330.0);
        assert_eq!(wrap_hue(725.0_f64), 5.0);
        assert_eq!(wrap_hue(-720.0_f32), 0.0);
        assert_eq!(wrap_hue(-1.0e-20_f64), 0.0);
    }

    #[test]
    fn range_rejects_nan() {
        assert!(in_range(50.0_f64, 0.0, 100.0));
        assert!(in_range(100.0_f64, 0.0, 100.0));
        assert!(!in_range(100.5_f64, 0.0, 100.0));
        assert!(!in_range(f64::NAN, 0.0, 100.0));
    }

    #[test]
    fn zero_detection() {
        assert!(almost_zero(0.0_f64));
        assert!(almost_zero(-0.0_f32));
        assert!(!almost_zero(1.0e-3_f64));
    }
}
