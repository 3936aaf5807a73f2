//! WHO LMS z-score calculation

use crate::reference::LmsParams;

/// Standard score of measurement `x` against an LMS reference row.
///
/// `L == 0` uses `ln(x / M) / S`, any other `L` uses
/// `((x / M)^L - 1) / (L * S)`.
///
/// Returns `None` when `x` is not a positive finite number or the result is
/// not finite, so a bad measurement never turns into `NaN` or infinity.
#[must_use]
pub fn lms_zscore(x: f64, params: LmsParams) -> Option<f64> {
    if !x.is_finite() || x <= 0.0 {
        return None;
    }

    let LmsParams { l, m, s } = params;
    let ratio = x / m;
    let z = if l == 0.0 {
        ratio.ln() / s
    } else {
        (ratio.powf(l) - 1.0) / (l * s)
    };

    z.is_finite().then_some(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(l: f64, m: f64, s: f64) -> LmsParams {
        LmsParams::new(l, m, s).unwrap()
    }

    #[test]
    fn test_zero_at_median() {
        assert_eq!(lms_zscore(10.5, params(0.02, 10.5, 0.10)), Some(0.0));
        assert_eq!(lms_zscore(34.5, params(0.0, 34.5, 0.035)), Some(0.0));
        assert_eq!(lms_zscore(9.1, params(-0.35, 9.1, 0.08)), Some(0.0));
    }

    #[test]
    fn test_known_value() {
        // ((9/10.5)^0.02 - 1) / (0.02 * 0.1)
        let expected = ((9.0_f64 / 10.5).powf(0.02) - 1.0) / 0.002;
        let z = lms_zscore(9.0, params(0.02, 10.5, 0.10)).unwrap();
        assert!((z - expected).abs() < 1e-12);
        assert!(z < -1.5 && z > -1.6);
    }

    #[test]
    fn test_small_l_agrees_with_log_branch() {
        let log_branch = lms_zscore(8.0, params(0.0, 10.0, 0.1)).unwrap();
        let power_branch = lms_zscore(8.0, params(1e-6, 10.0, 0.1)).unwrap();
        assert!((log_branch - power_branch).abs() < 1e-6);
    }

    #[test]
    fn test_non_positive_measurement_is_absent() {
        let p = params(1.0, 80.0, 0.035);
        assert_eq!(lms_zscore(0.0, p), None);
        assert_eq!(lms_zscore(-3.0, p), None);
        assert_eq!(lms_zscore(f64::NAN, p), None);
        assert_eq!(lms_zscore(f64::INFINITY, p), None);
    }

    proptest! {
        #[test]
        fn prop_monotonic_in_measurement(
            l in -2.0f64..2.0,
            m in 1.0f64..120.0,
            s in 0.01f64..0.2,
            a in 0.5f64..150.0,
            b in 0.5f64..150.0,
        ) {
            let p = params(l, m, s);
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let z_lo = lms_zscore(lo, p).unwrap();
            let z_hi = lms_zscore(hi, p).unwrap();
            prop_assert!(z_lo <= z_hi + 1e-12);
        }

        #[test]
        fn prop_median_scores_zero(l in -2.0f64..2.0, m in 1.0f64..120.0, s in 0.01f64..0.2) {
            prop_assert_eq!(lms_zscore(m, params(l, m, s)), Some(0.0));
        }
    }
}
