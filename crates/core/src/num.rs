//! Guarded numeric helpers shared by the allocation and costing math.
//!
//! An empty or just-onboarded dataset is a normal state, so every ratio in
//! this domain recovers from a zero denominator by yielding 0 instead of
//! dividing. All folds are over immutable slices; no accumulator outlives
//! a call.

/// `numerator / denominator`, or 0 when the denominator is 0 (or non-finite).
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 || !denominator.is_finite() {
        0.0
    } else {
        numerator / denominator
    }
}

/// Percentage share of `part` within `total`: `part × 100 / total`, guarded.
pub fn share_of(part: f64, total: f64) -> f64 {
    ratio(part * 100.0, total)
}

/// `rate` percent of `value`: `value × rate / 100`.
pub fn pct_of(value: f64, rate: f64) -> f64 {
    value * rate / 100.0
}

/// Arithmetic mean, 0 for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.iter().sum::<f64>() / (xs.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_recovers_from_zero_denominator() {
        assert_eq!(ratio(10.0, 0.0), 0.0);
        assert_eq!(ratio(10.0, f64::NAN), 0.0);
        assert_eq!(ratio(10.0, 4.0), 2.5);
    }

    #[test]
    fn share_of_is_a_percentage() {
        assert_eq!(share_of(25.0, 100.0), 25.0);
        assert_eq!(share_of(1.0, 0.0), 0.0);
    }

    #[test]
    fn pct_of_applies_a_rate() {
        assert_eq!(pct_of(200.0, 18.0), 36.0);
        assert_eq!(pct_of(200.0, 0.0), 0.0);
    }

    #[test]
    fn mean_of_empty_slice_is_zero() {
        assert_eq!(mean(&[]), 0.0);
        assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
    }
}
