//! Shared numeric helpers for method comparisons and table rendering.

/// Percentage deviation of `value` from `reference`.
///
/// Returns `None` when the reference is exactly zero, where the percentage is
/// undefined; presentation layers render that as "N/A".
pub fn relative_error_percent(value: f64, reference: f64) -> Option<f64> {
    if reference == 0.0 {
        return None;
    }
    Some((value - reference).abs() / reference.abs() * 100.0)
}

/// Scale-aware deviation between two magnitudes. The floor keeps the ratio
/// defined when both sides sit at zero, which happens for degraded series
/// values.
pub fn relative_difference(lhs: f64, rhs: f64, relative_floor: f64) -> f64 {
    let scale = lhs.abs().max(rhs.abs()).max(relative_floor);
    (lhs - rhs).abs() / scale
}

/// Absolute-or-relative acceptance used by the method parity tests; near the
/// tail both methods sit within a few 1e-6 of 1.0, so the absolute arm does
/// the work there.
pub fn within_tolerance(
    lhs: f64,
    rhs: f64,
    abs_tol: f64,
    rel_tol: f64,
    relative_floor: f64,
) -> bool {
    let abs_diff = (lhs - rhs).abs();
    abs_diff <= abs_tol || relative_difference(lhs, rhs, relative_floor) <= rel_tol
}

/// Count of significant fractional digits in a 16-digit fixed rendering,
/// as reported by the precision analysis table.
pub fn significant_decimal_digits(value: f64) -> usize {
    let rendered = format!("{value:.16}");
    match rendered.split_once('.') {
        Some((_, fraction)) => fraction.trim_end_matches('0').len(),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        relative_difference, relative_error_percent, significant_decimal_digits, within_tolerance,
    };

    #[test]
    fn relative_error_percent_guards_zero_reference() {
        assert_eq!(relative_error_percent(1.0, 0.0), None);
        let error = relative_error_percent(1.01, 1.0).expect("percentage");
        assert!((error - 1.0).abs() <= 1.0e-12);
    }

    #[test]
    fn relative_error_percent_uses_reference_magnitude() {
        let error = relative_error_percent(-1.02, -1.0).expect("percentage");
        assert!((error - 2.0).abs() <= 1.0e-12);
    }

    #[test]
    fn relative_difference_uses_relative_floor_for_vanishing_magnitudes() {
        // Two salvaged series values that both collapsed to ~0.
        let diff = relative_difference(0.0, 2.0e-8, 1.0e-4);
        assert!((diff - 2.0e-4).abs() <= 1.0e-15);
    }

    #[test]
    fn relative_difference_scales_by_the_larger_magnitude() {
        let diff = relative_difference(1.036928, 1.036831, 1.0e-12);
        assert!((diff - 9.7e-5 / 1.036928).abs() <= 1.0e-9);
    }

    #[test]
    fn within_tolerance_accepts_abs_or_relative_match() {
        // Tail values near 1.0 pass on the absolute arm.
        assert!(within_tolerance(1.0000306, 1.0000317, 1.0e-5, 1.0e-9, 1.0e-12));
        // Anchor-scale values pass on the relative arm.
        assert!(within_tolerance(1.036928, 1.036831, 1.0e-6, 1.0e-4, 1.0e-12));
        assert!(!within_tolerance(1.001015, 1.000995, 1.0e-6, 1.0e-6, 1.0e-12));
    }

    #[test]
    fn significant_digits_trims_trailing_zeros() {
        assert_eq!(significant_decimal_digits(1.25), 2);
        assert_eq!(significant_decimal_digits(1.0), 0);
        assert_eq!(significant_decimal_digits(0.5), 1);
    }
}
