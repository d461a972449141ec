use num_complex::Complex64;
use zeta_core::domain::{Method, ZetaError};
use zeta_core::zeta::{traditional_zeta, traditional_zeta_salvage, zeta_real};

#[test]
fn traditional_method_propagates_overflow_to_the_caller() {
    let error = zeta_real(-300.0, Method::Traditional).unwrap_err();
    assert!(matches!(error, ZetaError::NumericOverflow { .. }));
}

#[test]
fn fast_method_propagates_overflow_when_it_delegates() {
    // Below MIN_X the fast path is the traditional path, same caveat applies.
    let error = zeta_real(-300.0, Method::Fast).unwrap_err();
    assert!(matches!(error, ZetaError::NumericOverflow { .. }));
}

#[test]
fn fast_method_never_fails_inside_the_calibrated_domain() {
    let mut x = 4.25;
    while x <= 50.0 {
        let value = zeta_real(x, Method::Fast).expect("fast value");
        assert!(value.is_finite());
        assert!(value >= 1.0);
        x += 0.25;
    }
}

#[test]
fn reducing_terms_recovers_a_degraded_estimate() {
    let argument = Complex64::new(-300.0, 0.0);
    assert!(traditional_zeta(argument, 1000).is_err());

    let degraded = traditional_zeta_salvage(argument, 100);
    assert!(degraded.is_finite());
}
