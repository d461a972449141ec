use crate::domain::{Method, ZetaError, ZetaResult};
use num_complex::Complex64;

/// Lower bound of the calibrated region. At or below this the fast path
/// delegates to the truncated series, so the two methods agree exactly.
pub const MIN_X: f64 = 4.0;
/// Default truncation of the reference Dirichlet series.
pub const TRADITIONAL_TERMS: usize = 1000;

const TAIL_CUTOFF: f64 = 15.0;
const TAIL_AMPLITUDE: f64 = 1.0e-6;
const TAIL_ERROR_BOUND: f64 = 0.0001;
const LOW_REGION_ERROR_BOUND: f64 = 2.0;
const MID_REGION_ERROR_FLOOR: f64 = 0.2;
const IMAG_DAMPING_SCALE: f64 = 0.001;
const IMAG_DAMPING_DECAY: f64 = 4.0;

/// One calibrated interpolation anchor: `zeta(x) - 1` at `base_x` together
/// with the exponential decay rate fitted around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientAnchor {
    pub base_x: f64,
    pub base_diff: f64,
    pub decay_rate: f64,
}

/// Empirically fitted anchors, ascending in `base_x`. The literals are the
/// acceptance criterion for the fast method and must not be re-derived.
pub const COEFFICIENTS: [CoefficientAnchor; 5] = [
    CoefficientAnchor {
        base_x: 4.0,
        base_diff: 0.082323,
        decay_rate: 0.485,
    },
    CoefficientAnchor {
        base_x: 5.0,
        base_diff: 0.036928,
        decay_rate: 0.490,
    },
    CoefficientAnchor {
        base_x: 6.0,
        base_diff: 0.017343,
        decay_rate: 0.495,
    },
    CoefficientAnchor {
        base_x: 7.0,
        base_diff: 0.008349,
        decay_rate: 0.498,
    },
    CoefficientAnchor {
        base_x: 8.0,
        base_diff: 0.004077,
        decay_rate: 0.499,
    },
];

pub trait ZetaApproximationApi {
    fn zeta(&self, s: Complex64, method: Method) -> ZetaResult<f64>;
    fn error_estimate(&self, x: f64) -> f64;
}

/// Unit entry point implementing [`ZetaApproximationApi`] over the free
/// functions in this module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FastZeta;

impl ZetaApproximationApi for FastZeta {
    fn zeta(&self, s: Complex64, method: Method) -> ZetaResult<f64> {
        zeta(s, method)
    }

    fn error_estimate(&self, x: f64) -> f64 {
        error_estimate(x)
    }
}

/// Approximate `|zeta(s)|`.
///
/// The traditional method evaluates the truncated Dirichlet series and can
/// fail with [`ZetaError::NumericOverflow`]; the fast method is infallible in
/// its documented domain except where it delegates (`Re(s) <= MIN_X`).
pub fn zeta(s: Complex64, method: Method) -> ZetaResult<f64> {
    if method == Method::Traditional {
        return Ok(traditional_zeta(s, TRADITIONAL_TERMS)?.norm());
    }

    let x = s.re;
    if x <= MIN_X {
        return Ok(traditional_zeta(s, TRADITIONAL_TERMS)?.norm());
    }

    if x > TAIL_CUTOFF {
        // zeta(x) -> 1 as x -> inf; the tail term is independent of the
        // anchor table.
        return Ok(1.0 + TAIL_AMPLITUDE * (-(x - TAIL_CUTOFF)).exp());
    }

    let anchor = nearest_anchor(x);
    let mut result = 1.0 + anchor.base_diff * anchor.decay_rate.powf(x - anchor.base_x);

    if s.im != 0.0 {
        let imag_factor =
            s.im.abs() * IMAG_DAMPING_SCALE * (-(x - MIN_X) / IMAG_DAMPING_DECAY).exp();
        result *= 1.0 - imag_factor;
    }

    Ok(result)
}

/// Real-argument convenience wrapper around [`zeta`].
pub fn zeta_real(x: f64, method: Method) -> ZetaResult<f64> {
    zeta(Complex64::new(x, 0.0), method)
}

/// Constant-size nearest lookup over [`COEFFICIENTS`]. Ties break toward the
/// smallest key: the scan keeps the first minimal distance it sees and the
/// table is ascending.
pub fn nearest_anchor(x: f64) -> CoefficientAnchor {
    let mut best = COEFFICIENTS[0];
    let mut best_distance = (best.base_x - x).abs();

    for anchor in COEFFICIENTS.iter().skip(1) {
        let distance = (anchor.base_x - x).abs();
        if distance < best_distance {
            best = *anchor;
            best_distance = distance;
        }
    }

    best
}

/// Truncated Dirichlet series `sum(1 / n^s)` over `n in 1..=terms`.
///
/// Fails with [`ZetaError::NumericOverflow`] as soon as a term or the running
/// sum leaves the representable range; the recovery policy (fewer terms,
/// degraded estimate) is the caller's.
pub fn traditional_zeta(s: Complex64, terms: usize) -> ZetaResult<Complex64> {
    let mut total = Complex64::new(0.0, 0.0);

    for n in 1..=terms {
        let term = Complex64::new(n as f64, 0.0).powc(-s);
        if !term.is_finite() {
            return Err(ZetaError::NumericOverflow {
                argument: s,
                term: n,
            });
        }

        total += term;
        if !total.is_finite() {
            return Err(ZetaError::NumericOverflow {
                argument: s,
                term: n,
            });
        }
    }

    Ok(total)
}

/// Degraded reference evaluation for arguments where the full series
/// overflows: accumulate with a reduced term budget and stop at the first
/// term that would leave the representable range.
pub fn traditional_zeta_salvage(s: Complex64, max_terms: usize) -> f64 {
    let mut total = Complex64::new(0.0, 0.0);

    for n in 1..=max_terms {
        let term = Complex64::new(n as f64, 0.0).powc(-s);
        if !term.is_finite() || !(total + term).is_finite() {
            break;
        }
        total += term;
    }

    total.norm()
}

/// Conservative percentage bound on the fast method's deviation from the
/// traditional one, as a function of `x = Re(s)` alone.
pub fn error_estimate(x: f64) -> f64 {
    if x <= MIN_X {
        // The fast method is not used here; flat defensive ceiling.
        LOW_REGION_ERROR_BOUND
    } else if x > TAIL_CUTOFF {
        TAIL_ERROR_BOUND
    } else {
        (LOW_REGION_ERROR_BOUND * (-(x - MIN_X)).exp()).max(MID_REGION_ERROR_FLOOR)
    }
}
