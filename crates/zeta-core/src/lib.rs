//! Fast closed-form approximation of the Riemann zeta function for
//! `Re(s) > 4`, with the truncated Dirichlet series as its reference, plus
//! the prime-counting and crossing-forecast kernels used to cross-validate
//! its asymptotic behavior.

pub mod domain;
pub mod numerics;
pub mod predict;
pub mod primes;
pub mod zeta;

pub use domain::{Method, ZetaError, ZetaResult};
pub use zeta::{
    error_estimate, traditional_zeta, traditional_zeta_salvage, zeta, zeta_real, FastZeta,
    ZetaApproximationApi,
};
