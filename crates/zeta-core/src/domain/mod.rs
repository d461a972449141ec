use num_complex::Complex64;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub type ZetaResult<T> = Result<T, ZetaError>;

/// Algorithm selector for [`crate::zeta::zeta`]. No other values are
/// permitted; parsing anything else fails with [`ZetaError::InvalidMethod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Method {
    #[default]
    Fast,
    Traditional,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Traditional => "traditional",
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for Method {
    type Err = ZetaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.eq_ignore_ascii_case("fast") {
            Ok(Self::Fast)
        } else if value.eq_ignore_ascii_case("traditional") {
            Ok(Self::Traditional)
        } else {
            Err(ZetaError::InvalidMethod {
                value: value.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZetaError {
    /// The truncated Dirichlet series left the representable f64 range.
    /// Callers are expected to retry with fewer terms or fall back to
    /// [`crate::zeta::traditional_zeta_salvage`].
    #[error("truncated Dirichlet series overflowed at term {term} for s = {argument}")]
    NumericOverflow { argument: Complex64, term: usize },
    #[error("unknown method '{value}', expected 'fast' or 'traditional'")]
    InvalidMethod { value: String },
}
