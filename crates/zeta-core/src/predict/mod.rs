//! Crossing forecast kernel: extrapolates hand-tuned exponential fits of the
//! prime-count derivative to predict upcoming sign crossings, then
//! cross-checks the step after the last forecast against the prime-counting
//! estimate.

use crate::numerics::relative_error_percent;
use crate::primes::{prime_count, prime_count_estimate};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Exponential fit `amplitude * exp(rate * x)` of the crossing derivative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossingFit {
    pub amplitude: f64,
    pub rate: f64,
}

impl CrossingFit {
    pub fn derivative_at(&self, x: f64) -> f64 {
        self.amplitude * (self.rate * x).exp()
    }
}

// Fitted to observed crossings up to x ~ 200; hand-tuned literals, not
// derived from the zeta approximation.
pub const POSITIVE_FIT: CrossingFit = CrossingFit {
    amplitude: 0.013400,
    rate: -0.006255,
};
pub const NEGATIVE_FIT: CrossingFit = CrossingFit {
    amplitude: -0.612846,
    rate: -0.005205,
};

const LAST_POSITIVE_CROSSING: f64 = 195.1;
const LAST_NEGATIVE_CROSSING: f64 = 197.1;
const BASE_SPACING: f64 = 20.0;
const SPACING_INCREMENT: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CrossingKind {
    Positive,
    Negative,
}

impl CrossingKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
        }
    }
}

impl Display for CrossingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CrossingPrediction {
    pub x: f64,
    pub derivative: f64,
    pub kind: CrossingKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionVerification {
    pub x: f64,
    pub actual: u64,
    pub estimate: f64,
    pub error_percent: Option<f64>,
}

/// Forecast the next `count` crossings of each sign. Spacing between
/// consecutive forecasts widens by five per step, matching the observed
/// widening of crossing intervals.
pub fn predict_crossings(count: usize) -> Vec<CrossingPrediction> {
    let mut predictions = Vec::with_capacity(count * 2);
    let mut last_positive = LAST_POSITIVE_CROSSING;
    let mut last_negative = LAST_NEGATIVE_CROSSING;

    for index in 0..count {
        let spacing = BASE_SPACING + SPACING_INCREMENT * index as f64;
        let positive_x = last_positive + spacing;
        let negative_x = last_negative + spacing;

        predictions.push(CrossingPrediction {
            x: positive_x,
            derivative: POSITIVE_FIT.derivative_at(positive_x),
            kind: CrossingKind::Positive,
        });
        predictions.push(CrossingPrediction {
            x: negative_x,
            derivative: NEGATIVE_FIT.derivative_at(negative_x),
            kind: CrossingKind::Negative,
        });

        last_positive = positive_x;
        last_negative = negative_x;
    }

    predictions
}

/// Cross-check one base spacing past the last positive forecast against the
/// prime-counting estimate. `None` when there are no positive forecasts.
pub fn verify_next_step(predictions: &[CrossingPrediction]) -> Option<PredictionVerification> {
    let last_positive = predictions
        .iter()
        .rev()
        .find(|prediction| prediction.kind == CrossingKind::Positive)?;

    let x = last_positive.x + BASE_SPACING;
    let actual = prime_count(x as u64);
    let estimate = prime_count_estimate(x);

    Some(PredictionVerification {
        x,
        actual,
        estimate,
        error_percent: relative_error_percent(estimate, actual as f64),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        predict_crossings, verify_next_step, CrossingKind, NEGATIVE_FIT, POSITIVE_FIT,
    };

    #[test]
    fn forecast_alternates_signs_with_widening_spacing() {
        let predictions = predict_crossings(3);
        assert_eq!(predictions.len(), 6);

        assert_eq!(predictions[0].kind, CrossingKind::Positive);
        assert_eq!(predictions[1].kind, CrossingKind::Negative);
        assert!((predictions[0].x - 215.1).abs() <= 1.0e-9);
        assert!((predictions[1].x - 217.1).abs() <= 1.0e-9);

        // Second step uses spacing 25, third uses 30.
        assert!((predictions[2].x - 240.1).abs() <= 1.0e-9);
        assert!((predictions[4].x - 270.1).abs() <= 1.0e-9);
    }

    #[test]
    fn derivatives_carry_the_fit_signs_and_decay() {
        let predictions = predict_crossings(2);
        let positives: Vec<_> = predictions
            .iter()
            .filter(|prediction| prediction.kind == CrossingKind::Positive)
            .collect();
        let negatives: Vec<_> = predictions
            .iter()
            .filter(|prediction| prediction.kind == CrossingKind::Negative)
            .collect();

        assert!(positives.iter().all(|p| p.derivative > 0.0));
        assert!(negatives.iter().all(|p| p.derivative < 0.0));
        assert!(positives[0].derivative > positives[1].derivative);
        assert!(negatives[0].derivative < negatives[1].derivative);
    }

    #[test]
    fn forecast_is_deterministic() {
        assert_eq!(predict_crossings(5), predict_crossings(5));
    }

    #[test]
    fn fit_constants_decay_toward_zero() {
        assert!(POSITIVE_FIT.derivative_at(1.0e4).abs() < POSITIVE_FIT.amplitude.abs());
        assert!(NEGATIVE_FIT.derivative_at(1.0e4).abs() < NEGATIVE_FIT.amplitude.abs());
    }

    #[test]
    fn verification_checks_one_spacing_past_the_last_positive_forecast() {
        let predictions = predict_crossings(1);
        let verification = verify_next_step(&predictions).expect("verification row");

        assert!((verification.x - 235.1).abs() <= 1.0e-9);
        assert_eq!(verification.actual, 51);
        let error = verification.error_percent.expect("defined percentage");
        assert!(error.is_finite());
        assert!(error < 15.0);
    }

    #[test]
    fn verification_requires_a_positive_forecast() {
        assert_eq!(verify_next_step(&[]), None);
    }
}
