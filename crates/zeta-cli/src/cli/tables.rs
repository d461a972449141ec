//! Plain-text table rendering for the analysis commands. Undefined cells
//! render as "OVERFLOW" (timing) or "N/A" (values and percentages) instead of
//! aborting the table.

use super::commands::{BenchReport, PrecisionRow, StabilityRow};
use zeta_core::numerics::significant_decimal_digits;
use zeta_core::predict::{CrossingPrediction, PredictionVerification};
use zeta_core::primes::PrimeCountComparison;

pub(super) fn render_bench_table(report: &BenchReport) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Extended Range Analysis ({} iterations)",
        report.iterations
    ));
    lines.push(format!(
        "{:<8}{:<15}{:<12}{:<15}{:<10}",
        "x", "Method", "Time (ms)", "Result", "Error %"
    ));
    lines.push("-".repeat(60));

    let mut previous_x = None;
    for sample in &report.samples {
        if previous_x.is_some() && previous_x != Some(sample.x) {
            lines.push(String::new());
        }
        previous_x = Some(sample.x);

        let time_cell = match sample.millis {
            Some(millis) => format!("{millis:.3}"),
            None => "OVERFLOW".to_string(),
        };
        lines.push(format!(
            "{:<8}{:<15}{:<12}{:<15}{:<10}",
            sample.x,
            sample.method,
            time_cell,
            optional_cell(sample.result, 6),
            optional_cell(sample.error_percent, 6)
        ));
    }

    lines.join("\n")
}

pub(super) fn render_stability_table(rows: &[StabilityRow], base_x: f64, delta: f64) -> String {
    let mut lines = Vec::new();
    lines.push("Numerical Stability Analysis".to_string());
    lines.push(format!("Testing x = {base_x} vs x = {}", base_x + delta));
    lines.push(format!(
        "{:<15}{:<18}{:<18}{:<18}",
        "Method", "Base", "Base+delta", "Drift"
    ));
    lines.push("-".repeat(69));

    for row in rows {
        lines.push(format!(
            "{:<15}{:<18}{:<18}{:<18}",
            row.method,
            optional_cell(row.base, 12),
            optional_cell(row.perturbed, 12),
            optional_cell(row.drift(), 12)
        ));
    }

    lines.join("\n")
}

pub(super) fn render_precision_table(
    rows: &[PrecisionRow],
    x: f64,
    iterations: usize,
) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Precision Analysis at x={x} ({iterations} iterations)"));
    lines.push(format!(
        "{:<15}{:<25}{:<10}{:<12}",
        "Method", "Result", "Digits", "Time (ms)"
    ));
    lines.push("-".repeat(62));

    for row in rows {
        let (result_cell, digits_cell) = match row.result {
            Some(value) => (
                format!("{value:.16}"),
                significant_decimal_digits(value).to_string(),
            ),
            None => ("N/A".to_string(), "N/A".to_string()),
        };
        lines.push(format!(
            "{:<15}{:<25}{:<10}{:<12.3}",
            row.method, result_cell, digits_cell, row.millis
        ));
    }

    lines.join("\n")
}

pub(super) fn render_primes_table(rows: &[PrimeCountComparison]) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{:<8}{:<10}{:<10}{:<10}",
        "x", "Actual", "Estimate", "Error %"
    ));
    lines.push("-".repeat(38));

    for row in rows {
        lines.push(format!(
            "{:<8}{:<10}{:<10.2}{:<10}",
            row.x,
            row.actual,
            row.estimate,
            optional_cell(row.error_percent, 2)
        ));
    }

    lines.join("\n")
}

pub(super) fn render_predict_table(
    predictions: &[CrossingPrediction],
    verification: Option<&PredictionVerification>,
) -> String {
    let mut lines = Vec::new();
    lines.push("Predicted Next Crossings:".to_string());
    lines.push(format!(
        "{:<10}{:<15}{:<10}",
        "x", "Derivative", "Type"
    ));
    lines.push("-".repeat(35));

    for prediction in predictions {
        lines.push(format!(
            "{:<10.1}{:<15.6}{:<10}",
            prediction.x,
            prediction.derivative,
            prediction.kind.as_str()
        ));
    }

    if let Some(verification) = verification {
        lines.push(String::new());
        lines.push("Verification of next step:".to_string());
        lines.push(format!(
            "x = {:.1}, actual = {}, estimate = {:.2}, error = {}%",
            verification.x,
            verification.actual,
            verification.estimate,
            optional_cell(verification.error_percent, 6)
        ));
    }

    lines.join("\n")
}

fn optional_cell(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(value) => format!("{value:.precision$}"),
        None => "N/A".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::super::commands::{BenchReport, BenchSample, PrecisionRow, StabilityRow};
    use super::{
        optional_cell, render_bench_table, render_precision_table, render_predict_table,
        render_primes_table, render_stability_table,
    };
    use zeta_core::predict::{predict_crossings, verify_next_step};
    use zeta_core::primes::prime_distribution;

    fn sample(x: f64, method: &'static str, result: Option<f64>) -> BenchSample {
        BenchSample {
            x,
            method,
            millis: result.map(|_| 0.125),
            result,
            error_percent: result.map(|_| 0.0),
        }
    }

    #[test]
    fn bench_table_renders_overflow_cells() {
        let report = BenchReport {
            iterations: 100,
            samples: vec![
                sample(25.0, "fast", Some(1.0)),
                sample(25.0, "series-50", None),
            ],
        };

        let rendered = render_bench_table(&report);
        assert!(rendered.contains("Extended Range Analysis (100 iterations)"));
        assert!(rendered.contains("Error %"));
        assert!(rendered.contains("OVERFLOW"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn bench_table_separates_sample_points_with_blank_lines() {
        let report = BenchReport {
            iterations: 1,
            samples: vec![
                sample(25.0, "fast", Some(1.0)),
                sample(30.0, "fast", Some(1.0)),
            ],
        };

        let rendered = render_bench_table(&report);
        assert!(rendered.contains("\n\n"));
    }

    #[test]
    fn stability_table_reports_drift_and_error_rows() {
        let rows = vec![
            StabilityRow {
                method: "fast",
                base: Some(1.000001),
                perturbed: Some(1.000002),
            },
            StabilityRow {
                method: "series-50",
                base: None,
                perturbed: None,
            },
        ];

        let rendered = render_stability_table(&rows, 25.0, 0.0001);
        assert!(rendered.contains("Testing x = 25 vs x = 25.0001"));
        assert!(rendered.contains("0.000001000000"));
        assert!(rendered.contains("N/A"));
    }

    #[test]
    fn precision_table_counts_significant_digits() {
        let rows = vec![PrecisionRow {
            method: "fast",
            result: Some(1.25),
            millis: 0.5,
        }];

        let rendered = render_precision_table(&rows, 25.0, 100);
        assert!(rendered.contains("Precision Analysis at x=25 (100 iterations)"));
        assert!(rendered.contains("1.2500000000000000"));
        let digits_line = rendered.lines().last().expect("data row");
        assert!(digits_line.contains(" 2 ") || digits_line.contains("2         "));
    }

    #[test]
    fn primes_table_renders_known_counts() {
        let rendered = render_primes_table(&prime_distribution(10, 100, 90));
        assert!(rendered.contains("Actual"));
        assert!(rendered.contains("25"));
    }

    #[test]
    fn predict_table_includes_both_signs_and_verification() {
        let predictions = predict_crossings(2);
        let verification = verify_next_step(&predictions);
        let rendered = render_predict_table(&predictions, verification.as_ref());

        assert!(rendered.contains("Positive"));
        assert!(rendered.contains("Negative"));
        assert!(rendered.contains("215.1"));
        assert!(rendered.contains("Verification of next step:"));
    }

    #[test]
    fn optional_cells_render_not_available() {
        assert_eq!(optional_cell(None, 6), "N/A");
        assert_eq!(optional_cell(Some(0.5), 2), "0.50");
    }
}
