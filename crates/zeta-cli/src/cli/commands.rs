use super::tables;
use super::CliError;
use anyhow::Context;
use num_complex::Complex64;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use zeta_core::domain::{Method, ZetaResult};
use zeta_core::numerics::relative_error_percent;
use zeta_core::predict::{predict_crossings, verify_next_step};
use zeta_core::primes::prime_distribution;
use zeta_core::zeta::{
    error_estimate, traditional_zeta, traditional_zeta_salvage, zeta, zeta_real,
    TRADITIONAL_TERMS,
};

const SALVAGE_TERMS: usize = 100;
const LIMITED_SERIES_TERMS: usize = 50;

#[derive(clap::Args)]
pub(super) struct EvalArgs {
    /// Real part of the argument
    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    /// Imaginary part of the argument
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    imag: f64,

    /// Evaluation method: fast or traditional
    #[arg(long, default_value = "fast")]
    method: String,

    /// Series truncation for the traditional method
    #[arg(long, default_value_t = TRADITIONAL_TERMS)]
    terms: usize,
}

#[derive(clap::Args)]
pub(super) struct BenchArgs {
    /// Evaluations per timed sample
    #[arg(long, default_value_t = 100)]
    iterations: usize,

    /// Comma-separated x values to sample
    #[arg(
        long = "x",
        value_delimiter = ',',
        default_values_t = [25.0, 30.0, 35.0, 40.0]
    )]
    x: Vec<f64>,

    /// Optional JSON report output path
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct StabilityArgs {
    /// Base evaluation point
    #[arg(long, default_value_t = 25.0)]
    base_x: f64,

    /// Perturbation added to the base point
    #[arg(long, default_value_t = 0.0001)]
    delta: f64,
}

#[derive(clap::Args)]
pub(super) struct PrecisionArgs {
    /// Evaluation point
    #[arg(long, default_value_t = 25.0)]
    x: f64,

    /// Evaluations per timed sample
    #[arg(long, default_value_t = 100)]
    iterations: usize,
}

#[derive(clap::Args)]
pub(super) struct PrimesArgs {
    /// First x value (inclusive)
    #[arg(long, default_value_t = 10)]
    start: u64,

    /// Last x value (inclusive)
    #[arg(long, default_value_t = 1000)]
    end: u64,

    /// Step between rows
    #[arg(long, default_value_t = 100)]
    step: u64,
}

#[derive(clap::Args)]
pub(super) struct PredictArgs {
    /// Forecasts per crossing sign
    #[arg(long, default_value_t = 5)]
    count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BenchMethod {
    Fast,
    SalvageTraditional,
    LimitedSeries,
}

impl BenchMethod {
    const ALL: [Self; 3] = [Self::Fast, Self::SalvageTraditional, Self::LimitedSeries];

    const fn label(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::SalvageTraditional => "salvage-trad",
            Self::LimitedSeries => "series-50",
        }
    }

    fn evaluate(self, x: f64) -> ZetaResult<f64> {
        match self {
            Self::Fast => zeta_real(x, Method::Fast),
            Self::SalvageTraditional => Ok(traditional_zeta_salvage(
                Complex64::new(x, 0.0),
                SALVAGE_TERMS,
            )),
            Self::LimitedSeries => {
                traditional_zeta(Complex64::new(x, 0.0), LIMITED_SERIES_TERMS)
                    .map(|total| total.norm())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct BenchSample {
    pub(super) x: f64,
    pub(super) method: &'static str,
    pub(super) millis: Option<f64>,
    pub(super) result: Option<f64>,
    pub(super) error_percent: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct BenchReport {
    pub(super) iterations: usize,
    pub(super) samples: Vec<BenchSample>,
}

#[derive(Debug, Clone)]
pub(super) struct StabilityRow {
    pub(super) method: &'static str,
    pub(super) base: Option<f64>,
    pub(super) perturbed: Option<f64>,
}

impl StabilityRow {
    pub(super) fn drift(&self) -> Option<f64> {
        Some((self.perturbed? - self.base?).abs())
    }
}

#[derive(Debug, Clone)]
pub(super) struct PrecisionRow {
    pub(super) method: &'static str,
    pub(super) result: Option<f64>,
    pub(super) millis: f64,
}

pub(super) fn run_eval(args: EvalArgs) -> Result<i32, CliError> {
    let method = args
        .method
        .parse::<Method>()
        .map_err(|error| CliError::Usage(error.to_string()))?;
    let s = Complex64::new(args.x, args.imag);
    tracing::debug!(x = args.x, imag = args.imag, %method, "evaluating zeta");

    let value = match method {
        Method::Traditional => traditional_zeta(s, args.terms)?.norm(),
        Method::Fast => zeta(s, Method::Fast)?,
    };

    println!("zeta({s}) [{method}] = {value:.12}");
    println!("error estimate at x = {}: {}%", args.x, error_estimate(args.x));
    Ok(0)
}

pub(super) fn run_bench(args: BenchArgs) -> Result<i32, CliError> {
    tracing::debug!(iterations = args.iterations, points = args.x.len(), "running benchmark");
    let report = collect_bench_report(&args.x, args.iterations);
    println!("{}", tables::render_bench_table(&report));

    if let Some(path) = args.report {
        write_json_report(&path, &report)?;
        println!("JSON report: {}", path.display());
    }

    Ok(0)
}

fn collect_bench_report(x_values: &[f64], iterations: usize) -> BenchReport {
    let mut samples = Vec::with_capacity(x_values.len() * BenchMethod::ALL.len());

    for &x in x_values {
        // The series methods are truncated or salvaged in this range, so the
        // fast value is the reference.
        let reference = zeta_real(x, Method::Fast).ok();

        for method in BenchMethod::ALL {
            samples.push(bench_sample(x, method, iterations, reference));
        }
    }

    BenchReport {
        iterations,
        samples,
    }
}

fn bench_sample(
    x: f64,
    method: BenchMethod,
    iterations: usize,
    reference: Option<f64>,
) -> BenchSample {
    let start = Instant::now();
    let mut result = None;

    for _ in 0..iterations.max(1) {
        match method.evaluate(x) {
            Ok(value) => result = Some(value),
            Err(_) => {
                return BenchSample {
                    x,
                    method: method.label(),
                    millis: None,
                    result: None,
                    error_percent: None,
                };
            }
        }
    }

    let millis = start.elapsed().as_secs_f64() * 1.0e3;
    let error_percent = match (result, reference) {
        (Some(value), Some(reference)) => relative_error_percent(value, reference),
        _ => None,
    };

    BenchSample {
        x,
        method: method.label(),
        millis: Some(millis),
        result,
        error_percent,
    }
}

pub(super) fn run_stability(args: StabilityArgs) -> Result<i32, CliError> {
    tracing::debug!(base_x = args.base_x, delta = args.delta, "running stability probe");

    let rows = BenchMethod::ALL
        .iter()
        .map(|method| StabilityRow {
            method: method.label(),
            base: method.evaluate(args.base_x).ok(),
            perturbed: method.evaluate(args.base_x + args.delta).ok(),
        })
        .collect::<Vec<_>>();

    println!(
        "{}",
        tables::render_stability_table(&rows, args.base_x, args.delta)
    );
    Ok(0)
}

pub(super) fn run_precision(args: PrecisionArgs) -> Result<i32, CliError> {
    tracing::debug!(x = args.x, iterations = args.iterations, "running precision probe");

    let mut rows = Vec::with_capacity(BenchMethod::ALL.len());
    for method in BenchMethod::ALL {
        let start = Instant::now();
        let mut result = None;
        for _ in 0..args.iterations.max(1) {
            result = method.evaluate(args.x).ok();
            if result.is_none() {
                break;
            }
        }

        rows.push(PrecisionRow {
            method: method.label(),
            result,
            millis: start.elapsed().as_secs_f64() * 1.0e3,
        });
    }

    println!(
        "{}",
        tables::render_precision_table(&rows, args.x, args.iterations)
    );
    Ok(0)
}

pub(super) fn run_primes(args: PrimesArgs) -> Result<i32, CliError> {
    if args.step == 0 {
        return Err(CliError::Usage("--step must be greater than zero".to_string()));
    }
    tracing::debug!(start = args.start, end = args.end, step = args.step, "running prime table");

    let rows = prime_distribution(args.start, args.end, args.step);
    println!("{}", tables::render_primes_table(&rows));
    Ok(0)
}

pub(super) fn run_predict(args: PredictArgs) -> Result<i32, CliError> {
    tracing::debug!(count = args.count, "running crossing forecast");

    let predictions = predict_crossings(args.count);
    let verification = verify_next_step(&predictions);
    println!(
        "{}",
        tables::render_predict_table(&predictions, verification.as_ref())
    );
    Ok(0)
}

fn write_json_report(path: &PathBuf, report: &BenchReport) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create report directory '{}'", parent.display())
            })?;
        }
    }

    let rendered = serde_json::to_string_pretty(report)
        .context("failed to serialize benchmark report")?;
    std::fs::write(path, rendered)
        .with_context(|| format!("failed to write report '{}'", path.display()))?;
    Ok(())
}
