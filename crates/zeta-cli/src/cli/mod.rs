mod commands;
mod tables;

use clap::Parser;
use zeta_core::domain::ZetaError;

pub fn run_from_env() -> i32 {
    init_tracing();

    match run(std::env::args().skip(1)) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{error}");
            error.exit_code()
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("fastzeta".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => dispatch(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{err}");
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(name = "fastzeta", about = "Fast Riemann zeta approximation toolkit")]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Evaluate zeta(s) at a single point
    Eval(commands::EvalArgs),
    /// Compare method timing and accuracy over the extended range
    Bench(commands::BenchArgs),
    /// Probe result drift under a tiny input perturbation
    Stability(commands::StabilityArgs),
    /// Compare per-method precision at a fixed point
    Precision(commands::PrecisionArgs),
    /// Compare exact and estimated prime counts
    Primes(commands::PrimesArgs),
    /// Forecast upcoming derivative crossings
    Predict(commands::PredictArgs),
}

fn dispatch(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Eval(args) => commands::run_eval(args),
        CliCommand::Bench(args) => commands::run_bench(args),
        CliCommand::Stability(args) => commands::run_stability(args),
        CliCommand::Precision(args) => commands::run_precision(args),
        CliCommand::Primes(args) => commands::run_primes(args),
        CliCommand::Predict(args) => commands::run_predict(args),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(#[from] ZetaError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Compute(_) => 4,
            Self::Internal(_) => 5,
        }
    }
}
