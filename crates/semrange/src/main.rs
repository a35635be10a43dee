use clap::Parser;
use semrange::{
    AnalysisConfig, ConstraintReport, Ecosystem, OutputFormat, Result, try_parse_constraint,
};
use semrange_core::{Constraint, Scope};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate dependency version constraints as version intervals.
///
/// Constraints are read from the arguments, or one per line from stdin when
/// none are given. Unreadable constraints are reported as empty.
#[derive(Debug, Parser)]
#[command(name = "semrange", version, about)]
struct Cli {
    /// Grammar used to read the constraints (cargo, npm, packagist, rubygems)
    #[arg(short, long)]
    ecosystem: Ecosystem,

    /// Use hard lookahead: a bump counts only if its first release is admitted
    #[arg(long)]
    hard: bool,

    /// Treat pre-1.0 minor and patch bumps as incompatible
    #[arg(long)]
    semver: bool,

    /// Which members of a union the bump predicates inspect (latest, all)
    #[arg(long, value_parser = parse_scope)]
    scope: Option<Scope>,

    /// Output line format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log parse failures and configuration details to stderr
    #[arg(short, long)]
    verbose: bool,

    constraints: Vec<String>,
}

fn parse_scope(value: &str) -> std::result::Result<Scope, String> {
    match value.to_ascii_lowercase().as_str() {
        "latest" => Ok(Scope::Latest),
        "all" => Ok(Scope::All),
        other => Err(format!("unknown scope '{other}', expected 'latest' or 'all'")),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)?,
        None => AnalysisConfig::default(),
    };
    if cli.hard {
        config.predicates.soft = false;
    }
    if cli.semver {
        config.predicates.semver = true;
    }
    if cli.scope.is_some() {
        config.predicates.scope = cli.scope;
    }
    if let Some(format) = cli.format {
        config.output.format = format;
    }

    let inputs = if cli.constraints.is_empty() {
        io::stdin().lock().lines().collect::<io::Result<Vec<_>>>()?
    } else {
        cli.constraints
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut degraded = 0usize;

    for input in &inputs {
        let constraint = match try_parse_constraint(cli.ecosystem, input) {
            Ok(constraint) => constraint,
            Err(error) => {
                degraded += 1;
                tracing::debug!(
                    ecosystem = %cli.ecosystem,
                    constraint = %input,
                    error = %error,
                    "constraint degraded to empty"
                );
                Constraint::empty()
            }
        };

        let report = ConstraintReport::new(input, &constraint, &config.predicates);
        match config.output.format {
            OutputFormat::Text => writeln!(out, "{}", report.to_text_line())?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&report)?)?,
        }
    }

    tracing::info!(
        ecosystem = %cli.ecosystem,
        total = inputs.len(),
        degraded,
        "analysis complete"
    );
    Ok(())
}
