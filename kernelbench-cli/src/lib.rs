#![warn(missing_docs)]
//! kernelbench CLI Library
//!
//! Terminal front end for the kernel comparison. It selects kernels and
//! variants, runs them one after another with a progress bar, keeps the
//! latest measurement of each pair in a [`Session`] and prints a report.
//!
//! # Example
//!
//! ```ignore
//! fn main() -> anyhow::Result<()> {
//!     kernelbench_cli::run()
//! }
//! ```

mod config;
mod executor;
mod planner;
mod session;

pub use config::*;
pub use executor::{
    ExecutionConfig, Executor, PairResult, build_report, compute_statistics, format_human_output,
    run_parity_checks,
};
pub use planner::{ExecutionPlan, build_plan};
pub use session::Session;

use clap::{Parser, Subcommand};
use kernelbench_report::{
    OutputFormat, Report, generate_csv_report, generate_json_report, generate_markdown_report,
};
use kernelbench_runner::KERNEL_TABLE;
use rayon::ThreadPoolBuilder;
use regex::Regex;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// kernelbench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "kernelbench")]
#[command(
    author,
    version,
    about = "kernelbench - reference vs accelerated compute kernels"
)]
pub struct Cli {
    /// Optional subcommand (List, Run, Verify, Init); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Filter kernels by regex on their names
    #[arg(default_value = ".*")]
    pub filter: String,

    /// Variants to run: reference, accelerated or both
    #[arg(long)]
    pub variant: Option<String>,

    /// Timed runs per kernel/variant pair
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Untimed runs before measuring
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Output format: human, json, csv, markdown
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Check that both variants produce identical results
    #[arg(long)]
    pub verify: bool,

    /// Pin the measuring thread to this core (Linux only)
    #[arg(long)]
    pub pin_cpu: Option<usize>,

    /// Number of threads for parallel statistics computation
    /// 0 = use all available cores (default)
    #[arg(long, short = 'j', default_value = "0")]
    pub threads: usize,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the kernels with their workloads
    List,
    /// Run kernels (default)
    Run,
    /// Only check that both variants agree; exits non-zero on mismatch
    Verify,
    /// Write a default kernelbench.toml to the current directory
    Init,
}

/// Run the kernelbench CLI with the process arguments
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the kernelbench CLI with pre-parsed arguments
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    // Discover kernelbench.toml configuration (CLI flags override)
    let config = KernelbenchConfig::discover().unwrap_or_default();

    let filter = Regex::new(&cli.filter)
        .map_err(|e| anyhow::anyhow!("Invalid filter '{}': {}", cli.filter, e))?;

    match cli.command {
        Some(Commands::List) => list_kernels(&filter),
        Some(Commands::Verify) => verify_kernels(&filter),
        Some(Commands::Init) => init_config(),
        Some(Commands::Run) | None => run_benchmarks(&cli, &config, &filter),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "kernelbench=debug"
    } else {
        "kernelbench=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Logs go to stderr so report output on stdout stays machine-readable
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn list_kernels(filter: &Regex) -> anyhow::Result<()> {
    println!("kernelbench kernels:");

    let mut total = 0;
    for row in KERNEL_TABLE.iter().filter(|row| filter.is_match(row.kind.name())) {
        println!(
            "├── {:<10} {:>10}  {} ({})",
            row.kind.name(),
            row.workload,
            row.kind.title(),
            row.algorithm
        );
        total += 1;
    }

    println!("{} kernels found.", total);
    Ok(())
}

fn verify_kernels(filter: &Regex) -> anyhow::Result<()> {
    let plan = build_plan(Some(filter), VariantSelection::Both);
    if plan.is_empty() {
        println!("No kernels found.");
        return Ok(());
    }

    let entries = run_parity_checks(&plan.kinds);
    let mut failures = 0;
    for e in &entries {
        match &e.error {
            None => println!("  ✓ {}", e.kind),
            Some(msg) => {
                println!("  ✗ {}", msg);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("\n{} parity failure(s)", failures);
        std::process::exit(1);
    }
    println!("{} kernels agree across variants.", entries.len());
    Ok(())
}

fn init_config() -> anyhow::Result<()> {
    let dir = std::env::current_dir()?;
    let path = KernelbenchConfig::write_default(&dir)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Layer kernelbench.toml values under CLI overrides
fn build_execution_config(cli: &Cli, config: &KernelbenchConfig) -> ExecutionConfig {
    ExecutionConfig {
        samples: cli.samples.unwrap_or(config.runner.samples).max(1),
        warmup_runs: cli.warmup.unwrap_or(config.runner.warmup_runs),
        pin_cpu: cli.pin_cpu.or(config.runner.pin_cpu),
    }
}

fn resolve_selection(cli: &Cli, config: &KernelbenchConfig) -> anyhow::Result<VariantSelection> {
    match &cli.variant {
        Some(v) => Ok(v.parse()?),
        None => Ok(config.runner.variant),
    }
}

fn resolve_format(cli: &Cli, config: &KernelbenchConfig) -> OutputFormat {
    let requested = cli.format.as_deref().unwrap_or(&config.output.format);
    requested.parse().unwrap_or_else(|e| {
        tracing::warn!("{}; using human output", e);
        OutputFormat::Human
    })
}

fn run_benchmarks(cli: &Cli, config: &KernelbenchConfig, filter: &Regex) -> anyhow::Result<()> {
    // Configure Rayon thread pool for statistics computation
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let selection = resolve_selection(cli, config)?;
    let format = resolve_format(cli, config);
    let plan = build_plan(Some(filter), selection);

    if plan.is_empty() {
        println!("No kernels found.");
        return Ok(());
    }

    let exec_config = build_execution_config(cli, config);
    eprintln!(
        "Running {} kernel(s) x {} variant(s), {} sample(s) each...\n",
        plan.kinds.len(),
        plan.variants.len(),
        exec_config.samples
    );

    let start_time = Instant::now();
    let mut session = Session::new();
    let results = Executor::new(exec_config).execute(&plan, &mut session);

    let parity = if cli.verify || config.runner.verify {
        run_parity_checks(&plan.kinds)
    } else {
        Vec::new()
    };

    let stats = compute_statistics(&results);
    let total_duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    let report = build_report(&results, &stats, parity, total_duration_ms);

    let output = render(&report, &session, format)?;
    if let Some(ref path) = cli.output {
        let mut file = std::fs::File::create(path)?;
        file.write_all(output.as_bytes())?;
        println!("Report written to: {}", path.display());
    } else {
        print!("{}", output);
    }

    if report.has_parity_failures() {
        eprintln!(
            "\n{} parity failure(s) between reference and accelerated kernels",
            report.summary.parity_failures
        );
        std::process::exit(1);
    }

    Ok(())
}

fn render(report: &Report, session: &Session, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Human => format_human_output(report, session),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
        OutputFormat::Markdown => generate_markdown_report(report),
    })
}
