//! schwarzsim - batch Schwarzschild black hole simulator
//!
//! A CLI tool that evaluates closed-form relativistic quantities for a
//! configured list of cases, renders per-case figures, persists CSV
//! tables, and aggregates the output tree into comparison statistics.
//!
//! Exit codes:
//!   0 - Success (all cases completed, or summary produced)
//!   1 - Runtime error (config, i/o, rendering, malformed results)
//!   2 - Batch completed with one or more failed cases

mod aggregate;
mod batch;
mod cli;
mod config;
mod error;
mod models;
mod physics;
mod plot;
mod report;
mod runner;
mod table;

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

use aggregate::ResultAggregator;
use batch::BatchDriver;
use cli::{Args, ReportFormat};
use config::Config;
use models::AggregateReport;

fn main() {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        match handle_init_config() {
            Ok(()) => std::process::exit(0),
            Err(e) => {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
    }

    // Initialize logging
    init_logging(&args);

    info!("schwarzsim v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    match run(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Run failed: {:#}", e);
            eprintln!("\nError: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default schwarzsim.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(config::CONFIG_FILE_NAME);

    if path.exists() {
        eprintln!(
            "{} already exists. Remove it first or edit it manually.",
            config::CONFIG_FILE_NAME
        );
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content)
        .with_context(|| format!("Failed to write {}", config::CONFIG_FILE_NAME))?;

    println!("Created {} with the reference cases.", config::CONFIG_FILE_NAME);
    println!("Edit it to customize cases, constants, and output settings.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the requested workflow. Returns the exit code (0 or 2).
fn run(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    let output_root = PathBuf::from(&config.output.root);

    if args.summarize {
        return run_summarize(&args, &output_root);
    }

    let cases = match args.adhoc_case() {
        Some(case) => vec![case],
        None => config.cases.clone(),
    };

    // Handle --dry-run: list cases and exit
    if args.dry_run {
        return handle_dry_run(&cases);
    }

    fs::create_dir_all(&output_root)
        .with_context(|| format!("Failed to create output root {}", output_root.display()))?;

    let mut rendered_extra_chart = false;

    if args.overview_chart {
        let chart_path = output_root.join("radius_vs_mass.png");
        plot::chart::render_radius_mass_chart(&chart_path, &config.physics)?;
        println!("Overview chart saved to: {}", chart_path.display());
        rendered_extra_chart = true;
    }

    if args.deflection_chart {
        let mass_solar = args
            .mass
            .or_else(|| cases.first().map(|c| c.mass_solar))
            .context("--deflection-chart needs --mass or a configured case")?;
        let rs = physics::schwarzschild_radius(
            mass_solar * config.physics.solar_mass_kg,
            &config.physics,
        );
        let chart_path = output_root.join("light_deflection.png");
        plot::chart::render_deflection_chart(&chart_path, rs)?;
        println!("Deflection chart saved to: {}", chart_path.display());
        rendered_extra_chart = true;
    }

    if cases.is_empty() {
        if rendered_extra_chart {
            return Ok(0);
        }
        anyhow::bail!(
            "no cases configured; run --init-config to create {}",
            config::CONFIG_FILE_NAME
        );
    }

    println!(
        "Running {} case(s) into {}\n",
        cases.len(),
        output_root.display()
    );

    let driver = BatchDriver::new(cases, config.physics, config.output.figure_size());
    let batch = driver.run(&output_root, !args.quiet);

    println!("\nBatch summary:");
    for outcome in &batch.outcomes {
        match &outcome.outcome {
            Ok(result) => println!(
                "  ok   {} (rs = {:.2e} m, {} samples)",
                outcome.label,
                result.schwarzschild_radius_m,
                result.len()
            ),
            Err(e) => println!("  FAIL {} ({e})", outcome.label),
        }
    }
    println!(
        "  {} succeeded, {} failed in {:.1}s",
        batch.succeeded(),
        batch.failed(),
        batch.duration_seconds
    );

    if batch.all_succeeded() {
        Ok(0)
    } else {
        eprintln!(
            "\n{} of {} cases failed.",
            batch.failed(),
            batch.outcomes.len()
        );
        Ok(2)
    }
}

/// Handle --summarize: aggregate an existing output tree.
fn run_summarize(args: &Args, output_root: &std::path::Path) -> Result<i32> {
    let aggregator = ResultAggregator::new(output_root);
    let summaries = aggregator.run()?;
    aggregate::print_summary_table(&summaries);

    if let Some(ref report_path) = args.report {
        let aggregate_report =
            AggregateReport::new(output_root.to_string_lossy().into_owned(), summaries);
        let body = match args.format {
            ReportFormat::Markdown => report::generate_markdown_report(&aggregate_report),
            ReportFormat::Json => report::generate_json_report(&aggregate_report)?,
        };
        fs::write(report_path, body)
            .with_context(|| format!("Failed to write report to {}", report_path.display()))?;
        println!("Summary report saved to: {}", report_path.display());
    }

    Ok(0)
}

/// Handle --dry-run: print the case list and exit.
fn handle_dry_run(cases: &[models::CaseDescriptor]) -> Result<i32> {
    println!("\nDry run: listing cases (no output written)\n");

    if cases.is_empty() {
        println!("   No cases configured.");
    } else {
        for case in cases {
            println!(
                "   {} (mass {} solar masses, up to {} Rs, scale {})",
                case.label, case.mass_solar, case.max_distance_rs, case.plot_scale
            );
        }
        println!("\n   Total: {} case(s)", cases.len());
    }

    Ok(0)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from {}", config::CONFIG_FILE_NAME);
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
