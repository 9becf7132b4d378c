use chrono::Utc;
use clap::Parser;
use schedule_auditor::{
    config::{Config, ObservabilityConfig},
    detection::ConflictDetector,
    discovery::JobScanner,
    report::{render_daily_schedule, render_text, ConflictReport},
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "schedule-auditor")]
#[command(about = "Check for scheduling conflicts between cron-driven jobs", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose output with schedule visualization
    #[arg(short, long)]
    verbose: bool,

    /// Output as JSON for CI integration
    #[arg(long)]
    json: bool,

    /// Specific files or directories to check (default: configured scan paths)
    #[arg(long, num_args = 1..)]
    files: Vec<PathBuf>,

    /// Exit with error code on any conflict (not just errors)
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    init_tracing(&config.observability);
    tracing::info!("Starting schedule-auditor v{}", env!("CARGO_PKG_VERSION"));

    // Discover jobs
    let scanner = JobScanner::new(config.discovery.clone());
    let jobs = if cli.files.is_empty() {
        scanner.scan()
    } else {
        scanner.scan_paths(&cli.files)
    };

    // Detect conflicts, anchored once for the whole run
    let anchor = Utc::now();
    let detector = ConflictDetector::new().with_horizon(config.detection.projection_horizon);
    let conflicts = detector.detect_at(&jobs, anchor);

    // Report
    if cli.json {
        let report = ConflictReport::build_at(&jobs, &conflicts, anchor);
        println!("{}", report.to_json_pretty()?);
    } else {
        println!("{}", render_text(&jobs, &conflicts, cli.verbose));

        if cli.verbose && !jobs.is_empty() {
            println!("{}", render_daily_schedule(&jobs, anchor));
        }
    }

    // Exit-code contract: errors always fail the run; --strict fails on any
    // conflict.
    let errors = conflicts.iter().filter(|c| c.is_error()).count();
    if errors > 0 || (cli.strict && !conflicts.is_empty()) {
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(observability: &ObservabilityConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "schedule_auditor={}",
            observability.log_level
        ))
    });

    // Logs go to stderr so JSON report output on stdout stays parseable.
    if observability.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
