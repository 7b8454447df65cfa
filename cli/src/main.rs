//! CLI entrypoint for Stock Advisor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use advisor_application::{AdvisorySessionController, MarketDataProvider};
use advisor_domain::{AdvisoryRequest, SessionPhase};
use advisor_infrastructure::{
    ConfigLoader, FileConfig, FileMarketDataProvider, HttpAdvisoryTransport,
    HttpMarketDataProvider,
};
use advisor_presentation::{Cli, ConsoleFormatter, StreamPrinter, WaitingSpinner};
use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Conventional exit status after SIGINT.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so the streamed advice on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    info!("Starting Stock Advisor");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    if cli.show_config {
        print!("{}", ConfigLoader::describe_config_sources());
        println!();
        println!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to render configuration")?
        );
        return Ok(ExitCode::SUCCESS);
    }

    check_config(&config)?;

    let params = config.advisor.to_params();
    let budget = params.budget_or_default(cli.budget.clone());
    let risk = params.risk_or_default(cli.risk);

    // === Market snapshot ===
    let provider: Box<dyn MarketDataProvider> = match &cli.snapshot_file {
        Some(path) => Box::new(FileMarketDataProvider::new(path)),
        None => Box::new(HttpMarketDataProvider::new(
            config.api.stocks_url(),
            config.api.request_timeout(),
        )?),
    };

    let spinner = WaitingSpinner::start("Fetching market data...");
    let snapshot = provider.snapshot().await;
    spinner.finish();
    let snapshot = snapshot.context("Failed to fetch market snapshot")?;

    if cli.show_stocks || config.output.show_stocks {
        print!("{}", ConsoleFormatter::format_snapshot(&snapshot));
    }

    let mut request = AdvisoryRequest::new(snapshot, budget, risk);
    if let Some(question) = &cli.question {
        request = request.with_question(question);
    }

    // === Dependency Injection ===
    let transport = Arc::new(HttpAdvisoryTransport::new(config.api.advisor_url())?);
    let mut controller = AdvisorySessionController::new(transport).with_params(params);

    print!("{}", ConsoleFormatter::format_request_header(&request));
    controller.start_request(request);

    let mut printer = StreamPrinter::new(io::stdout())
        .with_spinner(WaitingSpinner::start("Waiting for the advisor..."));

    tokio::select! {
        state = printer.follow(controller.subscribe()) => {
            let state = state.context("Failed to write advice")?;
            let outcome = ConsoleFormatter::format_outcome(&state);
            if state.phase() == SessionPhase::Failed {
                eprint!("{}", outcome);
                return Ok(ExitCode::FAILURE);
            }
            print!("{}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        _ = tokio::signal::ctrl_c() => {
            controller.reset();
            println!();
            warn!("Interrupted, advisory session cancelled");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
    }
}

/// Log every configuration issue and stop on errors.
fn check_config(config: &FileConfig) -> Result<()> {
    let issues = config.validate();
    for issue in &issues {
        if issue.is_error() {
            error!("Config: {}", issue);
        } else {
            warn!("Config: {}", issue);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Configuration has {} error(s), see log output above", errors);
    }
    Ok(())
}
