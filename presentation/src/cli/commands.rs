//! CLI command definitions

use advisor_domain::{Budget, RiskProfile};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for stock-advisor
#[derive(Parser, Debug)]
#[command(name = "stock-advisor")]
#[command(author, version, about = "Stream investment advice for the current market snapshot")]
#[command(long_about = r#"
Stock Advisor fetches a market snapshot, sends it to the advisory endpoint
together with your budget and risk profile, and prints the advice as it
streams in.

Configuration files are loaded from (in priority order):
1. STOCK_ADVISOR_<SECTION>__<KEY>           Environment variables
2. --config <path>                          Explicit config file
3. ./advisor.toml or ./.advisor.toml        Project-level config
4. ~/.config/stock-advisor/config.toml      Global config

Example:
  stock-advisor
  stock-advisor -b 250000 -r aggressive
  stock-advisor -q "Which two banks look cheapest right now?" --show-stocks
  stock-advisor --snapshot-file snapshot.json --api-url http://10.0.0.5:8000
"#)]
pub struct Cli {
    /// Amount available to invest (defaults to the configured budget)
    #[arg(short, long, value_name = "AMOUNT")]
    pub budget: Option<Budget>,

    /// Risk profile: conservative, moderate or aggressive
    #[arg(short, long, value_name = "PROFILE")]
    pub risk: Option<RiskProfile>,

    /// Ask a custom question instead of the default recommendation prompt
    #[arg(short, long, value_name = "TEXT")]
    pub question: Option<String>,

    /// Read the market snapshot from a JSON file instead of the API
    #[arg(long, value_name = "PATH")]
    pub snapshot_file: Option<PathBuf>,

    /// Print the market snapshot before streaming advice
    #[arg(long)]
    pub show_stocks: bool,

    /// Override the backend base URL (e.g. http://localhost:8000)
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
