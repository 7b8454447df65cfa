//! Console output formatter for market snapshots and session outcomes

use advisor_domain::{AdvisoryRequest, MarketSnapshot, SessionState, StockQuote};
use colored::Colorize;

/// Formats advisory inputs and outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the market snapshot as a fixed-width table
    pub fn format_snapshot(snapshot: &MarketSnapshot) -> String {
        let mut output = Self::section_header(&format!(
            "Market Snapshot ({} stocks, {})",
            snapshot.len(),
            snapshot.source()
        ));

        if snapshot.is_empty() {
            output.push_str(&format!("{}\n", "No market data available".dimmed()));
            return output;
        }

        let header = format!(
            "{:<12} {:<24} {:<16} {:>10} {:>8} {:>7} {:>12}",
            "Symbol", "Name", "Sector", "Price", "Chg %", "P/E", "Mkt Cap"
        );
        output.push_str(&format!("{}\n", header.bold()));

        for quote in snapshot.quotes() {
            output.push_str(&Self::quote_row(quote));
            output.push('\n');
        }

        output
    }

    fn quote_row(quote: &StockQuote) -> String {
        let change = format!("{:>+7.2}%", quote.percent_change);
        let change = if quote.percent_change < 0.0 {
            change.red()
        } else {
            change.green()
        };

        format!(
            "{:<12} {:<24} {:<16} {:>10.2} {} {:>7.1} {:>12}",
            truncate(&quote.symbol, 12),
            truncate(&quote.name, 24),
            truncate(&quote.sector, 16),
            quote.price,
            change,
            quote.price_to_earnings,
            truncate(&quote.market_cap_label, 12)
        )
    }

    /// Header printed before the advice starts streaming
    pub fn format_request_header(request: &AdvisoryRequest) -> String {
        let mut output = Self::section_header("Investment Advice");
        output.push_str(&format!(
            "{} {}   {} {}\n\n",
            "Budget:".cyan().bold(),
            request.budget(),
            "Risk:".cyan().bold(),
            request.risk_profile()
        ));
        output
    }

    /// Trailer printed once the session has left `streaming`
    pub fn format_outcome(state: &SessionState) -> String {
        match state.last_error() {
            Some(message) => format!("\n\n{} {}\n", "x".red().bold(), message.red()),
            None if state.accumulated_text().is_empty() => {
                format!("\n{}\n", "The advisor returned no text.".dimmed())
            }
            None => "\n".to_string(),
        }
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
