//! Command implementations for the Ads Hub processor CLI
//!
//! This module contains the command execution logic, logging setup,
//! progress reporting and result output for the CLI interface.

use std::path::Path;

use chrono::Local;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app::models::{Campaign, Platform};
use crate::app::services::gemini::{GeminiClient, executive_summary, extract_campaigns};
use crate::app::services::insights::compute_stats;
use crate::app::services::report_parser::{ParseStats, ReportParser};
use crate::cli::args::{Args, Commands, ExtractArgs, OutputArgs, ParseArgs, SummarizeArgs};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner for the Ads Hub processor
///
/// Dispatches to the subcommand implementations after setting up
/// logging. The cancellation token aborts in-flight network calls when
/// the user interrupts; the pending result is abandoned, never
/// partially applied.
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<()> {
    setup_logging(&args)?;

    info!("Starting Ads Hub processor");
    debug!("Command line arguments: {:?}", args);

    let quiet = args.quiet;
    match args.command {
        Some(Commands::Parse(parse_args)) => run_parse(parse_args, quiet),
        Some(Commands::Extract(extract_args)) => {
            run_extract(extract_args, quiet, &cancellation_token).await
        }
        Some(Commands::Summarize(summarize_args)) => {
            run_summarize(summarize_args, quiet, &cancellation_token).await
        }
        None => unreachable!("main exits when no subcommand is given"),
    }
}

/// Parse a delimited text report into campaign records
fn run_parse(args: ParseArgs, quiet: bool) -> Result<()> {
    let text = read_text_report(&args.file)?;
    let platform: Platform = args.platform.into();

    let parser = ReportParser::new();
    let result = parser.parse_text(&text, platform);

    if !quiet {
        print_parse_report(&args.file, &result.stats);
    }

    write_records(&args.output, &result.campaigns)
}

/// Extract campaign records from a PDF report via Gemini
async fn run_extract(
    args: ExtractArgs,
    quiet: bool,
    cancellation_token: &CancellationToken,
) -> Result<()> {
    let config = load_config(args.config_file.as_deref(), args.api_key.as_deref())?;
    let client = GeminiClient::from_config(&config)?;

    let pdf_bytes = std::fs::read(&args.file)
        .map_err(|e| Error::io(format!("Failed to read document {}", args.file.display()), e))?;

    let spinner = network_spinner(quiet, "Extracting campaigns from document...");
    let extraction = tokio::select! {
        result = extract_campaigns(&client, &pdf_bytes) => result,
        _ = cancellation_token.cancelled() => {
            Err(Error::interrupted("Extraction cancelled by user"))
        }
    };
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let campaigns = extraction?;
    if !quiet {
        println!(
            "{} {} campaigns extracted from {}",
            "✓".green().bold(),
            campaigns.len(),
            args.file.display()
        );
    }

    write_records(&args.output, &campaigns)
}

/// Parse or extract a report, then generate an executive summary
async fn run_summarize(
    args: SummarizeArgs,
    quiet: bool,
    cancellation_token: &CancellationToken,
) -> Result<()> {
    let config = load_config(args.config_file.as_deref(), args.api_key.as_deref())?;
    let client = GeminiClient::from_config(&config)?;
    let platform: Platform = args.platform.into();

    // Obtain records through the path matching the platform's export
    // format: text parsing for Meta, document extraction for Google.
    let campaigns = match platform {
        Platform::Meta => {
            let text = read_text_report(&args.file)?;
            let result = ReportParser::new().parse_text(&text, platform);
            if !quiet {
                print_parse_report(&args.file, &result.stats);
            }
            result.campaigns
        }
        Platform::Google => {
            let pdf_bytes = std::fs::read(&args.file).map_err(|e| {
                Error::io(format!("Failed to read document {}", args.file.display()), e)
            })?;

            let spinner = network_spinner(quiet, "Extracting campaigns from document...");
            let extraction = tokio::select! {
                result = extract_campaigns(&client, &pdf_bytes) => result,
                _ = cancellation_token.cancelled() => {
                    Err(Error::interrupted("Extraction cancelled by user"))
                }
            };
            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }
            extraction?
        }
    };

    let stats = compute_stats(&campaigns, platform);

    let spinner = network_spinner(quiet, "Generating executive summary...");
    let summary = tokio::select! {
        summary = executive_summary(&client, &stats) => summary,
        _ = cancellation_token.cancelled() => {
            return Err(Error::interrupted("Summary generation cancelled by user"));
        }
    };
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let summary = summary
        .ok_or_else(|| Error::summary("No summary could be generated for this report"))?;

    if !quiet {
        print_summary(&summary, &stats);
    }

    if args.output.output.is_some() {
        let document = serde_json::json!({
            "stats": stats,
            "summary": summary,
            "campaigns": campaigns,
        });
        write_json(&args.output, &document)?;
    }

    Ok(())
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("adshub_processor={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load layered configuration and apply CLI overrides
fn load_config(config_file: Option<&Path>, api_key: Option<&str>) -> Result<Config> {
    let mut config = Config::load_layered(config_file)?;

    if let Some(key) = api_key {
        config.gemini.api_key = key.to_string();
    }

    Ok(config)
}

/// Read a text report file as UTF-8
fn read_text_report(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read report {}", path.display()), e))
}

/// Spinner shown while a network call is in flight
fn network_spinner(quiet: bool, message: &str) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("spinner template is valid"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    Some(pb)
}

/// Print the parse diagnostics report
fn print_parse_report(file: &Path, stats: &ParseStats) {
    println!(
        "{} • {}",
        "Ads Hub Processor".bold(),
        Local::now().format("%Y-%m-%d")
    );
    println!("Report: {}", file.display());
    println!(
        "  Delimiter '{}', header at line {}",
        stats.delimiter, stats.header_row
    );
    println!(
        "  {} campaigns from {} rows ({} filtered as totals/blank)",
        stats.campaigns_parsed.to_string().green().bold(),
        stats.total_rows,
        stats.rows_filtered
    );

    if stats.has_unresolved_roles() {
        let roles: Vec<String> = stats
            .unresolved_roles
            .iter()
            .map(|r| r.to_string())
            .collect();
        println!(
            "  {} unresolved columns: {} (values defaulted to zero)",
            "warning:".yellow().bold(),
            roles.join(", ")
        );
    }
}

/// Print the executive summary narrative
fn print_summary(summary: &crate::app::models::AnalysisSummary, stats: &crate::app::models::DashboardStats) {
    println!();
    println!("{}", "Executive Summary".bold());
    println!("{}", summary.overview.italic());
    println!();

    println!("{}", "Strengths".green().bold());
    for item in &summary.strengths {
        println!("  • {}", item);
    }

    println!("{}", "Weaknesses".red().bold());
    for item in &summary.weaknesses {
        println!("  • {}", item);
    }

    println!("{}", "Recommendations".blue().bold());
    for item in &summary.recommendations {
        println!("  → {}", item);
    }

    println!();
    println!(
        "Total spend {:.2}, total results {:.2}, average cost per result {:.2}",
        stats.total_spend, stats.total_results, stats.avg_cost_per_result
    );
}

/// Write campaign records as JSON to the selected destination
fn write_records(output: &OutputArgs, campaigns: &[Campaign]) -> Result<()> {
    let value = serde_json::to_value(campaigns)?;
    write_json(output, &value)
}

/// Write a JSON value to the output file or stdout
fn write_json(output: &OutputArgs, value: &serde_json::Value) -> Result<()> {
    let rendered = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match &output.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| Error::io(format!("Failed to write output {}", path.display()), e))?;
            info!("Wrote output to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
