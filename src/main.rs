use adshub_processor::cli::{args::Args, commands};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic with signal handling
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Create cancellation token for coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        // Set up graceful shutdown handling
        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");

            // Cancel all operations when Ctrl+C is received
            cancellation_token.cancel();
        };

        // Run the main command with cancellation support
        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(adshub_processor::Error::interrupted(
                    "Processing interrupted by user".to_string(),
                ))
            }
        }
    });

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Ads Hub Processor - Advertising Report Normalizer");
    println!("=================================================");
    println!();
    println!("Normalize advertising performance report exports (Meta Ads CSV,");
    println!("Google Ads PDF) into typed campaign records, and generate");
    println!("AI-assisted executive summaries.");
    println!();
    println!("USAGE:");
    println!("    adshub-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a delimited text report into campaign records");
    println!("    extract     Extract campaign records from a PDF report via Gemini");
    println!("    summarize   Parse or extract, then generate an executive summary");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a Meta Ads CSV export to JSON on stdout:");
    println!("    adshub-processor parse informe.csv --pretty");
    println!();
    println!("    # Extract campaigns from a Google Ads PDF report:");
    println!("    adshub-processor extract reporte.pdf --output campaigns.json");
    println!();
    println!("    # Generate an executive summary for a parsed report:");
    println!("    adshub-processor summarize informe.csv --platform meta");
    println!();
    println!("For detailed help on any command, use:");
    println!("    adshub-processor <COMMAND> --help");
}
