use clap::Parser;
use spectrum_normalizer::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Spectrum Normalizer - RF Capture Analysis");
    println!("=========================================");
    println!();
    println!("Normalize messy, delimited RF spectrum captures (frequency/power tables)");
    println!("into stable reports with summary statistics and sample windows.");
    println!();
    println!("USAGE:");
    println!("    spectrum-normalizer <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    analyze     Analyze capture files and emit normalized reports");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Analyze a single capture and print a summary:");
    println!("    spectrum-normalizer analyze sweep.csv");
    println!();
    println!("    # Emit the full report as JSON:");
    println!("    spectrum-normalizer analyze sweep.csv --format json");
    println!();
    println!("    # Map ambiguous columns manually after a detection failure:");
    println!("    spectrum-normalizer analyze sweep.csv --freq-col 0 --power-col 1");
    println!();
    println!("For detailed help on any command, use:");
    println!("    spectrum-normalizer <COMMAND> --help");
}
