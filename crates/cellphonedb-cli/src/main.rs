//! CellPhoneDB CLI
//!
//! Command-line interface for the interaction database and plots

use cellphonedb_core::logging_facility::{init, Profile};
use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "cellphonedb")]
#[command(about = "CellPhoneDB - ligand-receptor interactions and plots", long_about = None)]
struct Cli {
    /// Log output format on stderr
    #[arg(long, global = true, value_enum, env = "CELLPHONEDB_LOG_FORMAT", default_value_t = LogFormat::Human)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database schema operations
    Database(commands::database::DatabaseArgs),
    /// Read interactions from the database
    Query(commands::query::QueryArgs),
    /// Write the presentation table of interactions
    Export(commands::export::ExportArgs),
    /// Plot analysis results with R
    Plot(commands::plot::PlotArgs),
}

fn main() {
    let cli = Cli::parse();

    init(match cli.log_format {
        LogFormat::Human => Profile::Development,
        LogFormat::Json => Profile::Production,
    });

    let result = match cli.command {
        Commands::Database(args) => commands::database::execute(args),
        Commands::Query(args) => commands::query::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Plot(args) => commands::plot::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
