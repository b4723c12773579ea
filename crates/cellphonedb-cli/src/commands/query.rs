//! Interaction query command

use super::{open_existing, DEFAULT_DB};
use cellphonedb_core::delimited::write_table;
use cellphonedb_core::{MultidataId, RepositoryRegistry, Table};
use cellphonedb_store::SqliteSource;
use clap::{Args, Subcommand, ValueEnum};
use std::io::Write;

#[derive(Debug, Args)]
pub struct QueryArgs {
    #[command(subcommand)]
    pub command: QueryCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueryCommand {
    /// List interactions, optionally those involving one multidata entity
    Interactions(InteractionsArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Csv,
    Json,
}

#[derive(Debug, Args)]
pub struct InteractionsArgs {
    /// Only interactions where this id is either participant
    #[arg(long)]
    pub multidata_id: Option<MultidataId>,

    /// Join both participants' multidata columns onto each row
    #[arg(long)]
    pub expanded: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    pub format: OutputFormat,

    #[arg(long, env = "CELLPHONEDB_DB", default_value = DEFAULT_DB)]
    pub db: String,
}

pub fn execute(args: QueryArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        QueryCommand::Interactions(interactions_args) => execute_interactions(interactions_args),
    }
}

fn execute_interactions(args: InteractionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_existing(&args.db)?;
    let registry = RepositoryRegistry::new(SqliteSource::new(&conn));
    let repo = registry.interactions();

    let table = match (args.multidata_id, args.expanded) {
        (None, false) => repo.get_all()?,
        (None, true) => repo.get_all_expanded()?,
        (Some(id), false) => repo.get_interactions_by_multidata_id(id)?,
        (Some(id), true) => repo.get_interactions_multidata_by_multidata_id(id)?,
    };

    print_table(&table, args.format)
}

fn print_table(table: &Table, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Tsv => write_table(table, &mut out, '\t')?,
        OutputFormat::Csv => write_table(table, &mut out, ',')?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &table.to_records())?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
