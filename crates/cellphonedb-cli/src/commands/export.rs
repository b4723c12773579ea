//! Interaction export command

use super::{open_existing, DEFAULT_DB};
use cellphonedb_core::delimited::write_table_to_path;
use cellphonedb_core::{interaction_exporter, RepositoryRegistry};
use cellphonedb_store::SqliteSource;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub command: ExportCommand,
}

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Expanded interactions reduced to the presentation columns
    Interactions(InteractionsArgs),
}

#[derive(Debug, Args)]
pub struct InteractionsArgs {
    /// Output file; `.csv` is comma separated, anything else tab separated
    #[arg(long, default_value = "./out/interactions.tsv")]
    pub output: PathBuf,

    #[arg(long, env = "CELLPHONEDB_DB", default_value = DEFAULT_DB)]
    pub db: String,
}

pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        ExportCommand::Interactions(interactions_args) => execute_interactions(interactions_args),
    }
}

fn execute_interactions(args: InteractionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let conn = open_existing(&args.db)?;
    let registry = RepositoryRegistry::new(SqliteSource::new(&conn));

    let mut expanded = registry.interactions().get_all_expanded()?;
    let exported = interaction_exporter::call(&mut expanded);

    write_table_to_path(&exported, &args.output)?;

    println!(
        "Exported {} interactions to {}",
        exported.len(),
        args.output.display()
    );

    Ok(())
}
