//! Database schema command

use super::DEFAULT_DB;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct DatabaseArgs {
    #[command(subcommand)]
    pub command: DatabaseCommand,
}

#[derive(Debug, Subcommand)]
pub enum DatabaseCommand {
    /// Create the schema or apply pending migrations
    Init(InitArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, env = "CELLPHONEDB_DB", default_value = DEFAULT_DB)]
    pub db: String,
}

pub fn execute(args: DatabaseArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        DatabaseCommand::Init(init_args) => execute_init(init_args),
    }
}

fn execute_init(args: InitArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = cellphonedb_store::db::open(&args.db)?;
    cellphonedb_store::db::configure(&conn)?;
    cellphonedb_store::migrations::apply_migrations(&mut conn)?;

    let applied = cellphonedb_store::migrations::applied_migrations(&conn)?;

    println!("Database ready: {}", args.db);
    for migration_id in applied {
        println!("  migration: {}", migration_id);
    }

    Ok(())
}
