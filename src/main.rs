use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;

use sfsync::{db, Describe, DdlGenerator, SyncConfig};

/// Make sql create table statements for a Salesforce object.
#[derive(Parser)]
#[command(name = "sfsync", version, about = "make sql create table statements")]
struct Cli {
    /// Table to create in the target database
    table: String,

    /// Only print the statements to stdout
    #[arg(long)]
    dry_run: bool,

    /// Path to the cached describe payload (defaults to describe/<TABLE>.json)
    #[arg(long)]
    describe: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SyncConfig::from_env();
    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_filter)).init();

    debug!("Analyzing {}", cli.table);
    let path = cli
        .describe
        .unwrap_or_else(|| PathBuf::from(format!("describe/{}.json", cli.table)));
    let desc = Describe::from_file(&path)?;

    let ddl = DdlGenerator::new(&config).create_table_statements(&cli.table, &desc)?;

    if cli.dry_run {
        for statement in &ddl.statements {
            println!("{}", statement);
        }
        return Ok(());
    }

    let mut client = db::connect(&config)?;
    db::execute_ddl(&mut client, &ddl.statements)?;
    Ok(())
}
