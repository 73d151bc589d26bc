//! Classroom - Runs the classroom exercises
//!
//! Usage:
//!   classroom                      - Run every exercise in sequence
//!   classroom all                  - Same as above
//!   classroom finance              - Transaction processing demo
//!   classroom healthcare [--patient-id N]
//!   classroom inventory [--file PATH]
//!   classroom grading [--input PATH] [--output PATH]
//!   classroom warehouse            - Typed inventory repositories

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cli::commands::{
    AllCommand, FinanceCommand, GradingCommand, HealthcareCommand, InventoryCommand,
    WarehouseCommand,
};
use shared::ClassroomConfig;
use tracing::debug;

#[derive(Parser)]
#[command(name = "classroom")]
#[command(about = "Classroom exercises: finance, healthcare, inventory, grading, warehouse")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file (defaults apply when absent)
    #[arg(short, long, global = true, default_value = "classroom.json")]
    config: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every exercise in sequence
    All(AllCommand),
    /// Transaction processing and account balances
    Finance(FinanceCommand),
    /// Patient and prescription lookup
    Healthcare(HealthcareCommand),
    /// Inventory log persistence round trip
    Inventory(InventoryCommand),
    /// CSV scores to grade report
    Grading(GradingCommand),
    /// Electronics and grocery stock
    Warehouse(WarehouseCommand),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ClassroomConfig::load_or_default(Some(cli.config.as_path()))?;

    // Initialize logging
    cli::logging::init(&config.log_filter);
    debug!(?config, "configuration loaded");

    match cli.command {
        Some(Commands::All(cmd)) => cmd.run(&config),
        Some(Commands::Finance(cmd)) => cmd.run(),
        Some(Commands::Healthcare(cmd)) => cmd.run(),
        Some(Commands::Inventory(cmd)) => cmd.run(&config),
        Some(Commands::Grading(cmd)) => cmd.run(&config),
        Some(Commands::Warehouse(cmd)) => cmd.run(),
        None => AllCommand::default().run(&config),
    }
}
