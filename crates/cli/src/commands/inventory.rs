//! classroom inventory command

use std::path::PathBuf;

use clap::Args;
use inventory::InventoryApp;
use shared::ClassroomConfig;
use tracing::warn;

use crate::report;

#[derive(Debug, Default, Args)]
pub struct InventoryCommand {
    /// Persistence file (defaults to the configured inventory file)
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl InventoryCommand {
    pub fn run(&self, config: &ClassroomConfig) -> anyhow::Result<()> {
        report::header("Inventory Records");

        let path = self.file.clone().unwrap_or_else(|| config.inventory_path());

        let mut app = InventoryApp::new(&path);
        app.seed_sample_data();
        match app.save_data() {
            Ok(()) => println!("Data saved to {}", path.display()),
            Err(err) => {
                warn!(error = %err, "save failed");
                println!("Error saving file: {}", err);
            }
        }

        // Fresh instance stands in for a new session
        let mut restarted = InventoryApp::new(&path);
        match restarted.load_data() {
            Ok(0) => println!("No saved items found."),
            Ok(count) => println!("Loaded {} items from {}", count, restarted.file_path().display()),
            Err(err) => {
                warn!(error = %err, "load failed");
                println!("Error loading file: {}", err);
            }
        }

        for item in restarted.items() {
            println!("{}", report::inventory_line(&item));
        }

        Ok(())
    }
}
