//! classroom all command - every exercise in sequence

use clap::Args;
use shared::ClassroomConfig;
use tracing::error;

use super::{
    FinanceCommand, GradingCommand, HealthcareCommand, InventoryCommand, WarehouseCommand,
};

#[derive(Debug, Default, Args)]
pub struct AllCommand {
    /// Patient whose prescriptions to show (prompted when omitted)
    #[arg(long)]
    pub patient_id: Option<u32>,
}

impl AllCommand {
    /// Run each exercise; a failing exercise is logged and the rest still run
    pub fn run(&self, config: &ClassroomConfig) -> anyhow::Result<()> {
        let healthcare = HealthcareCommand {
            patient_id: self.patient_id,
        };

        let results = [
            ("finance", FinanceCommand::default().run()),
            ("healthcare", healthcare.run()),
            ("inventory", InventoryCommand::default().run(config)),
            ("grading", GradingCommand::default().run(config)),
            ("warehouse", WarehouseCommand::default().run()),
        ];

        for (exercise, result) in results {
            if let Err(err) = result {
                error!(exercise, error = %err, "exercise failed");
            }
        }

        Ok(())
    }
}
