//! classroom finance command

use clap::Args;
use finance::{Account, FinanceApp};

use crate::report;

#[derive(Debug, Default, Args)]
pub struct FinanceCommand {}

impl FinanceCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        report::header("Finance Management System");

        let mut app = FinanceApp::new();
        let (account, outcomes) = app.run_demo()?;

        for outcome in &outcomes {
            println!("{}", outcome.processed);
        }
        for outcome in &outcomes {
            match &outcome.applied {
                Ok(balance) => println!("{}", report::balance_line(*balance)),
                Err(err) => println!("{}", err),
            }
        }

        println!("Transaction history:");
        for transaction in app.history() {
            println!("{}", report::transaction_line(transaction));
        }
        println!("{}", report::total_spent_line(app.total_spent()));
        println!("Final balance for {}: {}", account.number(), account.balance());

        Ok(())
    }
}
