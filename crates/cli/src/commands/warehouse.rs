//! classroom warehouse command

use chrono::{Local, NaiveDate};
use clap::Args;
use inventory::{increase_stock, remove_item, WarehouseManager};
use shared::{Repository, RepositoryError};

use crate::report;

#[derive(Debug, Default, Args)]
pub struct WarehouseCommand {}

impl WarehouseCommand {
    pub fn run(&self) -> anyhow::Result<()> {
        report::header("Warehouse Inventory Management");

        let today = Local::now().date_naive();
        let mut manager = WarehouseManager::new();
        manager.seed_data(today)?;
        print_all(&manager, today);

        println!();
        report_stock(3, increase_stock(manager.electronics_mut(), 3, 5));
        report_stock(1, increase_stock(manager.groceries_mut(), 1, 25));
        report_stock(99, increase_stock(manager.groceries_mut(), 99, 10));

        report_removal(2, remove_item(manager.electronics_mut(), 2).map(|_| ()));
        report_removal(7, remove_item(manager.groceries_mut(), 7).map(|_| ()));

        println!();
        print_all(&manager, today);

        Ok(())
    }
}

fn print_all(manager: &WarehouseManager, today: NaiveDate) {
    println!("Electronic Items:");
    for item in manager.electronics().list_all() {
        println!("{}", report::electronic_line(&item));
    }

    println!("Grocery Items:");
    for item in manager.groceries().list_all() {
        println!("{}", report::grocery_line(&item, today));
    }
}

fn report_stock(id: u32, result: Result<u32, RepositoryError>) {
    match result {
        Ok(quantity) => println!("Stock increased for item ID {}. New quantity: {}", id, quantity),
        Err(err @ RepositoryError::InvalidQuantity { .. }) => {
            println!("Quantity error for item ID {}: {}", id, err)
        }
        Err(err) => println!("{}", err),
    }
}

fn report_removal(id: u32, result: Result<(), RepositoryError>) {
    match result {
        Ok(()) => println!("Item with ID {} removed successfully.", id),
        Err(err) => println!("Error removing item: {}", err),
    }
}
