//! Console report lines for each exercise

use chrono::NaiveDate;
use console::style;
use finance::{Money, Transaction};
use grading::Student;
use healthcare::{Patient, Prescription};
use inventory::{ElectronicItem, GroceryItem, InventoryItem};
use shared::{Entity, Stocked};

/// Print a styled section header
pub fn header(title: &str) {
    println!();
    println!("{}", style(title).bold().cyan());
}

pub fn transaction_line(transaction: &Transaction) -> String {
    format!(
        "Transaction ID: {}, Date: {}, Amount: {}, Category: {}",
        transaction.id,
        transaction.date.format("%Y-%m-%d %H:%M"),
        transaction.amount,
        transaction.category
    )
}

pub fn balance_line(balance: Money) -> String {
    format!("Transaction applied. New balance: {}", balance)
}

pub fn total_spent_line(total: Money) -> String {
    format!("Total spent across all transactions: {}", total)
}

pub fn patient_line(patient: &Patient) -> String {
    format!(
        "ID: {}, Name: {}, Age: {}, Gender: {}",
        patient.id, patient.name, patient.age, patient.gender
    )
}

pub fn prescription_line(prescription: &Prescription) -> String {
    format!(
        "ID: {}, Medication: {}, Date: {}",
        prescription.id,
        prescription.medication,
        prescription.date_issued.format("%Y-%m-%d")
    )
}

pub fn inventory_line(item: &InventoryItem) -> String {
    format!(
        "{} (ID: {}) - Qty: {}, Added: {}",
        item.name(),
        item.id(),
        item.quantity(),
        item.date_added().format("%Y-%m-%d %H:%M")
    )
}

pub fn electronic_line(item: &ElectronicItem) -> String {
    format!(
        "ID: {}, Name: {}, Quantity: {}, Brand: {}, Warranty: {} months",
        item.id(),
        item.name(),
        item.quantity(),
        item.brand(),
        item.warranty_months()
    )
}

/// Grocery stock line; items past their expiry on `today` are flagged
pub fn grocery_line(item: &GroceryItem, today: NaiveDate) -> String {
    let line = format!(
        "ID: {}, Name: {}, Quantity: {}, Expiry Date: {}",
        item.id(),
        item.name(),
        item.quantity(),
        item.expiry_date().format("%Y-%m-%d")
    );
    if item.is_expired(today) {
        format!("{} (expired)", line)
    } else {
        line
    }
}

pub fn student_line(student: &Student) -> String {
    student.report_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_transaction_line() {
        let tx = Transaction::new(1, Money::from_cents(12050), "Groceries")
            .with_date(Utc.with_ymd_and_hms(2024, 1, 15, 8, 5, 0).unwrap());

        assert_eq!(
            transaction_line(&tx),
            "Transaction ID: 1, Date: 2024-01-15 08:05, Amount: $120.50, Category: Groceries"
        );
    }

    #[test]
    fn test_warehouse_lines() {
        let laptop = ElectronicItem::new(1, "Laptop", 10, "Macbook", 24);
        assert_eq!(
            electronic_line(&laptop),
            "ID: 1, Name: Laptop, Quantity: 10, Brand: Macbook, Warranty: 24 months"
        );

        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let oats = GroceryItem::new(1, "Oats", 50, NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
        assert_eq!(
            grocery_line(&oats, today),
            "ID: 1, Name: Oats, Quantity: 50, Expiry Date: 2024-06-08"
        );
    }

    #[test]
    fn test_expired_grocery_is_flagged() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let bacon = GroceryItem::new(2, "Bacon", 30, NaiveDate::from_ymd_opt(2024, 6, 4).unwrap());
        assert_eq!(
            grocery_line(&bacon, today),
            "ID: 2, Name: Bacon, Quantity: 30, Expiry Date: 2024-06-04 (expired)"
        );

        // Expiring today is still sellable
        let jam = GroceryItem::new(3, "Jam", 100, today);
        assert!(!grocery_line(&jam, today).ends_with("(expired)"));
    }

    #[test]
    fn test_total_spent_line() {
        let mut app = finance::FinanceApp::new();
        app.run_demo().unwrap();
        assert_eq!(
            total_spent_line(app.total_spent()),
            "Total spent across all transactions: $470.50"
        );
    }

    #[test]
    fn test_healthcare_lines() {
        let patient = Patient::new(2, "Sarah Connor", 60, "Female");
        assert_eq!(
            patient_line(&patient),
            "ID: 2, Name: Sarah Connor, Age: 60, Gender: Female"
        );

        let prescription =
            Prescription::new(3, 2, "Ibuprofen", NaiveDate::from_ymd_opt(2024, 2, 18).unwrap());
        assert_eq!(
            prescription_line(&prescription),
            "ID: 3, Medication: Ibuprofen, Date: 2024-02-18"
        );
    }

    #[test]
    fn test_inventory_line() {
        let item = InventoryItem::new(4, "Monitor", 7)
            .with_date_added(Utc.with_ymd_and_hms(2024, 3, 1, 14, 30, 0).unwrap());
        assert_eq!(
            inventory_line(&item),
            "Monitor (ID: 4) - Qty: 7, Added: 2024-03-01 14:30"
        );
    }
}
