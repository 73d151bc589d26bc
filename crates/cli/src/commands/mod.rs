//! CLI Commands

pub mod all;
pub mod finance;
pub mod grading;
pub mod healthcare;
pub mod inventory;
pub mod warehouse;

pub use self::all::AllCommand;
pub use self::finance::FinanceCommand;
pub use self::grading::GradingCommand;
pub use self::healthcare::HealthcareCommand;
pub use self::inventory::InventoryCommand;
pub use self::warehouse::WarehouseCommand;
