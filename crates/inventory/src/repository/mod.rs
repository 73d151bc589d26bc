//! Repository Adapters - Implementations of the keyed repository contract
//!
//! These implement `shared::Repository`.

pub mod in_memory;

pub use in_memory::InMemoryRepository;
