//! Token inventory adapters.

mod memory;

pub use memory::InMemoryInventory;
