//! Infrastructure adapters for redeem.
//!
//! This crate implements the ports defined in `redeem-core::application::ports`.
//! It contains all file I/O and the built-in sample data.

pub mod catalog;
pub mod data_loader;
pub mod inventory;
pub mod sample_data;

// Re-export commonly used adapters
pub use catalog::InMemoryCatalog;
pub use data_loader::{DataLoader, Dataset};
pub use inventory::InMemoryInventory;
