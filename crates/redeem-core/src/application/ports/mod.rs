//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `redeem-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CourseCatalog`: Course lookup by id and category
//!   - `TokenInventory`: Token holdings per user
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CourseCatalog, TokenInventory};

#[cfg(test)]
pub use output::{MockCourseCatalog, MockTokenInventory};
