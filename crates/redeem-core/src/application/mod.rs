//! Application layer for redeem.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RedemptionService, CatalogService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    Assessment, // DTO: course plus per-token verdicts
    CatalogService,
    RedemptionService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{CourseCatalog, TokenInventory};

pub use error::ApplicationError;
