//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "which tokens can this user spend on this course".

pub mod catalog_service;
pub mod redemption_service;

pub use catalog_service::CatalogService;
pub use redemption_service::{Assessment, RedemptionService};
