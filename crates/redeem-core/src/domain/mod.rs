// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for redeem.
//!
//! This module contains pure business logic: catalog types, scope policies,
//! eligibility rules and the eligible-token lookup. All data access is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities**: `Course` and `Token` are read-only after construction
//! - **Total predicates**: matching and eligibility never fail
//!
// Public API - what the world sees
pub mod eligibility;
pub mod entities;
pub mod error;
pub mod lookup;
pub mod scope;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use eligibility::{
    AffordabilityRule, EligibilityRule, Evaluator, Rejection, ScopeRule, Verdict, is_eligible,
};
pub use entities::{Course, Token};
pub use error::{DomainError, ErrorCategory};
pub use lookup::{find_eligible_tokens, find_eligible_tokens_with};
pub use scope::ScopePolicy;
pub use validation::DomainValidator;
pub use value_objects::{Amount, Category, CourseId, TokenId, UserId};
