//! redeem Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for deciding which
//! of a user's tokens can be redeemed for a course, following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            redeem-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (RedemptionService, CatalogService)    │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: CourseCatalog, Inventory)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     redeem-adapters (Infrastructure)    │
//! │ (InMemoryCatalog, DataLoader, samples)  │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Course, Token, ScopePolicy, Rules)    │
//! │         No I/O, no async                │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use redeem_core::domain::{
//!     Amount, Category, Course, CourseId, ScopePolicy, Token, TokenId, find_eligible_tokens,
//! };
//!
//! let course = Course::new(CourseId::new(1), Category::new("programming"), Amount::new(75));
//! let tokens = vec![
//!     Token::new(TokenId::new(1), Amount::new(100), "PREMIUM", ScopePolicy::courses([1u64, 2, 3])),
//!     Token::new(TokenId::new(2), Amount::new(50), "BASIC", ScopePolicy::Universal),
//! ];
//!
//! let eligible = find_eligible_tokens(&tokens, &course);
//! assert_eq!(eligible.len(), 1);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        Assessment, CatalogService, RedemptionService,
        ports::{CourseCatalog, TokenInventory},
    };
    pub use crate::domain::{
        Amount, Category, Course, CourseId, EligibilityRule, Evaluator, Rejection, ScopePolicy,
        Token, TokenId, UserId, Verdict, find_eligible_tokens, is_eligible,
    };
    pub use crate::error::{RedeemError, RedeemResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
