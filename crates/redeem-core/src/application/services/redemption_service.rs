//! Redemption Service - main application facade.
//!
//! Coordinates the eligible-token workflow:
//! 1. Fetch the user's tokens from the inventory
//! 2. Resolve the course from the catalog (not-found stops here)
//! 3. Run the evaluator over the tokens
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::ports::{CourseCatalog, TokenInventory},
    domain::{Course, CourseId, Evaluator, Token, UserId, Verdict, find_eligible_tokens_with},
    error::RedeemResult,
};

/// A course together with a verdict for every token the user holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub course: Course,
    pub verdicts: Vec<Verdict>,
}

impl Assessment {
    /// Tokens that passed every rule, in inventory order.
    pub fn eligible(&self) -> impl Iterator<Item = &Token> {
        self.verdicts
            .iter()
            .filter(|v| v.is_eligible())
            .map(|v| &v.token)
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}

/// Facade over the catalog, the inventory and the evaluator.
pub struct RedemptionService {
    catalog: Box<dyn CourseCatalog>,
    inventory: Box<dyn TokenInventory>,
    evaluator: Evaluator,
}

impl RedemptionService {
    /// Create a service using the standard evaluator.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use redeem_core::application::RedemptionService;
    /// use redeem_core::domain::{CourseId, UserId};
    ///
    /// let service = RedemptionService::new(
    ///     catalog,   // impl CourseCatalog
    ///     inventory, // impl TokenInventory
    /// );
    /// let tokens = service.available_tokens_for_course(UserId::new(1), CourseId::new(1))?;
    /// ```
    pub fn new(catalog: Box<dyn CourseCatalog>, inventory: Box<dyn TokenInventory>) -> Self {
        Self {
            catalog,
            inventory,
            evaluator: Evaluator::standard(),
        }
    }

    /// Replace the evaluator, e.g. to append extra rules.
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    /// Tokens `user` may redeem for `course_id`, in inventory order.
    ///
    /// Fails with `CourseNotFound` if the catalog does not know the course.
    #[instrument(skip(self), fields(user = %user, course = %course_id))]
    pub fn available_tokens_for_course(
        &self,
        user: UserId,
        course_id: CourseId,
    ) -> RedeemResult<Vec<Token>> {
        let tokens = self.inventory.find_for_user(user)?;
        let course = self.catalog.find_by_id(course_id)?;

        let eligible = find_eligible_tokens_with(&self.evaluator, &tokens, &course);

        info!(
            held = tokens.len(),
            eligible = eligible.len(),
            "Eligible tokens resolved"
        );
        Ok(eligible)
    }

    /// Every token `user` holds, with the rules each one failed for `course_id`.
    #[instrument(skip(self), fields(user = %user, course = %course_id))]
    pub fn assess(&self, user: UserId, course_id: CourseId) -> RedeemResult<Assessment> {
        let tokens = self.inventory.find_for_user(user)?;
        let course = self.catalog.find_by_id(course_id)?;

        let verdicts: Vec<Verdict> = tokens
            .iter()
            .map(|t| self.evaluator.verdict(t, &course))
            .collect();

        for verdict in verdicts.iter().filter(|v| !v.is_eligible()) {
            debug!(token = %verdict.token.id(), rejections = ?verdict.rejections, "Token rejected");
        }

        Ok(Assessment { course, verdicts })
    }

    /// Every token `user` holds.
    pub fn tokens_for_user(&self, user: UserId) -> RedeemResult<Vec<Token>> {
        self.inventory.find_for_user(user)
    }
}
