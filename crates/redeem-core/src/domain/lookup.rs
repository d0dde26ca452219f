//! Eligible-token lookup.

use crate::domain::{
    eligibility::Evaluator,
    entities::{Course, Token},
};

/// Tokens from `tokens` that may be redeemed for `course`.
///
/// Stable: the output keeps the input order. An empty input yields an empty
/// output. `course` must already be resolved; not-found is the catalog's
/// concern.
pub fn find_eligible_tokens(tokens: &[Token], course: &Course) -> Vec<Token> {
    find_eligible_tokens_with(&Evaluator::standard(), tokens, course)
}

/// [`find_eligible_tokens`] under a caller-supplied rule set.
pub fn find_eligible_tokens_with(
    evaluator: &Evaluator,
    tokens: &[Token],
    course: &Course,
) -> Vec<Token> {
    evaluator.eligible(tokens, course).cloned().collect()
}
