//! Eligibility rules for one (token, course) pair.
//!
//! Scope and affordability are independent rules. An [`Evaluator`] runs an
//! ordered list of them; a token is eligible when every rule passes.
//!
//! ```text
//! is_eligible(token, course) = token.scope matches course
//!                            && token.value >= course.cost
//! ```
//!
//! ## Adding a rule
//!
//! Implement [`EligibilityRule`] and append it with [`Evaluator::with_rule`].
//! Existing rules are untouched.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::{Course, Token},
    value_objects::Amount,
};

/// Why a rule refused a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
#[non_exhaustive]
pub enum Rejection {
    /// The token's scope does not cover the course.
    OutOfScope,
    /// The token is worth less than the course costs.
    InsufficientValue { value: Amount, cost: Amount },
    /// Rejected by a rule outside the standard set.
    Custom { rule: &'static str, detail: String },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfScope => f.write_str("course is outside the token's scope"),
            Self::InsufficientValue { value, cost } => {
                write!(f, "token value {} is below course cost {}", value, cost)
            }
            Self::Custom { rule, detail } => write!(f, "{}: {}", rule, detail),
        }
    }
}

/// A single eligibility predicate.
pub trait EligibilityRule: Send + Sync + fmt::Debug {
    /// Short stable name, used in logs.
    fn name(&self) -> &'static str;

    /// `None` when the token passes this rule.
    fn check(&self, token: &Token, course: &Course) -> Option<Rejection>;
}

/// The token's scope must cover the course.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopeRule;

impl EligibilityRule for ScopeRule {
    fn name(&self) -> &'static str {
        "scope"
    }

    fn check(&self, token: &Token, course: &Course) -> Option<Rejection> {
        (!token.covers(course)).then_some(Rejection::OutOfScope)
    }
}

/// The token's value must be at least the course cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct AffordabilityRule;

impl EligibilityRule for AffordabilityRule {
    fn name(&self) -> &'static str {
        "affordability"
    }

    fn check(&self, token: &Token, course: &Course) -> Option<Rejection> {
        (!token.value().covers(course.cost())).then(|| Rejection::InsufficientValue {
            value: token.value(),
            cost: course.cost(),
        })
    }
}

/// Outcome of running every rule against one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub token: Token,
    pub rejections: Vec<Rejection>,
}

impl Verdict {
    pub fn is_eligible(&self) -> bool {
        self.rejections.is_empty()
    }
}

/// Ordered composition of [`EligibilityRule`]s.
#[derive(Debug)]
pub struct Evaluator {
    rules: Vec<Box<dyn EligibilityRule>>,
}

impl Evaluator {
    /// Scope then affordability.
    pub fn standard() -> Self {
        Self {
            rules: vec![Box::new(ScopeRule), Box::new(AffordabilityRule)],
        }
    }

    /// An evaluator with no rules: every token is eligible.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule. Rules run in insertion order.
    pub fn with_rule(mut self, rule: impl EligibilityRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Whether every rule accepts `token` for `course`. Stops at the first refusal.
    pub fn is_eligible(&self, token: &Token, course: &Course) -> bool {
        self.rules.iter().all(|rule| rule.check(token, course).is_none())
    }

    /// Run every rule and collect all refusals.
    pub fn verdict(&self, token: &Token, course: &Course) -> Verdict {
        let rejections = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(token, course))
            .collect();

        Verdict {
            token: token.clone(),
            rejections,
        }
    }

    /// Eligible tokens from `tokens`, in input order.
    pub fn eligible<'a>(
        &'a self,
        tokens: &'a [Token],
        course: &'a Course,
    ) -> impl Iterator<Item = &'a Token> + 'a {
        tokens.iter().filter(move |t| self.is_eligible(t, course))
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::standard()
    }
}

/// Standard eligibility check: scope covers the course and value covers the cost.
pub fn is_eligible(token: &Token, course: &Course) -> bool {
    Evaluator::standard().is_eligible(token, course)
}
