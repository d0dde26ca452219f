use std::fmt;

use serde::Serialize;

use crate::domain::{
    entities::Course,
    scope::ScopePolicy,
    value_objects::{Amount, TokenId},
};

/// A redeemable token held by a user.
///
/// `category` is a free-form tier label ("PREMIUM", "gold", ...). It is kept
/// for display only and never takes part in matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    id: TokenId,
    value: Amount,
    category: String,
    scope: ScopePolicy,
}

impl Token {
    pub fn new(id: TokenId, value: Amount, category: impl Into<String>, scope: ScopePolicy) -> Self {
        Self {
            id,
            value,
            category: category.into(),
            scope,
        }
    }

    pub fn id(&self) -> TokenId {
        self.id
    }

    pub fn value(&self) -> Amount {
        self.value
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn scope(&self) -> &ScopePolicy {
        &self.scope
    }

    /// Whether the token's scope covers `course`, ignoring price.
    pub fn covers(&self, course: &Course) -> bool {
        self.scope.matches(course)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.category.is_empty() {
            write!(f, "token {} worth {} for {}", self.id, self.value, self.scope)
        } else {
            write!(
                f,
                "token {} [{}] worth {} for {}",
                self.id, self.category, self.value, self.scope
            )
        }
    }
}
