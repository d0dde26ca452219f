//! In-memory token inventory.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use redeem_core::{
    application::{ApplicationError, ports::TokenInventory},
    domain::{DomainError, DomainValidator as validator, Token, UserId},
    error::RedeemResult,
};

use crate::sample_data;

/// Thread-safe in-memory token holdings, keyed by user.
///
/// Token ids are unique across all users. Each user's tokens keep the order
/// in which they were granted.
#[derive(Debug, Clone)]
pub struct InMemoryInventory {
    inner: Arc<RwLock<HashMap<UserId, Vec<Token>>>>,
}

impl InMemoryInventory {
    /// Create a new empty inventory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create an inventory from `(owner, token)` pairs.
    pub fn from_holdings(holdings: Vec<(UserId, Token)>) -> RedeemResult<Self> {
        validator::validate_inventory(holdings.iter().map(|(_, t)| t))?;

        let inventory = Self::new();
        {
            let mut inner = inventory
                .inner
                .write()
                .map_err(|_| ApplicationError::StoreLockError)?;
            for (user, token) in holdings {
                inner.entry(user).or_default().push(token);
            }
        }
        Ok(inventory)
    }

    /// Create an inventory with the sample holdings loaded.
    pub fn with_sample() -> RedeemResult<Self> {
        Self::from_holdings(sample_data::holdings()?)
    }

    /// Grant a token to `user`. Fails if the token id is already held by anyone.
    pub fn grant(&self, user: UserId, token: Token) -> RedeemResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if inner.values().flatten().any(|t| t.id() == token.id()) {
            return Err(DomainError::DuplicateToken {
                id: token.id().get(),
            }
            .into());
        }

        inner.entry(user).or_default().push(token);
        Ok(())
    }

    /// Users holding at least one token, ascending.
    pub fn users(&self) -> RedeemResult<Vec<UserId>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let mut users: Vec<UserId> = inner
            .iter()
            .filter(|(_, tokens)| !tokens.is_empty())
            .map(|(user, _)| *user)
            .collect();
        users.sort();
        Ok(users)
    }

    /// Total number of tokens across users.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenInventory for InMemoryInventory {
    fn find_for_user(&self, user: UserId) -> RedeemResult<Vec<Token>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner.get(&user).cloned().unwrap_or_default())
    }
}
