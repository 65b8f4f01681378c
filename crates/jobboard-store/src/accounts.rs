//! Typed repository for account records.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use jobboard_models::{Account, AccountId};

use crate::error::{StoreError, StoreResult};

/// Repository for accounts, with a uniqueness constraint on email.
///
/// Email uniqueness is enforced under the write lock at insert and update
/// time, so it holds even for concurrent registrations.
#[derive(Clone, Default)]
pub struct AccountRepository {
    inner: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl AccountRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account. Fails if the email is already registered.
    pub async fn insert(&self, account: Account) -> StoreResult<Account> {
        let mut map = self.inner.write().await;
        if map.values().any(|a| a.email == account.email) {
            return Err(StoreError::unique_violation(format!(
                "account email '{}'",
                account.email
            )));
        }
        map.insert(account.id.clone(), account.clone());
        info!(account_id = %account.id, role = %account.role, "Created account record");
        Ok(account)
    }

    /// Get an account by ID.
    pub async fn get(&self, id: &AccountId) -> StoreResult<Option<Account>> {
        Ok(self.inner.read().await.get(id).cloned())
    }

    /// Find an account by its exact email key.
    pub async fn find_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    /// Replace an existing account record, refreshing `updated_at`.
    ///
    /// Single-record read-modify-write with no version check; concurrent
    /// updates to the same account are last-write-wins.
    pub async fn update(&self, mut account: Account) -> StoreResult<Account> {
        let mut map = self.inner.write().await;
        if !map.contains_key(&account.id) {
            return Err(StoreError::not_found(format!("account {}", account.id)));
        }
        if map
            .values()
            .any(|a| a.email == account.email && a.id != account.id)
        {
            return Err(StoreError::unique_violation(format!(
                "account email '{}'",
                account.email
            )));
        }
        account.updated_at = Utc::now();
        map.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    /// Delete an account outright.
    pub async fn delete(&self, id: &AccountId) -> StoreResult<()> {
        let mut map = self.inner.write().await;
        map.remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(format!("account {id}")))
    }

    /// All accounts, unordered.
    pub async fn list_all(&self) -> StoreResult<Vec<Account>> {
        Ok(self.inner.read().await.values().cloned().collect())
    }

    /// Field-match query over all accounts.
    pub async fn find_where<F>(&self, predicate: F) -> StoreResult<Vec<Account>>
    where
        F: Fn(&Account) -> bool,
    {
        Ok(self
            .inner
            .read()
            .await
            .values()
            .filter(|a| predicate(a))
            .cloned()
            .collect())
    }
}
