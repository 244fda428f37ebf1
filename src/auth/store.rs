use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::model::UserAccount;

/// Persistence boundary for user accounts.
///
/// `save` inserts a new account or overwrites the existing record for the
/// same account; each write is assumed atomic per record by the backend.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool>;
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserAccount>>;
    async fn save(&self, account: &UserAccount) -> anyhow::Result<()>;
}

/// In-memory store keyed by email, for tests and local runs.
#[derive(Default)]
pub struct MemoryUserStore {
    accounts: RwLock<HashMap<String, UserAccount>>,
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn exists_by_email(&self, email: &str) -> anyhow::Result<bool> {
        Ok(self.accounts.read().await.contains_key(email))
    }

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<UserAccount>> {
        Ok(self.accounts.read().await.get(email).cloned())
    }

    async fn save(&self, account: &UserAccount) -> anyhow::Result<()> {
        self.accounts
            .write()
            .await
            .insert(account.email.clone(), account.clone());
        Ok(())
    }
}
