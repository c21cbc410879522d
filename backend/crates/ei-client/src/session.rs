use crate::{CacheResult, LocalStore};

use std::sync::Arc;

use async_trait::async_trait;

pub const SESSION_KEY: &str = "session";

/// The authentication layer as seen by the profile page.
///
/// The token itself is opaque here; the controller only signs out.
#[async_trait]
pub trait AuthSession: Send + Sync {
    async fn sign_out(&self) -> CacheResult<()>;
}

/// Session token persisted next to the cached user
#[derive(Clone)]
pub struct StoredSession {
    store: Arc<dyn LocalStore>,
}

impl StoredSession {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    pub fn token(&self) -> CacheResult<Option<String>> {
        Ok(self
            .store
            .get(SESSION_KEY)?
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty()))
    }

    pub fn store_token(&self, token: &str) -> CacheResult<()> {
        self.store.set(SESSION_KEY, token)
    }
}

#[async_trait]
impl AuthSession for StoredSession {
    async fn sign_out(&self) -> CacheResult<()> {
        self.store.remove(SESSION_KEY)
    }
}
