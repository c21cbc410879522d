#![allow(dead_code)]

use ei_client::{
    AuthSession, CacheResult, Client, LocalStore, MemoryStore, ProfileController, USER_KEY,
    UserCache,
};
use ei_core::{Tier, UserRecord};

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Counts sign-out calls
#[derive(Default)]
pub struct RecordingAuth {
    sign_outs: AtomicUsize,
}

impl RecordingAuth {
    pub fn sign_outs(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthSession for RecordingAuth {
    async fn sign_out(&self) -> CacheResult<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

pub struct Harness {
    pub controller: ProfileController,
    pub store: Arc<MemoryStore>,
    pub auth: Arc<RecordingAuth>,
}

impl Harness {
    pub fn cached_user(&self) -> Option<UserRecord> {
        self.store
            .get(USER_KEY)
            .unwrap()
            .map(|json| serde_json::from_str(&json).unwrap())
    }
}

pub fn user(tier: Tier) -> UserRecord {
    UserRecord {
        id: "user-1".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        image: "https://example.com/alice.png".to_string(),
        tier,
        wallet_address: None,
    }
}

/// Controller against `server_uri` with `cached` already in the store
pub fn harness(server_uri: &str, cached: Option<&UserRecord>) -> Harness {
    let store = Arc::new(MemoryStore::new());
    if let Some(record) = cached {
        store
            .set(USER_KEY, &serde_json::to_string(record).unwrap())
            .unwrap();
    }

    let auth = Arc::new(RecordingAuth::default());
    let controller = ProfileController::new(
        Client::new(server_uri, Some("user-1")),
        UserCache::new(store.clone()),
        auth.clone(),
    );

    Harness {
        controller,
        store,
        auth,
    }
}
