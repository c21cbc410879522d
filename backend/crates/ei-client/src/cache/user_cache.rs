use crate::{CacheResult, LocalStore};

use std::sync::Arc;

use ei_core::UserRecord;
use log::{info, warn};

pub const USER_KEY: &str = "user";

/// Outcome of reading the cached user. Absent and unreadable are both
/// "not signed in" to the profile page, but are logged differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CachedUser {
    Missing,
    Corrupt(String),
    Found(UserRecord),
}

impl CachedUser {
    pub fn into_record(self) -> Option<UserRecord> {
        match self {
            CachedUser::Found(record) => Some(record),
            CachedUser::Missing | CachedUser::Corrupt(_) => None,
        }
    }
}

/// Typed view over the `user` key of a [`LocalStore`]
#[derive(Clone)]
pub struct UserCache {
    store: Arc<dyn LocalStore>,
}

impl UserCache {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    pub fn load(&self) -> CacheResult<CachedUser> {
        let Some(contents) = self.store.get(USER_KEY)? else {
            info!("No cached user");
            return Ok(CachedUser::Missing);
        };

        match serde_json::from_str::<UserRecord>(&contents) {
            Ok(record) => Ok(CachedUser::Found(record)),
            Err(e) => {
                warn!("Cached user is corrupted: {e}");
                Ok(CachedUser::Corrupt(e.to_string()))
            }
        }
    }

    pub fn save(&self, record: &UserRecord) -> CacheResult<()> {
        let json = serde_json::to_string_pretty(record)?;
        self.store.set(USER_KEY, &json)
    }

    pub fn clear(&self) -> CacheResult<()> {
        self.store.remove(USER_KEY)
    }
}
