use crate::CacheResult;

/// Durable string storage keyed by short names.
///
/// Reads and writes are synchronous; the profile page touches one or two
/// keys per action.
pub trait LocalStore: Send + Sync {
    /// `Ok(None)` when the key was never written or has been removed
    fn get(&self, key: &str) -> CacheResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> CacheResult<()>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> CacheResult<()>;
}
