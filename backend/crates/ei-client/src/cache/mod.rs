pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod local_store;
pub(crate) mod memory_store;
pub(crate) mod user_cache;

pub use error::{CacheError, Result as CacheResult};
pub use file_store::FileStore;
pub use local_store::LocalStore;
pub use memory_store::MemoryStore;
pub use user_cache::{CachedUser, USER_KEY, UserCache};
