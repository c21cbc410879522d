//! ei-client library
//!
//! HTTP client for ei-server plus the client-side state the profile page
//! and the status chart need: local user cache, session, controllers.

pub(crate) mod cache;
pub(crate) mod chart;
pub(crate) mod client;
pub(crate) mod profile;
pub(crate) mod session;


pub use cache::{
    CacheError, CacheResult, CachedUser, FileStore, LocalStore, MemoryStore, USER_KEY, UserCache,
};
pub use chart::{ExportReport, StatusChartView};
pub use client::{
    CancelSubscriptionResponse, Client, ClientError, ClientResult, DownloadCountResponse,
    UserStatusResponse,
};
pub use profile::{
    ActionOutcome, BusyFlag, LOGOUT_REDIRECT_DELAY, Navigation, Notification, NotificationLevel,
    ProfileController, ProfileState,
};
pub use session::{AuthSession, SESSION_KEY, StoredSession};
