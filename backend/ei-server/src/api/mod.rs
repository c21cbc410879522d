pub mod download_counter;
pub mod error;
pub mod extractors;
pub mod final_status;
pub mod method;
pub mod status_changes;
pub mod subscriptions;
pub mod users;
