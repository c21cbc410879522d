pub mod download_counter_repository;
pub mod status_change_repository;
pub mod user_repository;
