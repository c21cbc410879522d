pub mod final_status;
pub mod repo;
pub mod status_aggregation;
pub mod status_change;
pub mod tier;
pub mod user_account;
pub mod user_patch;
pub mod user_record;
