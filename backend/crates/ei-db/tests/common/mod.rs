#![allow(dead_code)]

mod fixtures;
mod test_db;

pub use fixtures::{create_test_account, status_change_at};
pub use test_db::create_test_pool;
