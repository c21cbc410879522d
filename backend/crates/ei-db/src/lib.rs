pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::download_counter_repository::DownloadCounterRepository;
pub use repositories::status_change_repository::StatusChangeRepository;
pub use repositories::user_repository::UserRepository;
