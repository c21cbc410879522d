pub mod category_bucket;
pub mod status_bucket;
