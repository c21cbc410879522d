use crate::{ApiResult, AppState};

use ei_db::DownloadCounterRepository;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadCountResponse {
    pub count: i64,
}

/// POST /api/DownloadCounter
///
/// Usage counter bumped after every chart export.
pub async fn increment_download_counter(
    State(state): State<AppState>,
) -> ApiResult<Json<DownloadCountResponse>> {
    let repo = DownloadCounterRepository::new(state.pool.clone());
    let count = repo.increment(&state.api_config.download_counter).await?;

    log::debug!("Download counter '{}' at {}", state.api_config.download_counter, count);

    Ok(Json(DownloadCountResponse { count }))
}
