//! Status aggregation: every status change from the three collections,
//! tagged with its source.

use crate::AppState;

use ei_core::{Repo, StatusAggregation, TaggedStatusChange};
use ei_db::StatusChangeRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const STATUS_FETCH_ERROR: &str = "Error fetching status changes";

async fn load_all(repo: &StatusChangeRepository) -> ei_db::Result<StatusAggregation> {
    let mut aggregation = StatusAggregation::default();

    for source in Repo::ALL {
        let changes = repo.find_all(source).await?;
        aggregation.bucket_mut(source).extend(
            changes
                .into_iter()
                .map(|change| TaggedStatusChange::new(change, source)),
        );
    }

    Ok(aggregation)
}

/// GET /api/new/graphsv3
///
/// All-or-nothing: a failure on any collection yields a generic 500 and no
/// partial data.
pub async fn get_status_changes(State(state): State<AppState>) -> Response {
    let repo = StatusChangeRepository::new(state.pool.clone());

    match load_all(&repo).await {
        Ok(aggregation) => {
            log::debug!("Serving {} status changes", aggregation.total());
            (StatusCode::OK, Json(aggregation)).into_response()
        }
        Err(e) => {
            log::error!("Failed to load status changes: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": STATUS_FETCH_ERROR })),
            )
                .into_response()
        }
    }
}
