use crate::{ApiResult, AppState};

use ei_core::{FinalStatusByYear, Repo, final_status_by_year};
use ei_db::StatusChangeRepository;

use axum::{Json, extract::State};

/// GET /api/new/final-status-by-year
///
/// The status each EIP ended every year in, grouped by year.
pub async fn get_final_status_by_year(
    State(state): State<AppState>,
) -> ApiResult<Json<FinalStatusByYear>> {
    let repo = StatusChangeRepository::new(state.pool.clone());
    let changes = repo.find_all(Repo::Eip).await?;

    Ok(Json(FinalStatusByYear {
        eip: final_status_by_year(&changes),
    }))
}
