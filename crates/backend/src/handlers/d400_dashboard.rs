use axum::Json;
use contracts::dashboards::DashboardSummary;

use crate::domain::{a001_project, a002_dataset, a003_generation};
use crate::system::auth::extractor::CurrentUser;

/// GET /api/d400/summary
///
/// Project and generation counts are scoped to the signed-in user; the
/// dataset count spans the whole catalog.
pub async fn get_summary(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<DashboardSummary>, axum::http::StatusCode> {
    let projects = a001_project::repository::count_by_user(&claims.sub);
    let datasets = a002_dataset::repository::count_all();
    let generations = a003_generation::repository::count_by_user(&claims.sub);

    match tokio::try_join!(projects, datasets, generations) {
        Ok((projects, datasets, generations)) => Ok(Json(DashboardSummary {
            projects,
            datasets,
            generations,
        })),
        Err(e) => {
            tracing::error!("Failed to compute dashboard summary: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
