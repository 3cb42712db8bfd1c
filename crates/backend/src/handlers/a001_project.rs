use axum::Json;

use crate::domain::a001_project;
use crate::system::auth::extractor::CurrentUser;

/// GET /api/project
pub async fn list_my(
    CurrentUser(claims): CurrentUser,
) -> Result<Json<Vec<contracts::domain::a001_project::aggregate::Project>>, axum::http::StatusCode>
{
    match a001_project::service::list_by_user(&claims.sub).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list projects: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/project
pub async fn create(
    CurrentUser(claims): CurrentUser,
    Json(dto): Json<contracts::domain::a001_project::aggregate::ProjectDto>,
) -> Result<Json<contracts::domain::a001_project::aggregate::Project>, axum::http::StatusCode> {
    match a001_project::service::create(&claims.sub, dto).await {
        Ok(project) => Ok(Json(project)),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("Validation failed") {
                tracing::warn!("Project rejected: {}", msg);
                Err(axum::http::StatusCode::BAD_REQUEST)
            } else {
                tracing::error!("Failed to create project: {}", msg);
                Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}
