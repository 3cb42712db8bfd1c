use axum::extract::Path;
use axum::Json;

use crate::domain::a003_generation::{self, service::GenerationError};
use crate::system::auth::extractor::CurrentUser;

/// POST /api/generation
pub async fn create(
    CurrentUser(claims): CurrentUser,
    Json(request): Json<contracts::domain::a003_generation::aggregate::GenerationRequest>,
) -> Result<
    Json<contracts::domain::a003_generation::metrics::GenerationWithMetrics>,
    axum::http::StatusCode,
> {
    match a003_generation::service::create(&claims.sub, request).await {
        Ok(result) => Ok(Json(result)),
        Err(GenerationError::InvalidParams(msg)) => {
            tracing::warn!("Generation rejected: {}", msg);
            Err(axum::http::StatusCode::BAD_REQUEST)
        }
        Err(GenerationError::DatasetNotFound) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(GenerationError::Storage(e)) => {
            tracing::error!("Failed to record generation: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/generation
pub async fn list_my(
    CurrentUser(claims): CurrentUser,
) -> Result<
    Json<Vec<contracts::domain::a003_generation::metrics::GenerationWithMetrics>>,
    axum::http::StatusCode,
> {
    match a003_generation::service::list_by_user(&claims.sub).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list generations: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/generation/:id
pub async fn get_by_id(
    CurrentUser(claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<
    Json<contracts::domain::a003_generation::metrics::GenerationWithMetrics>,
    axum::http::StatusCode,
> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a003_generation::service::get_by_id(&claims.sub, uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load generation: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
