use axum::extract::{Multipart, Path};
use axum::Json;

use crate::domain::a002_dataset;
use crate::system::auth::extractor::CurrentUser;

/// POST /api/dataset/upload (multipart)
///
/// Fields: `project_id`, `name`, `description`, plus one file part. Only
/// the header row of the file is interpreted.
pub async fn upload(
    CurrentUser(_claims): CurrentUser,
    mut multipart: Multipart,
) -> Result<Json<contracts::domain::a002_dataset::aggregate::Dataset>, axum::http::StatusCode> {
    let mut project_id: Option<String> = None;
    let mut name: Option<String> = None;
    let mut description = String::new();
    let mut file_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?
    {
        match field.name().unwrap_or_default() {
            "project_id" => {
                project_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?,
                )
            }
            "name" => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?,
                )
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?
            }
            "file" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let text = field
                    .text()
                    .await
                    .map_err(|_| axum::http::StatusCode::BAD_REQUEST)?;
                if name.is_none() && !file_name.is_empty() {
                    name = Some(file_name);
                }
                file_text = Some(text);
            }
            _ => {}
        }
    }

    let project_id = project_id
        .as_deref()
        .and_then(|s| uuid::Uuid::parse_str(s).ok())
        .ok_or(axum::http::StatusCode::BAD_REQUEST)?;
    let file_text = file_text.ok_or(axum::http::StatusCode::BAD_REQUEST)?;
    let name = name.unwrap_or_else(|| "uploaded.csv".to_string());

    match a002_dataset::service::create_from_upload(project_id, name, description, &file_text)
        .await
    {
        Ok(dataset) => Ok(Json(dataset)),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("Project not found") {
                Err(axum::http::StatusCode::NOT_FOUND)
            } else if msg.contains("Schema derivation failed") {
                tracing::warn!("Upload rejected: {}", msg);
                Err(axum::http::StatusCode::BAD_REQUEST)
            } else {
                tracing::error!("Failed to store dataset: {}", msg);
                Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// POST /api/dataset/template
pub async fn from_template(
    CurrentUser(_claims): CurrentUser,
    Json(request): Json<contracts::domain::a002_dataset::aggregate::TemplateRequest>,
) -> Result<Json<contracts::domain::a002_dataset::aggregate::Dataset>, axum::http::StatusCode> {
    let project_id = match uuid::Uuid::parse_str(&request.project_id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };

    match a002_dataset::service::create_from_template(project_id, &request.template).await {
        Ok(dataset) => Ok(Json(dataset)),
        Err(e) => {
            let msg = e.to_string();
            if msg.contains("Project not found") {
                Err(axum::http::StatusCode::NOT_FOUND)
            } else if msg.contains("Unknown template") {
                Err(axum::http::StatusCode::BAD_REQUEST)
            } else {
                tracing::error!("Failed to store template dataset: {}", msg);
                Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

/// GET /api/dataset/by-project/:project_id
pub async fn list_by_project(
    CurrentUser(_claims): CurrentUser,
    Path(project_id): Path<String>,
) -> Result<Json<Vec<contracts::domain::a002_dataset::aggregate::Dataset>>, axum::http::StatusCode>
{
    let uuid = match uuid::Uuid::parse_str(&project_id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_dataset::service::list_by_project(uuid).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("Failed to list datasets: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/dataset/:id
pub async fn get_by_id(
    CurrentUser(_claims): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<contracts::domain::a002_dataset::aggregate::Dataset>, axum::http::StatusCode> {
    let uuid = match uuid::Uuid::parse_str(&id) {
        Ok(uuid) => uuid,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match a002_dataset::service::get_by_id(uuid).await {
        Ok(Some(v)) => Ok(Json(v)),
        Ok(None) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
