use chrono::Utc;
use contracts::domain::a003_generation::aggregate::{Generation, GenerationId, GenerationRequest};
use contracts::domain::a003_generation::metrics::GenerationWithMetrics;
use thiserror::Error;
use uuid::Uuid;

use super::{repository, synthesis};
use crate::domain::a002_dataset;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
    #[error("Dataset not found")]
    DatasetNotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// Record a generation run: parameter validation, then the generation row
/// plus its metrics/report rows in a single transaction. The run is marked
/// completed immediately; no model is executed.
pub async fn create(
    user_id: &str,
    request: GenerationRequest,
) -> Result<GenerationWithMetrics, GenerationError> {
    let params = request.params();
    params
        .validate()
        .map_err(GenerationError::InvalidParams)?;

    let dataset_id = Uuid::parse_str(&request.dataset_id)
        .map_err(|_| GenerationError::InvalidParams("Invalid dataset id".into()))?;

    let dataset = a002_dataset::repository::get_by_id(dataset_id)
        .await?
        .ok_or(GenerationError::DatasetNotFound)?;

    let now = Utc::now();
    let generation = Generation {
        id: GenerationId::new_v4(),
        dataset_id: dataset.id,
        user_id: user_id.to_string(),
        model_type: params.model_type,
        row_count: params.row_count,
        parameters: params,
        status: "completed".to_string(),
        started_at: now,
        completed_at: now,
    };

    let (privacy, utility, report) = synthesis::synthesize_outcome(&generation);

    repository::insert_complete(&generation, &privacy, &utility, &report).await?;

    tracing::info!(
        "Generation {} recorded for dataset {} ({} rows, model {})",
        generation.to_string_id(),
        dataset.name,
        generation.row_count,
        generation.model_type.as_str()
    );

    Ok(GenerationWithMetrics {
        generation,
        dataset_name: dataset.name,
        privacy: Some(privacy),
        utility: Some(utility),
        report: Some(report),
    })
}

pub async fn list_by_user(user_id: &str) -> anyhow::Result<Vec<GenerationWithMetrics>> {
    repository::list_by_user_with_metrics(user_id).await
}

pub async fn get_by_id(user_id: &str, id: Uuid) -> anyhow::Result<Option<GenerationWithMetrics>> {
    repository::get_by_id_with_metrics(user_id, id).await
}
