use super::{repository, schema_inference};
use contracts::domain::a002_dataset::aggregate::Dataset;
use uuid::Uuid;

use crate::domain::a001_project;

/// Create a dataset from the text of an uploaded delimited file.
/// Only the header row is interpreted; no row data is stored.
pub async fn create_from_upload(
    project_id: Uuid,
    name: String,
    description: String,
    file_text: &str,
) -> anyhow::Result<Dataset> {
    let project = a001_project::repository::get_by_id(project_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Project not found"))?;

    let inferred = schema_inference::infer_schema(file_text)
        .map_err(|e| anyhow::anyhow!("Schema derivation failed: {}", e))?;

    let aggregate = Dataset::new_for_insert(
        project.id,
        name,
        description,
        inferred.columns,
        inferred.row_count,
        "tabular".to_string(),
    );

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Create a dataset from a predefined template: a fixed schema and a
/// fixed row count, no file involved.
pub async fn create_from_template(project_id: Uuid, template: &str) -> anyhow::Result<Dataset> {
    let project = a001_project::repository::get_by_id(project_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Project not found"))?;

    let columns = schema_inference::template_schema(template)
        .ok_or_else(|| anyhow::anyhow!("Unknown template: {}", template))?;

    let aggregate = Dataset::new_for_insert(
        project.id,
        format!("{} (template)", template),
        format!("Sample {} dataset", template),
        columns,
        schema_inference::TEMPLATE_ROW_COUNT,
        "tabular".to_string(),
    );

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn list_by_project(project_id: Uuid) -> anyhow::Result<Vec<Dataset>> {
    repository::list_by_project(project_id).await
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Dataset>> {
    repository::get_by_id(id).await
}
