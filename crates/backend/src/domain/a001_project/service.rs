use super::repository;
use contracts::domain::a001_project::aggregate::{Project, ProjectDto};

/// Create a new project owned by the given user
pub async fn create(user_id: &str, dto: ProjectDto) -> anyhow::Result<Project> {
    let aggregate = Project::new_for_insert(user_id.to_string(), &dto);

    aggregate
        .validate()
        .map_err(|e| anyhow::anyhow!("Validation failed: {}", e))?;

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// The user's projects, newest first
pub async fn list_by_user(user_id: &str) -> anyhow::Result<Vec<Project>> {
    repository::list_by_user(user_id).await
}
