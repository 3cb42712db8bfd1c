use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique project identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub Uuid);

impl ProjectId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProjectId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A user-scoped grouping container for datasets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub industry: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Project {
    /// Create a new project for insertion
    pub fn new_for_insert(user_id: String, dto: &ProjectDto) -> Self {
        Self {
            id: ProjectId::new_v4(),
            user_id,
            name: dto.name.trim().to_string(),
            description: dto.description.trim().to_string(),
            industry: dto.industry.trim().to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Project name cannot be empty".into());
        }
        Ok(())
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating a project
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectDto {
    pub name: String,
    pub description: String,
    pub industry: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_is_rejected() {
        let dto = ProjectDto {
            name: "   ".into(),
            description: "d".into(),
            industry: "finance".into(),
        };
        let project = Project::new_for_insert("user-1".into(), &dto);
        assert!(project.validate().is_err());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let dto = ProjectDto {
            name: " Loans Pilot ".into(),
            description: " pilot ".into(),
            industry: "finance".into(),
        };
        let project = Project::new_for_insert("user-1".into(), &dto);
        assert_eq!(project.name, "Loans Pilot");
        assert!(project.validate().is_ok());
    }
}
