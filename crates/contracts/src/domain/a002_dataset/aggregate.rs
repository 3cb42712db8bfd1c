use crate::domain::a001_project::aggregate::ProjectId;
use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique dataset identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatasetId(pub Uuid);

impl DatasetId {
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

impl AggregateId for DatasetId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DatasetId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Column schema
// ============================================================================

/// One column of the derived dataset schema.
///
/// The type is a naive tag (always "string" for uploaded files) and the
/// sensitivity flag comes from a substring heuristic on the header name,
/// not from a real classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    pub sensitive: bool,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// An uploaded or templated tabular schema plus row-count metadata.
/// No actual row data is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub id: DatasetId,
    #[serde(rename = "projectId")]
    pub project_id: ProjectId,
    pub name: String,
    pub description: String,
    pub schema: Vec<ColumnSchema>,
    #[serde(rename = "rowCount")]
    pub row_count: i64,
    #[serde(rename = "dataType")]
    pub data_type: String,
    pub status: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Dataset {
    /// Create a new dataset record for insertion
    pub fn new_for_insert(
        project_id: ProjectId,
        name: String,
        description: String,
        schema: Vec<ColumnSchema>,
        row_count: i64,
        data_type: String,
    ) -> Self {
        Self {
            id: DatasetId::new_v4(),
            project_id,
            name,
            description,
            schema,
            row_count,
            data_type,
            status: "ready".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Request body for the template path: copies a predefined schema
/// without reading any file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateRequest {
    #[serde(rename = "projectId")]
    pub project_id: String,
    pub template: String,
}
