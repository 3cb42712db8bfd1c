use crate::domain::a002_dataset::aggregate::DatasetId;
use crate::domain::common::AggregateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

/// Unique generation identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GenerationId(pub Uuid);

impl GenerationId {
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

impl AggregateId for GenerationId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(GenerationId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Model type
// ============================================================================

/// Synthesizer model selection. These are labels only: no model is ever
/// trained or executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    Ctgan,
    Tvae,
    GaussianCopula,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::Ctgan => "ctgan",
            ModelType::Tvae => "tvae",
            ModelType::GaussianCopula => "gaussian_copula",
        }
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        match s {
            "ctgan" => Ok(ModelType::Ctgan),
            "tvae" => Ok(ModelType::Tvae),
            "gaussian_copula" => Ok(ModelType::GaussianCopula),
            other => Err(format!("Unknown model type: {}", other)),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ModelType::Ctgan => "CTGAN",
            ModelType::Tvae => "TVAE",
            ModelType::GaussianCopula => "Gaussian Copula",
        }
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// Parameter bag submitted with a generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    #[serde(rename = "modelType")]
    pub model_type: ModelType,
    #[serde(rename = "rowCount")]
    pub row_count: i64,
    pub epsilon: f64,
    #[serde(rename = "kAnonymity")]
    pub k_anonymity: i64,
}

impl GenerationParams {
    /// Parameter bounds mirror the form limits and are enforced again here.
    pub fn validate(&self) -> Result<(), String> {
        if self.row_count < 100 {
            return Err("Row count must be at least 100".into());
        }
        if !(0.1..=10.0).contains(&self.epsilon) {
            return Err("Epsilon must be between 0.1 and 10".into());
        }
        if !(2..=20).contains(&self.k_anonymity) {
            return Err("k-anonymity must be between 2 and 20".into());
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A record of one (simulated) synthetic-data production run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Generation {
    pub id: GenerationId,
    #[serde(rename = "datasetId")]
    pub dataset_id: DatasetId,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "modelType")]
    pub model_type: ModelType,
    pub parameters: GenerationParams,
    #[serde(rename = "rowCount")]
    pub row_count: i64,
    pub status: String,
    #[serde(rename = "startedAt")]
    pub started_at: DateTime<Utc>,
    #[serde(rename = "completedAt")]
    pub completed_at: DateTime<Utc>,
}

impl Generation {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Request body for POST /api/generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    #[serde(rename = "datasetId")]
    pub dataset_id: String,
    #[serde(rename = "modelType")]
    pub model_type: ModelType,
    #[serde(rename = "rowCount")]
    pub row_count: i64,
    pub epsilon: f64,
    #[serde(rename = "kAnonymity")]
    pub k_anonymity: i64,
}

impl GenerationRequest {
    pub fn params(&self) -> GenerationParams {
        GenerationParams {
            model_type: self.model_type,
            row_count: self.row_count,
            epsilon: self.epsilon,
            k_anonymity: self.k_anonymity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(row_count: i64, epsilon: f64, k: i64) -> GenerationParams {
        GenerationParams {
            model_type: ModelType::Ctgan,
            row_count,
            epsilon,
            k_anonymity: k,
        }
    }

    #[test]
    fn test_params_within_bounds() {
        assert!(params(100, 0.1, 2).validate().is_ok());
        assert!(params(1000, 10.0, 20).validate().is_ok());
        assert!(params(500, 1.0, 5).validate().is_ok());
    }

    #[test]
    fn test_params_out_of_bounds() {
        assert!(params(99, 1.0, 5).validate().is_err());
        assert!(params(100, 0.05, 5).validate().is_err());
        assert!(params(100, 10.5, 5).validate().is_err());
        assert!(params(100, 1.0, 1).validate().is_err());
        assert!(params(100, 1.0, 21).validate().is_err());
    }

    #[test]
    fn test_model_type_serde_tags() {
        assert_eq!(
            serde_json::to_string(&ModelType::GaussianCopula).unwrap(),
            "\"gaussian_copula\""
        );
        assert_eq!(ModelType::parse("tvae").unwrap(), ModelType::Tvae);
        assert!(ModelType::parse("gpt").is_err());
    }
}
