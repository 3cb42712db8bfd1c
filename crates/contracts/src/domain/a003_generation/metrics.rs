use super::aggregate::GenerationId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Privacy scores attached 1:1 to a generation. The values are bounded
/// random draws, not measurements of real data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacyMetrics {
    pub id: String,
    #[serde(rename = "generationId")]
    pub generation_id: GenerationId,
    #[serde(rename = "privacyRiskScore")]
    pub privacy_risk_score: f64,
    #[serde(rename = "kAnonymityAchieved")]
    pub k_anonymity_achieved: i64,
    #[serde(rename = "epsilonUsed")]
    pub epsilon_used: f64,
    #[serde(rename = "leakageProbability")]
    pub leakage_probability: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Utility scores attached 1:1 to a generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtilityMetrics {
    pub id: String,
    #[serde(rename = "generationId")]
    pub generation_id: GenerationId,
    #[serde(rename = "fidelityScore")]
    pub fidelity_score: f64,
    #[serde(rename = "similarityScore")]
    pub similarity_score: f64,
    #[serde(rename = "correlationPreservation")]
    pub correlation_preservation: f64,
    #[serde(rename = "distributionSimilarity")]
    pub distribution_similarity: f64,
    #[serde(rename = "mlEfficacyScore")]
    pub ml_efficacy_score: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Templated compliance report attached 1:1 to a generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub id: String,
    #[serde(rename = "generationId")]
    pub generation_id: GenerationId,
    #[serde(rename = "complianceStatus")]
    pub compliance_status: String,
    #[serde(rename = "privacyBudget")]
    pub privacy_budget: String,
    #[serde(rename = "anonymityGuarantee")]
    pub anonymity_guarantee: String,
    pub recommendation: String,
    #[serde(rename = "validUntil")]
    pub valid_until: DateTime<Utc>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One generation joined with its dataset name and first metrics/report
/// rows, as rendered by the results view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationWithMetrics {
    pub generation: super::aggregate::Generation,
    #[serde(rename = "datasetName")]
    pub dataset_name: String,
    pub privacy: Option<PrivacyMetrics>,
    pub utility: Option<UtilityMetrics>,
    pub report: Option<ComplianceReport>,
}
