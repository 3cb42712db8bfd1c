//! Plain-text rendering of a compliance report for download.

use contracts::domain::a003_generation::metrics::GenerationWithMetrics;
use contracts::domain::common::AggregateId;

/// Filename for the downloaded report, keyed by a short generation id prefix.
pub fn report_filename(generation_id: &str) -> String {
    let short: String = generation_id.chars().take(8).collect();
    format!("compliance-report-{}.txt", short)
}

/// Renders the joined generation record as a human-readable text report.
pub fn render_report_text(item: &GenerationWithMetrics) -> String {
    let mut out = String::new();

    out.push_str("SYNTHETIC DATA COMPLIANCE REPORT\n");
    out.push_str("================================\n\n");

    out.push_str(&format!("Generation:   {}\n", item.generation.id.as_string()));
    out.push_str(&format!("Dataset:      {}\n", item.dataset_name));
    out.push_str(&format!(
        "Model:        {}\n",
        item.generation.model_type.display_name()
    ));
    out.push_str(&format!("Rows:         {}\n", item.generation.row_count));
    out.push_str(&format!("Status:       {}\n", item.generation.status));
    out.push_str(&format!(
        "Completed:    {}\n\n",
        item.generation.completed_at.format("%Y-%m-%d %H:%M UTC")
    ));

    if let Some(privacy) = &item.privacy {
        out.push_str("PRIVACY METRICS\n");
        out.push_str(&format!(
            "  Privacy risk score:   {:.4}\n",
            privacy.privacy_risk_score
        ));
        out.push_str(&format!(
            "  Leakage probability:  {:.4}\n",
            privacy.leakage_probability
        ));
        out.push_str(&format!("  Epsilon used:         {}\n", privacy.epsilon_used));
        out.push_str(&format!(
            "  k-anonymity achieved: {}\n\n",
            privacy.k_anonymity_achieved
        ));
    }

    if let Some(utility) = &item.utility {
        out.push_str("UTILITY METRICS\n");
        out.push_str(&format!(
            "  Fidelity:                 {:.4}\n",
            utility.fidelity_score
        ));
        out.push_str(&format!(
            "  Similarity:               {:.4}\n",
            utility.similarity_score
        ));
        out.push_str(&format!(
            "  Correlation preservation: {:.4}\n",
            utility.correlation_preservation
        ));
        out.push_str(&format!(
            "  Distribution similarity:  {:.4}\n",
            utility.distribution_similarity
        ));
        out.push_str(&format!(
            "  ML efficacy:              {:.4}\n\n",
            utility.ml_efficacy_score
        ));
    }

    if let Some(report) = &item.report {
        out.push_str("COMPLIANCE ASSESSMENT\n");
        out.push_str(&format!("  Status:          {}\n", report.compliance_status));
        out.push_str(&format!("  Privacy budget:  {}\n", report.privacy_budget));
        out.push_str(&format!(
            "  Anonymity:       {}\n",
            report.anonymity_guarantee
        ));
        out.push_str(&format!("  Recommendation:  {}\n", report.recommendation));
        out.push_str(&format!(
            "  Valid until:     {}\n",
            report.valid_until.format("%Y-%m-%d")
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use contracts::domain::a002_dataset::aggregate::DatasetId;
    use contracts::domain::a003_generation::aggregate::{
        Generation, GenerationId, GenerationParams, ModelType,
    };
    use contracts::domain::a003_generation::metrics::ComplianceReport;

    fn sample() -> GenerationWithMetrics {
        let id = GenerationId::new_v4();
        GenerationWithMetrics {
            generation: Generation {
                id,
                dataset_id: DatasetId::new_v4(),
                user_id: "user-1".into(),
                model_type: ModelType::Ctgan,
                parameters: GenerationParams {
                    model_type: ModelType::Ctgan,
                    row_count: 1000,
                    epsilon: 1.0,
                    k_anonymity: 5,
                },
                row_count: 1000,
                status: "completed".into(),
                started_at: Utc::now(),
                completed_at: Utc::now(),
            },
            dataset_name: "customers.csv".into(),
            privacy: None,
            utility: None,
            report: Some(ComplianceReport {
                id: "r-1".into(),
                generation_id: id,
                compliance_status: "COMPLIANT".into(),
                privacy_budget: "Synthetic output satisfies ε-differential privacy with ε=1".into(),
                anonymity_guarantee: "All records satisfy k-anonymity with k=5".into(),
                recommendation: "Approved for analytics use.".into(),
                valid_until: Utc::now(),
                created_at: Utc::now(),
            }),
        }
    }

    #[test]
    fn test_filename_uses_short_id_prefix() {
        let name = report_filename("0a1b2c3d-1111-2222-3333-444455556666");
        assert_eq!(name, "compliance-report-0a1b2c3d.txt");
    }

    #[test]
    fn test_report_text_includes_key_sections() {
        let text = render_report_text(&sample());
        assert!(text.contains("SYNTHETIC DATA COMPLIANCE REPORT"));
        assert!(text.contains("customers.csv"));
        assert!(text.contains("COMPLIANCE ASSESSMENT"));
        assert!(text.contains("ε-differential privacy with ε=1"));
        assert!(text.contains("k-anonymity with k=5"));
    }

    #[test]
    fn test_missing_metrics_sections_are_skipped() {
        let text = render_report_text(&sample());
        assert!(!text.contains("PRIVACY METRICS"));
        assert!(!text.contains("UTILITY METRICS"));
    }
}
