//! Placeholder synthesis outcome: bounded random metric draws and a
//! templated compliance report. No model is trained and no data row is
//! ever produced; this records the asserted result of a run.

use chrono::{DateTime, Duration, Utc};
use contracts::domain::a003_generation::aggregate::Generation;
use contracts::domain::a003_generation::metrics::{
    ComplianceReport, PrivacyMetrics, UtilityMetrics,
};
use rand::Rng;

pub const REPORT_VALIDITY_DAYS: i64 = 365;

/// Draw the privacy/utility scores and build the compliance report for a
/// completed generation. Every score is a uniform draw inside its
/// documented interval.
pub fn synthesize_outcome(
    generation: &Generation,
) -> (PrivacyMetrics, UtilityMetrics, ComplianceReport) {
    let mut rng = rand::thread_rng();
    let now = generation.completed_at;

    let privacy = PrivacyMetrics {
        id: uuid::Uuid::new_v4().to_string(),
        generation_id: generation.id,
        privacy_risk_score: rng.gen_range(0.05..=0.15),
        k_anonymity_achieved: generation.parameters.k_anonymity,
        epsilon_used: generation.parameters.epsilon,
        leakage_probability: rng.gen_range(0.001..=0.006),
        created_at: now,
    };

    let utility = UtilityMetrics {
        id: uuid::Uuid::new_v4().to_string(),
        generation_id: generation.id,
        fidelity_score: rng.gen_range(0.85..=0.95),
        similarity_score: rng.gen_range(0.88..=0.96),
        correlation_preservation: rng.gen_range(0.90..=0.98),
        distribution_similarity: rng.gen_range(0.87..=0.96),
        ml_efficacy_score: rng.gen_range(0.82..=0.94),
        created_at: now,
    };

    let report = build_report(generation, now);

    (privacy, utility, report)
}

fn build_report(generation: &Generation, now: DateTime<Utc>) -> ComplianceReport {
    let epsilon = generation.parameters.epsilon;
    let k = generation.parameters.k_anonymity;

    ComplianceReport {
        id: uuid::Uuid::new_v4().to_string(),
        generation_id: generation.id,
        compliance_status: "compliant".to_string(),
        privacy_budget: format!(
            "Synthetic output satisfies ε-differential privacy with ε={}",
            format_number(epsilon)
        ),
        anonymity_guarantee: format!("All records satisfy k-anonymity with k={}", k),
        recommendation: format!(
            "Suitable for analytics and model development. Re-evaluate before \
             external sharing; parameters used: ε={}, k={}.",
            format_number(epsilon),
            k
        ),
        valid_until: now + Duration::days(REPORT_VALIDITY_DAYS),
        created_at: now,
    }
}

/// Print a parameter without trailing zeros, so 1.0 renders as "1" and
/// 0.1 stays "0.1".
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_dataset::aggregate::DatasetId;
    use contracts::domain::a003_generation::aggregate::{
        GenerationId, GenerationParams, ModelType,
    };

    fn generation(epsilon: f64, k: i64) -> Generation {
        let now = Utc::now();
        Generation {
            id: GenerationId::new_v4(),
            dataset_id: DatasetId::new_v4(),
            user_id: "user-1".into(),
            model_type: ModelType::Ctgan,
            parameters: GenerationParams {
                model_type: ModelType::Ctgan,
                row_count: 1000,
                epsilon,
                k_anonymity: k,
            },
            row_count: 1000,
            status: "completed".into(),
            started_at: now,
            completed_at: now,
        }
    }

    #[test]
    fn test_metric_draws_stay_in_bounds() {
        let g = generation(1.0, 5);
        for _ in 0..200 {
            let (privacy, utility, _) = synthesize_outcome(&g);
            assert!((0.05..=0.15).contains(&privacy.privacy_risk_score));
            assert!((0.001..=0.006).contains(&privacy.leakage_probability));
            assert!((0.85..=0.95).contains(&utility.fidelity_score));
            assert!((0.88..=0.96).contains(&utility.similarity_score));
            assert!((0.90..=0.98).contains(&utility.correlation_preservation));
            assert!((0.87..=0.96).contains(&utility.distribution_similarity));
            assert!((0.82..=0.94).contains(&utility.ml_efficacy_score));
        }
    }

    #[test]
    fn test_report_embeds_parameters_verbatim() {
        let g = generation(1.0, 5);
        let (_, _, report) = synthesize_outcome(&g);
        assert!(report
            .privacy_budget
            .contains("ε-differential privacy with ε=1"));
        assert!(report.anonymity_guarantee.contains("k-anonymity with k=5"));
        assert_eq!(report.compliance_status, "compliant");
    }

    #[test]
    fn test_report_valid_for_one_year() {
        let g = generation(0.5, 3);
        let (_, _, report) = synthesize_outcome(&g);
        assert_eq!(report.valid_until - report.created_at, Duration::days(365));
        assert!(report.privacy_budget.contains("ε=0.5"));
        assert!(report.anonymity_guarantee.contains("k=3"));
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(10.0), "10");
        assert_eq!(format_number(0.1), "0.1");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn test_privacy_metrics_echo_inputs() {
        let g = generation(2.5, 7);
        let (privacy, _, _) = synthesize_outcome(&g);
        assert_eq!(privacy.epsilon_used, 2.5);
        assert_eq!(privacy.k_anonymity_achieved, 7);
        assert_eq!(privacy.generation_id, g.id);
    }
}
