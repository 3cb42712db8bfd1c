use std::collections::HashMap;

use chrono::Utc;
use contracts::domain::a002_dataset::aggregate::DatasetId;
use contracts::domain::a003_generation::aggregate::{
    Generation, GenerationId, GenerationParams, ModelType,
};
use contracts::domain::a003_generation::metrics::{
    ComplianceReport, GenerationWithMetrics, PrivacyMetrics, UtilityMetrics,
};
use uuid::Uuid;

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::domain::a002_dataset;
use crate::shared::data::db::get_connection;

fn parse_ts(s: &str) -> chrono::DateTime<Utc> {
    s.parse::<chrono::DateTime<Utc>>()
        .unwrap_or_else(|_| Utc::now())
}

// ============================================================================
// Entities
// ============================================================================

pub mod generation {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a003_generation")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub dataset_id: String,
        pub user_id: String,
        pub model_type: String,
        pub parameters_json: String,
        pub row_count: i64,
        pub status: String,
        pub started_at: String,
        pub completed_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod privacy {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a003_privacy_metrics")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub generation_id: String,
        pub privacy_risk_score: f64,
        pub k_anonymity_achieved: i64,
        pub epsilon_used: f64,
        pub leakage_probability: f64,
        pub created_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod utility {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a003_utility_metrics")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub generation_id: String,
        pub fidelity_score: f64,
        pub similarity_score: f64,
        pub correlation_preservation: f64,
        pub distribution_similarity: f64,
        pub ml_efficacy_score: f64,
        pub created_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

pub mod report {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a003_compliance_report")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub generation_id: String,
        pub compliance_status: String,
        pub privacy_budget_text: String,
        pub anonymity_text: String,
        pub recommendation_text: String,
        pub valid_until: String,
        pub created_at: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

// ============================================================================
// Conversions
// ============================================================================

impl From<generation::Model> for Generation {
    fn from(m: generation::Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let dataset_uuid = Uuid::parse_str(&m.dataset_id).unwrap_or_else(|_| Uuid::new_v4());
        let model_type = ModelType::parse(&m.model_type).unwrap_or(ModelType::Ctgan);
        let parameters: GenerationParams =
            serde_json::from_str(&m.parameters_json).unwrap_or(GenerationParams {
                model_type,
                row_count: m.row_count,
                epsilon: 1.0,
                k_anonymity: 2,
            });

        Generation {
            id: GenerationId(uuid),
            dataset_id: DatasetId(dataset_uuid),
            user_id: m.user_id,
            model_type,
            parameters,
            row_count: m.row_count,
            status: m.status,
            started_at: parse_ts(&m.started_at),
            completed_at: parse_ts(&m.completed_at),
        }
    }
}

impl From<privacy::Model> for PrivacyMetrics {
    fn from(m: privacy::Model) -> Self {
        let generation_uuid = Uuid::parse_str(&m.generation_id).unwrap_or_else(|_| Uuid::new_v4());
        PrivacyMetrics {
            id: m.id,
            generation_id: GenerationId(generation_uuid),
            privacy_risk_score: m.privacy_risk_score,
            k_anonymity_achieved: m.k_anonymity_achieved,
            epsilon_used: m.epsilon_used,
            leakage_probability: m.leakage_probability,
            created_at: parse_ts(&m.created_at),
        }
    }
}

impl From<utility::Model> for UtilityMetrics {
    fn from(m: utility::Model) -> Self {
        let generation_uuid = Uuid::parse_str(&m.generation_id).unwrap_or_else(|_| Uuid::new_v4());
        UtilityMetrics {
            id: m.id,
            generation_id: GenerationId(generation_uuid),
            fidelity_score: m.fidelity_score,
            similarity_score: m.similarity_score,
            correlation_preservation: m.correlation_preservation,
            distribution_similarity: m.distribution_similarity,
            ml_efficacy_score: m.ml_efficacy_score,
            created_at: parse_ts(&m.created_at),
        }
    }
}

impl From<report::Model> for ComplianceReport {
    fn from(m: report::Model) -> Self {
        let generation_uuid = Uuid::parse_str(&m.generation_id).unwrap_or_else(|_| Uuid::new_v4());
        ComplianceReport {
            id: m.id,
            generation_id: GenerationId(generation_uuid),
            compliance_status: m.compliance_status,
            privacy_budget: m.privacy_budget_text,
            anonymity_guarantee: m.anonymity_text,
            recommendation: m.recommendation_text,
            valid_until: parse_ts(&m.valid_until),
            created_at: parse_ts(&m.created_at),
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

// ============================================================================
// Queries
// ============================================================================

/// Insert the generation row together with its metrics and report rows.
/// All four land in one transaction: committed together or not at all.
pub async fn insert_complete(
    g: &Generation,
    p: &PrivacyMetrics,
    u: &UtilityMetrics,
    r: &ComplianceReport,
) -> anyhow::Result<()> {
    let txn = conn().begin().await?;

    generation::ActiveModel {
        id: Set(g.id.value().to_string()),
        dataset_id: Set(g.dataset_id.value().to_string()),
        user_id: Set(g.user_id.clone()),
        model_type: Set(g.model_type.as_str().to_string()),
        parameters_json: Set(serde_json::to_string(&g.parameters)?),
        row_count: Set(g.row_count),
        status: Set(g.status.clone()),
        started_at: Set(g.started_at.to_rfc3339()),
        completed_at: Set(g.completed_at.to_rfc3339()),
    }
    .insert(&txn)
    .await?;

    privacy::ActiveModel {
        id: Set(p.id.clone()),
        generation_id: Set(g.id.value().to_string()),
        privacy_risk_score: Set(p.privacy_risk_score),
        k_anonymity_achieved: Set(p.k_anonymity_achieved),
        epsilon_used: Set(p.epsilon_used),
        leakage_probability: Set(p.leakage_probability),
        created_at: Set(p.created_at.to_rfc3339()),
    }
    .insert(&txn)
    .await?;

    utility::ActiveModel {
        id: Set(u.id.clone()),
        generation_id: Set(g.id.value().to_string()),
        fidelity_score: Set(u.fidelity_score),
        similarity_score: Set(u.similarity_score),
        correlation_preservation: Set(u.correlation_preservation),
        distribution_similarity: Set(u.distribution_similarity),
        ml_efficacy_score: Set(u.ml_efficacy_score),
        created_at: Set(u.created_at.to_rfc3339()),
    }
    .insert(&txn)
    .await?;

    report::ActiveModel {
        id: Set(r.id.clone()),
        generation_id: Set(g.id.value().to_string()),
        compliance_status: Set(r.compliance_status.clone()),
        privacy_budget_text: Set(r.privacy_budget.clone()),
        anonymity_text: Set(r.anonymity_guarantee.clone()),
        recommendation_text: Set(r.recommendation.clone()),
        valid_until: Set(r.valid_until.to_rfc3339()),
        created_at: Set(r.created_at.to_rfc3339()),
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(())
}

/// The user's generations newest-first, each joined with its dataset name
/// and the first privacy/utility/report rows.
pub async fn list_by_user_with_metrics(
    user_id: &str,
) -> anyhow::Result<Vec<GenerationWithMetrics>> {
    let generations: Vec<Generation> = generation::Entity::find()
        .filter(generation::Column::UserId.eq(user_id))
        .order_by_desc(generation::Column::StartedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    join_metrics(generations).await
}

/// One generation with joined metrics, scoped to the owning user.
pub async fn get_by_id_with_metrics(
    user_id: &str,
    id: Uuid,
) -> anyhow::Result<Option<GenerationWithMetrics>> {
    let found = generation::Entity::find_by_id(id.to_string())
        .filter(generation::Column::UserId.eq(user_id))
        .one(conn())
        .await?;

    let Some(model) = found else {
        return Ok(None);
    };

    let mut joined = join_metrics(vec![model.into()]).await?;
    Ok(joined.pop())
}

pub async fn count_by_user(user_id: &str) -> anyhow::Result<u64> {
    let count = generation::Entity::find()
        .filter(generation::Column::UserId.eq(user_id))
        .count(conn())
        .await?;
    Ok(count)
}

async fn join_metrics(generations: Vec<Generation>) -> anyhow::Result<Vec<GenerationWithMetrics>> {
    if generations.is_empty() {
        return Ok(Vec::new());
    }

    let generation_ids: Vec<String> = generations.iter().map(|g| g.to_string_id()).collect();
    let dataset_ids: Vec<String> = generations
        .iter()
        .map(|g| g.dataset_id.value().to_string())
        .collect();

    let dataset_names: HashMap<String, String> =
        a002_dataset::repository::names_by_ids(&dataset_ids)
            .await?
            .into_iter()
            .collect();

    // First row per generation id wins; later duplicates are ignored
    let mut privacy_by_generation: HashMap<String, PrivacyMetrics> = HashMap::new();
    for m in privacy::Entity::find()
        .filter(privacy::Column::GenerationId.is_in(generation_ids.clone()))
        .all(conn())
        .await?
    {
        privacy_by_generation
            .entry(m.generation_id.clone())
            .or_insert_with(|| m.into());
    }

    let mut utility_by_generation: HashMap<String, UtilityMetrics> = HashMap::new();
    for m in utility::Entity::find()
        .filter(utility::Column::GenerationId.is_in(generation_ids.clone()))
        .all(conn())
        .await?
    {
        utility_by_generation
            .entry(m.generation_id.clone())
            .or_insert_with(|| m.into());
    }

    let mut report_by_generation: HashMap<String, ComplianceReport> = HashMap::new();
    for m in report::Entity::find()
        .filter(report::Column::GenerationId.is_in(generation_ids))
        .all(conn())
        .await?
    {
        report_by_generation
            .entry(m.generation_id.clone())
            .or_insert_with(|| m.into());
    }

    let joined = generations
        .into_iter()
        .map(|g| {
            let gid = g.to_string_id();
            let dataset_name = dataset_names
                .get(&g.dataset_id.value().to_string())
                .cloned()
                .unwrap_or_else(|| "(deleted dataset)".to_string());
            GenerationWithMetrics {
                dataset_name,
                privacy: privacy_by_generation.remove(&gid),
                utility: utility_by_generation.remove(&gid),
                report: report_by_generation.remove(&gid),
                generation: g,
            }
        })
        .collect();

    Ok(joined)
}
