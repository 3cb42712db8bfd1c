use chrono::Utc;
use contracts::domain::a001_project::aggregate::ProjectId;
use contracts::domain::a002_dataset::aggregate::{ColumnSchema, Dataset, DatasetId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_dataset")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub project_id: String,
    pub name: String,
    pub description: String,
    pub schema_json: String,
    pub row_count: i64,
    pub data_type: String,
    pub status: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Dataset {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let project_uuid = Uuid::parse_str(&m.project_id).unwrap_or_else(|_| Uuid::new_v4());
        let schema: Vec<ColumnSchema> = serde_json::from_str(&m.schema_json).unwrap_or_default();
        let created_at = m
            .created_at
            .parse::<chrono::DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now());

        Dataset {
            id: DatasetId(uuid),
            project_id: ProjectId(project_uuid),
            name: m.name,
            description: m.description,
            schema,
            row_count: m.row_count,
            data_type: m.data_type,
            status: m.status,
            created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Datasets of one project, newest first
pub async fn list_by_project(project_id: Uuid) -> anyhow::Result<Vec<Dataset>> {
    let items = Entity::find()
        .filter(Column::ProjectId.eq(project_id.to_string()))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Dataset>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Fetch dataset names for a set of ids (used by the generation join)
pub async fn names_by_ids(ids: &[String]) -> anyhow::Result<Vec<(String, String)>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let items = Entity::find()
        .filter(Column::Id.is_in(ids.iter().cloned()))
        .all(conn())
        .await?
        .into_iter()
        .map(|m| (m.id, m.name))
        .collect();
    Ok(items)
}

pub async fn insert(aggregate: &Dataset) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        project_id: Set(aggregate.project_id.value().to_string()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        schema_json: Set(serde_json::to_string(&aggregate.schema)?),
        row_count: Set(aggregate.row_count),
        data_type: Set(aggregate.data_type.clone()),
        status: Set(aggregate.status.clone()),
        created_at: Set(aggregate.created_at.to_rfc3339()),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Whole-table count. Deliberately not scoped by user: the dashboard
/// shows the shared dataset catalog size.
pub async fn count_all() -> anyhow::Result<u64> {
    let count = Entity::find().count(conn()).await?;
    Ok(count)
}
