use chrono::Utc;
use contracts::domain::a001_project::aggregate::{Project, ProjectId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub description: String,
    pub industry: String,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(m: Model) -> Self {
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let created_at = m
            .created_at
            .parse::<chrono::DateTime<Utc>>()
            .unwrap_or_else(|_| Utc::now());

        Project {
            id: ProjectId(uuid),
            user_id: m.user_id,
            name: m.name,
            description: m.description,
            industry: m.industry,
            created_at,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Projects of one user, newest first
pub async fn list_by_user(user_id: &str) -> anyhow::Result<Vec<Project>> {
    let items = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Project>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Project) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        user_id: Set(aggregate.user_id.clone()),
        name: Set(aggregate.name.clone()),
        description: Set(aggregate.description.clone()),
        industry: Set(aggregate.industry.clone()),
        created_at: Set(aggregate.created_at.to_rfc3339()),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

/// Per-user count used by the dashboard
pub async fn count_by_user(user_id: &str) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::UserId.eq(user_id))
        .count(conn())
        .await?;
    Ok(count)
}
