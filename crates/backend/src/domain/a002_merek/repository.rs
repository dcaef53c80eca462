use chrono::Utc;
use contracts::domain::a002_merek::aggregate::{Merek, MerekId, MerekRef};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_merek")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nama: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Merek {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        Merek {
            id: MerekId(uuid),
            nama: m.nama,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_refs() -> anyhow::Result<Vec<MerekRef>> {
    let mut items: Vec<Merek> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| a.nama.to_lowercase().cmp(&b.nama.to_lowercase()));
    Ok(items.iter().map(MerekRef::from).collect())
}

/// id -> nama lookup used when joining names into listing rows
pub async fn name_map() -> anyhow::Result<HashMap<Uuid, String>> {
    let items = Entity::find().all(conn()).await?;
    Ok(items
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.id).ok().map(|id| (id, m.nama)))
        .collect())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Merek>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Brand ids whose name matches the free-text search (case-insensitive)
pub async fn ids_matching_name(search: &str) -> anyhow::Result<Vec<Uuid>> {
    let pattern = format!("%{}%", search);
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(Column::Nama.like(&pattern))
        .all(conn())
        .await?;
    Ok(items
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.id).ok())
        .collect())
}

pub async fn insert(aggregate: &Merek) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        nama: Set(aggregate.nama.clone()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?)
}
