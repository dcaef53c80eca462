use chrono::Utc;
use contracts::domain::a001_kategori::aggregate::KategoriId;
use contracts::domain::a002_merek::aggregate::MerekId;
use contracts::domain::a003_jenis_barang::aggregate::JenisBarangId;
use contracts::domain::a005_model_barang::aggregate::{ModelBarang, ModelBarangId};
use contracts::domain::common::EntityMetadata;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a005_model_barang")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub nama: String,
    pub label: Option<String>,
    pub kategori_id: String,
    pub merek_id: String,
    pub jenis_id: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ModelBarang {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let kategori = Uuid::parse_str(&m.kategori_id).unwrap_or_else(|_| Uuid::new_v4());
        let merek = Uuid::parse_str(&m.merek_id).unwrap_or_else(|_| Uuid::new_v4());
        let jenis = m
            .jenis_id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(JenisBarangId);
        ModelBarang {
            id: ModelBarangId(uuid),
            nama: m.nama,
            label: m.label,
            kategori_id: KategoriId(kategori),
            merek_id: MerekId(merek),
            jenis_id: jenis,
            metadata,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// One page of the catalog, newest entries sorted by name.
///
/// `search_merek_ids` is the pre-resolved set of brands whose name matches
/// the free-text search; the search itself also runs over nama and label.
pub async fn list_page(
    search: Option<&str>,
    search_merek_ids: &[Uuid],
    page: u64,
    per_page: u64,
) -> anyhow::Result<(Vec<ModelBarang>, u64)> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));

    if let Some(s) = search {
        let pattern = format!("%{}%", s);
        let merek_strings: Vec<String> =
            search_merek_ids.iter().map(|u| u.to_string()).collect();
        let mut cond = Condition::any()
            .add(Column::Nama.like(&pattern))
            .add(Column::Label.like(&pattern));
        if !merek_strings.is_empty() {
            cond = cond.add(Column::MerekId.is_in(merek_strings));
        }
        query = query.filter(cond);
    }

    let paginator = query
        .order_by_asc(Column::Nama)
        .paginate(conn(), per_page);
    let total = paginator.num_items().await?;
    let items = paginator
        .fetch_page(page.saturating_sub(1))
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok((items, total as u64))
}

/// Every non-deleted model, for the transaction-form dropdowns
pub async fn list_all() -> anyhow::Result<Vec<ModelBarang>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Nama)
        .all(conn())
        .await?;
    Ok(items.into_iter().map(Into::into).collect())
}

/// Distinct non-empty labels for the suggestion list
pub async fn distinct_labels() -> anyhow::Result<Vec<String>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?;
    let mut labels: Vec<String> = items
        .into_iter()
        .filter_map(|m| m.label)
        .filter(|l| !l.trim().is_empty())
        .collect();
    labels.sort();
    labels.dedup();
    Ok(labels)
}

/// Model ids restricted by the transaction-listing filters
pub async fn ids_matching(
    kategori_id: Option<Uuid>,
    merek_id: Option<Uuid>,
) -> anyhow::Result<Vec<Uuid>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(kategori) = kategori_id {
        query = query.filter(Column::KategoriId.eq(kategori.to_string()));
    }
    if let Some(merek) = merek_id {
        query = query.filter(Column::MerekId.eq(merek.to_string()));
    }
    let items = query.all(conn()).await?;
    Ok(items
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.id).ok())
        .collect())
}

/// Model ids whose own or brand name matches the free-text search
pub async fn ids_matching_name(search: &str, merek_ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>> {
    let pattern = format!("%{}%", search);
    let merek_strings: Vec<String> = merek_ids.iter().map(|u| u.to_string()).collect();
    let mut cond = Condition::any().add(Column::Nama.like(&pattern));
    if !merek_strings.is_empty() {
        cond = cond.add(Column::MerekId.is_in(merek_strings));
    }
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .filter(cond)
        .all(conn())
        .await?;
    Ok(items
        .into_iter()
        .filter_map(|m| Uuid::parse_str(&m.id).ok())
        .collect())
}

/// id -> raw model lookup used when joining names into transaction rows
pub async fn model_map() -> anyhow::Result<HashMap<Uuid, ModelBarang>> {
    let items = Entity::find().all(conn()).await?;
    Ok(items
        .into_iter()
        .filter_map(|m| {
            let id = Uuid::parse_str(&m.id).ok()?;
            Some((id, ModelBarang::from(m)))
        })
        .collect())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<ModelBarang>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &ModelBarang) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        nama: Set(aggregate.nama.clone()),
        label: Set(aggregate.label.clone()),
        kategori_id: Set(aggregate.kategori_id.value().to_string()),
        merek_id: Set(aggregate.merek_id.value().to_string()),
        jenis_id: Set(aggregate.jenis_id.map(|j| j.value().to_string())),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &ModelBarang) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value().to_string()),
        nama: Set(aggregate.nama.clone()),
        label: Set(aggregate.label.clone()),
        kategori_id: Set(aggregate.kategori_id.value().to_string()),
        merek_id: Set(aggregate.merek_id.value().to_string()),
        jenis_id: Set(aggregate.jenis_id.map(|j| j.value().to_string())),
        is_deleted: Set(aggregate.metadata.is_deleted),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn count() -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .count(conn())
        .await?)
}
