use chrono::Utc;
use contracts::domain::a004_lokasi::aggregate::LokasiId;
use contracts::domain::a005_model_barang::aggregate::ModelBarangId;
use contracts::domain::a006_barang_masuk::aggregate::{
    BarangMasuk, BarangMasukDetail, BarangMasukId,
};
use contracts::domain::common::EntityMetadata;
use contracts::enums::kondisi::Kondisi;
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a006_barang_masuk")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub tanggal: chrono::NaiveDate,
    pub asal_id: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub mod detail {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a006_barang_masuk_detail")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,
        pub barang_masuk_id: String,
        pub model_barang_id: String,
        pub serial_number: String,
        pub kondisi: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Assemble the aggregate from its header row and detail rows
pub fn to_aggregate(m: Model, detail_rows: Vec<detail::Model>) -> BarangMasuk {
    let metadata = EntityMetadata {
        created_at: m.created_at.unwrap_or_else(Utc::now),
        updated_at: m.updated_at.unwrap_or_else(Utc::now),
        is_deleted: m.is_deleted,
        version: m.version,
    };
    let id = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
    let asal = Uuid::parse_str(&m.asal_id).unwrap_or_else(|_| Uuid::new_v4());
    let details = detail_rows
        .into_iter()
        .map(|d| BarangMasukDetail {
            id: Uuid::parse_str(&d.id).unwrap_or_else(|_| Uuid::new_v4()),
            model_barang_id: ModelBarangId(
                Uuid::parse_str(&d.model_barang_id).unwrap_or_else(|_| Uuid::new_v4()),
            ),
            serial_number: d.serial_number,
            kondisi: Kondisi::from_code(&d.kondisi).unwrap_or_default(),
        })
        .collect();
    BarangMasuk {
        id: BarangMasukId(id),
        tanggal: m.tanggal,
        asal_id: LokasiId(asal),
        details,
        metadata,
    }
}

/// One page of transaction headers matching the direct header filters.
/// `id_whitelist` carries the detail-derived restriction, already resolved.
pub async fn list_page(
    tanggal: Option<chrono::NaiveDate>,
    asal_id: Option<Uuid>,
    id_whitelist: Option<&[Uuid]>,
    descending: bool,
    page: u64,
    per_page: u64,
) -> anyhow::Result<(Vec<Model>, u64)> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(date) = tanggal {
        query = query.filter(Column::Tanggal.eq(date));
    }
    if let Some(asal) = asal_id {
        query = query.filter(Column::AsalId.eq(asal.to_string()));
    }
    if let Some(ids) = id_whitelist {
        let strings: Vec<String> = ids.iter().map(|u| u.to_string()).collect();
        query = query.filter(Column::Id.is_in(strings));
    }
    query = if descending {
        query
            .order_by_desc(Column::Tanggal)
            .order_by_desc(Column::CreatedAt)
    } else {
        query
            .order_by_asc(Column::Tanggal)
            .order_by_asc(Column::CreatedAt)
    };

    let paginator = query.paginate(conn(), per_page);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(page.saturating_sub(1)).await?;
    Ok((items, total))
}

/// Detail rows of the given transactions, in insertion order per header
pub async fn details_for(header_ids: &[Uuid]) -> anyhow::Result<Vec<detail::Model>> {
    if header_ids.is_empty() {
        return Ok(Vec::new());
    }
    let strings: Vec<String> = header_ids.iter().map(|u| u.to_string()).collect();
    Ok(detail::Entity::find()
        .filter(detail::Column::BarangMasukId.is_in(strings))
        .all(conn())
        .await?)
}

/// Header ids whose detail lines satisfy the model/search restrictions.
///
/// `model_ids`: line must reference one of these models (kategori/merek
/// filters). `search_serial`/`search_model_ids`: free-text search, matching
/// either the serial number or a model whose name/brand matched.
pub async fn header_ids_with_details(
    model_ids: Option<&[Uuid]>,
    search_serial: Option<&str>,
    search_model_ids: Option<&[Uuid]>,
) -> anyhow::Result<Vec<Uuid>> {
    let mut cond = Condition::all();
    if let Some(ids) = model_ids {
        let strings: Vec<String> = ids.iter().map(|u| u.to_string()).collect();
        cond = cond.add(detail::Column::ModelBarangId.is_in(strings));
    }
    if let Some(serial) = search_serial {
        let pattern = format!("%{}%", serial);
        let mut search_cond = Condition::any().add(detail::Column::SerialNumber.like(&pattern));
        if let Some(ids) = search_model_ids {
            if !ids.is_empty() {
                let strings: Vec<String> = ids.iter().map(|u| u.to_string()).collect();
                search_cond = search_cond.add(detail::Column::ModelBarangId.is_in(strings));
            }
        }
        cond = cond.add(search_cond);
    }

    let rows = detail::Entity::find().filter(cond).all(conn()).await?;
    let mut ids: Vec<Uuid> = rows
        .into_iter()
        .filter_map(|d| Uuid::parse_str(&d.barang_masuk_id).ok())
        .collect();
    ids.sort();
    ids.dedup();
    Ok(ids)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<BarangMasuk>> {
    let header = Entity::find_by_id(id.to_string()).one(conn()).await?;
    match header {
        None => Ok(None),
        Some(h) => {
            let details = details_for(&[id]).await?;
            Ok(Some(to_aggregate(h, details)))
        }
    }
}

async fn insert_details(aggregate: &BarangMasuk) -> anyhow::Result<()> {
    for line in &aggregate.details {
        let active = detail::ActiveModel {
            id: Set(line.id.to_string()),
            barang_masuk_id: Set(aggregate.id.value().to_string()),
            model_barang_id: Set(line.model_barang_id.value().to_string()),
            serial_number: Set(line.serial_number.clone()),
            kondisi: Set(line.kondisi.code().to_string()),
        };
        active.insert(conn()).await?;
    }
    Ok(())
}

pub async fn insert(aggregate: &BarangMasuk) -> anyhow::Result<Uuid> {
    let uuid = aggregate.id.value();
    let active = ActiveModel {
        id: Set(uuid.to_string()),
        tanggal: Set(aggregate.tanggal),
        asal_id: Set(aggregate.asal_id.value().to_string()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    active.insert(conn()).await?;
    insert_details(aggregate).await?;
    Ok(uuid)
}

/// Update rewrites the detail lines wholesale: delete then re-insert
pub async fn update(aggregate: &BarangMasuk) -> anyhow::Result<()> {
    let id = aggregate.id.value().to_string();
    let active = ActiveModel {
        id: Set(id.clone()),
        tanggal: Set(aggregate.tanggal),
        asal_id: Set(aggregate.asal_id.value().to_string()),
        is_deleted: Set(aggregate.metadata.is_deleted),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;

    detail::Entity::delete_many()
        .filter(detail::Column::BarangMasukId.eq(id))
        .exec(conn())
        .await?;
    insert_details(aggregate).await?;
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
