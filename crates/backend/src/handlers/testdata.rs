use axum::Json;
use contracts::domain::a005_model_barang::dto::ModelBarangDto;
use serde_json::json;

use crate::domain::{a001_kategori, a002_merek, a003_jenis_barang, a004_lokasi, a005_model_barang};
use crate::shared::error::AppResult;

const KATEGORI: [&str; 4] = ["Laptop", "Printer", "Proyektor", "Kamera"];
const MEREK: [&str; 5] = ["Asus", "Lenovo", "HP", "Epson", "Canon"];
const LOKASI: [&str; 3] = ["Gudang Pusat", "Kantor Cabang Bandung", "Ruang Multimedia"];

/// POST /api/testdata: seed reference data for local development.
/// Each entity is only seeded while its table is still empty.
pub async fn seed() -> AppResult<Json<serde_json::Value>> {
    let kategori_count = a001_kategori::service::seed(&KATEGORI).await?;
    let merek_count = a002_merek::service::seed(&MEREK).await?;
    let lokasi_count = a004_lokasi::service::seed(&LOKASI).await?;

    let kategori = a001_kategori::service::list_refs().await?;
    let find_kategori = |nama: &str| kategori.iter().find(|k| k.nama == nama).map(|k| k.id);

    let mut jenis_entries = Vec::new();
    if let Some(laptop) = find_kategori("Laptop") {
        jenis_entries.push(("Gaming", laptop));
        jenis_entries.push(("Ultrabook", laptop));
    }
    if let Some(printer) = find_kategori("Printer") {
        jenis_entries.push(("Inkjet", printer));
        jenis_entries.push(("Laser", printer));
    }
    let jenis_count = a003_jenis_barang::service::seed(&jenis_entries).await?;

    let mut model_count = 0;
    if a005_model_barang::service::count().await? == 0 {
        let merek = a002_merek::service::list_refs().await?;
        let find_merek = |nama: &str| merek.iter().find(|m| m.nama == nama).map(|m| m.id);
        let jenis = a003_jenis_barang::service::list_by_kategori(None).await?;
        let find_jenis = |nama: &str| jenis.iter().find(|j| j.nama == nama).map(|j| j.id);

        let samples = [
            ("ROG Strix G15", Some("unit sekolah"), "Laptop", "Asus", Some("Gaming")),
            ("ThinkPad T14", None, "Laptop", "Lenovo", Some("Ultrabook")),
            ("EcoTank L3210", Some("ruang tata usaha"), "Printer", "Epson", Some("Inkjet")),
        ];
        for (nama, label, kategori_nama, merek_nama, jenis_nama) in samples {
            let dto = ModelBarangDto {
                id: None,
                nama: nama.to_string(),
                label: label.map(str::to_string),
                kategori_id: find_kategori(kategori_nama),
                merek_id: find_merek(merek_nama),
                jenis_id: jenis_nama.and_then(|nama| find_jenis(nama)),
            };
            a005_model_barang::service::save(dto).await?;
            model_count += 1;
        }
    }

    Ok(Json(json!({
        "kategori": kategori_count,
        "merek": merek_count,
        "lokasi": lokasi_count,
        "jenis_barang": jenis_count,
        "model_barang": model_count,
    })))
}
