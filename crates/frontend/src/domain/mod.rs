pub mod a001_kategori;
pub mod a002_merek;
pub mod a003_jenis_barang;
pub mod a004_lokasi;
pub mod a005_model_barang;
pub mod a006_barang_masuk;
pub mod a007_barang_kembali;
