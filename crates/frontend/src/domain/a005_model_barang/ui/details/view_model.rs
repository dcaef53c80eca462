use crate::domain::a003_jenis_barang::api as jenis_api;
use crate::domain::a005_model_barang::api;
use crate::shared::api_utils::SaveOutcome;
use crate::shared::cascade::CascadeState;
use contracts::domain::a001_kategori::aggregate::KategoriId;
use contracts::domain::a003_jenis_barang::aggregate::JenisBarangRef;
use contracts::domain::a005_model_barang::dto::{ModelBarangDto, ModelBarangRow};
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Append a submitted label to the suggestion list, once, without duplicates
pub fn append_label(labels: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        return;
    }
    if !labels.iter().any(|existing| existing == value) {
        labels.push(value.to_string());
    }
}

/// ViewModel of the inline create/edit form on the catalog page
#[derive(Clone, Copy)]
pub struct ModelBarangFormViewModel {
    pub form: RwSignal<ModelBarangDto>,
    /// Field-keyed validation errors from the last submission
    pub errors: RwSignal<ValidationErrors>,
    /// Non-validation failure of the last submission
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// Dependent item-type options of the selected category
    pub jenis: RwSignal<CascadeState<JenisBarangRef>>,
}

impl ModelBarangFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ModelBarangDto::default()),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            jenis: RwSignal::new(CascadeState::new()),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.form.with(|f| f.id.is_some())
    }

    /// Open the form on an existing row and load its dependent options
    pub fn load_for_edit(&self, row: &ModelBarangRow) {
        self.form.set(ModelBarangDto {
            id: Some(row.id),
            nama: row.nama.clone(),
            label: row.label.clone(),
            kategori_id: Some(row.kategori_id),
            merek_id: Some(row.merek_id),
            jenis_id: row.jenis_id,
        });
        self.errors.set(ValidationErrors::new());
        self.error.set(None);
        self.fetch_jenis(row.kategori_id);
    }

    pub fn reset(&self) {
        self.form.set(ModelBarangDto::default());
        self.errors.set(ValidationErrors::new());
        self.error.set(None);
        self.jenis.update(|s| s.reset());
    }

    /// Category changed: clear the dependent selection and refetch options
    pub fn on_kategori_changed(&self, kategori_id: Option<KategoriId>) {
        self.form.update(|f| {
            f.kategori_id = kategori_id;
            f.jenis_id = None;
        });
        match kategori_id {
            Some(kategori) => self.fetch_jenis(kategori),
            None => self.jenis.update(|s| s.reset()),
        }
    }

    fn fetch_jenis(&self, kategori_id: KategoriId) {
        let Some(token) = self.jenis.try_update(|s| Some(s.begin())).flatten() else {
            return;
        };
        let jenis = self.jenis;
        spawn_local(async move {
            let result = jenis_api::list_by_kategori(kategori_id).await;
            if let Err(e) = &result {
                log::error!("Error fetching jenis barang: {}", e);
            }
            jenis.update(|s| {
                s.resolve(token, result);
            });
        });
    }

    /// Submit the form. The submitted label joins the suggestion list
    /// immediately; the listing refresh happens through `on_saved`.
    pub fn save_command(&self, labels: RwSignal<Vec<String>>, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.form.get_untracked();

        if let Some(label) = dto.label.as_deref() {
            labels.update(|list| append_label(list, label));
        }

        self.saving.set(true);
        self.errors.set(ValidationErrors::new());
        self.error.set(None);

        let errors = self.errors;
        let error = self.error;
        let saving = self.saving;
        spawn_local(async move {
            match api::save(&dto).await {
                Ok(SaveOutcome::Saved) => {
                    saving.set(false);
                    on_saved.run(());
                }
                Ok(SaveOutcome::Invalid(validation)) => {
                    saving.set(false);
                    errors.set(validation);
                }
                Err(e) => {
                    saving.set(false);
                    error.set(Some(format!("Gagal menyimpan: {}", e)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_label_adds_new_value_once() {
        let mut labels = vec!["unit sekolah".to_string()];
        append_label(&mut labels, "ruang guru");
        append_label(&mut labels, "ruang guru");
        assert_eq!(labels, vec!["unit sekolah", "ruang guru"]);
    }

    #[test]
    fn test_append_label_ignores_blank_and_duplicate() {
        let mut labels = vec!["unit sekolah".to_string()];
        append_label(&mut labels, "");
        append_label(&mut labels, "   ");
        append_label(&mut labels, "unit sekolah");
        assert_eq!(labels, vec!["unit sekolah"]);
    }

    #[test]
    fn test_append_label_trims_value() {
        let mut labels = Vec::new();
        append_label(&mut labels, "  ruang guru  ");
        assert_eq!(labels, vec!["ruang guru"]);
    }
}
