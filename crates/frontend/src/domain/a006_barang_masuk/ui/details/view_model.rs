use crate::domain::a006_barang_masuk::api;
use crate::shared::api_utils::SaveOutcome;
use crate::shared::date_utils::today_iso;
use contracts::domain::a004_lokasi::aggregate::LokasiId;
use contracts::domain::a005_model_barang::aggregate::ModelBarangId;
use contracts::domain::a006_barang_masuk::aggregate::BarangMasukId;
use contracts::domain::a006_barang_masuk::dto::{BarangMasukDetailDto, BarangMasukDto};
use contracts::enums::kondisi::Kondisi;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One editable detail line. Per-field signals keep keystrokes from
/// re-rendering the whole line list.
#[derive(Clone)]
pub struct LineForm {
    /// Stable render key for `<For>`
    pub key: u64,
    pub model_barang_id: RwSignal<Option<ModelBarangId>>,
    pub serial_number: RwSignal<String>,
    pub kondisi: RwSignal<Kondisi>,
}

impl LineForm {
    fn new(key: u64) -> Self {
        Self {
            key,
            model_barang_id: RwSignal::new(None),
            serial_number: RwSignal::new(String::new()),
            kondisi: RwSignal::new(Kondisi::default()),
        }
    }

    fn to_dto(&self) -> BarangMasukDetailDto {
        BarangMasukDetailDto {
            model_barang_id: self.model_barang_id.get_untracked(),
            serial_number: self.serial_number.get_untracked(),
            kondisi: self.kondisi.get_untracked(),
        }
    }
}

/// ViewModel of the create/edit page for incoming transactions
#[derive(Clone, Copy)]
pub struct BarangMasukFormViewModel {
    pub id: RwSignal<Option<BarangMasukId>>,
    pub tanggal: RwSignal<String>,
    pub asal_id: RwSignal<Option<LokasiId>>,
    pub lines: RwSignal<Vec<LineForm>>,
    pub errors: RwSignal<ValidationErrors>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub loading: RwSignal<bool>,
    next_key: StoredValue<u64>,
}

impl BarangMasukFormViewModel {
    /// A create form starts with today's date and one empty line
    pub fn new() -> Self {
        let vm = Self {
            id: RwSignal::new(None),
            tanggal: RwSignal::new(today_iso()),
            asal_id: RwSignal::new(None),
            lines: RwSignal::new(Vec::new()),
            errors: RwSignal::new(ValidationErrors::new()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            loading: RwSignal::new(false),
            next_key: StoredValue::new(0),
        };
        vm.add_line();
        vm
    }

    fn take_key(&self) -> u64 {
        let key = self.next_key.get_value();
        self.next_key.set_value(key + 1);
        key
    }

    pub fn add_line(&self) {
        let line = LineForm::new(self.take_key());
        self.lines.update(|lines| lines.push(line));
    }

    pub fn remove_line(&self, key: u64) {
        self.lines.update(|lines| lines.retain(|l| l.key != key));
    }

    /// Load an existing transaction for editing
    pub fn load(&self, id: BarangMasukId) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::view(id).await {
                Ok(view) => {
                    vm.id.set(Some(view.id));
                    vm.tanggal.set(view.tanggal);
                    vm.asal_id.set(Some(view.asal.id));
                    let lines = view
                        .details
                        .iter()
                        .map(|d| {
                            let line = LineForm::new(vm.take_key());
                            line.model_barang_id.set(Some(d.model_barang_id));
                            line.serial_number.set(d.serial_number.clone());
                            line.kondisi.set(d.kondisi);
                            line
                        })
                        .collect();
                    vm.lines.set(lines);
                    vm.loading.set(false);
                }
                Err(e) => {
                    log::error!("Failed to load barang masuk: {}", e);
                    vm.error.set(Some(format!("Gagal memuat data: {}", e)));
                    vm.loading.set(false);
                }
            }
        });
    }

    fn to_dto(&self) -> BarangMasukDto {
        BarangMasukDto {
            id: self.id.get_untracked(),
            tanggal: self.tanggal.get_untracked(),
            asal_id: self.asal_id.get_untracked(),
            details: self
                .lines
                .with_untracked(|lines| lines.iter().map(LineForm::to_dto).collect()),
        }
    }

    pub fn save_command(&self, on_saved: Callback<()>) {
        if self.saving.get_untracked() {
            return;
        }
        let dto = self.to_dto();
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
