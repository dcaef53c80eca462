pub mod view_model;

pub use view_model::BarangMasukFormViewModel;

use crate::domain::a004_lokasi::api as lokasi_api;
use crate::domain::a005_model_barang::api as model_api;
use crate::shared::icons::icon;
use contracts::domain::a004_lokasi::aggregate::{LokasiId, LokasiRef};
use contracts::domain::a005_model_barang::aggregate::ModelBarangId;
use contracts::domain::a005_model_barang::dto::ModelBarangRef;
use contracts::domain::a006_barang_masuk::aggregate::BarangMasukId;
use contracts::domain::common::AggregateId;
use contracts::enums::kondisi::Kondisi;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl Fn() -> Option<AnyView> + Clone + Send + Sync + 'static {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> }.into_any())
        })
    }
}

fn line_error(
    vm: BarangMasukFormViewModel,
    line_key: u64,
    field: &'static str,
) -> impl Fn() -> Option<AnyView> + Clone + Send + Sync + 'static {
    move || {
        let index = vm.lines.with(|lines| lines.iter().position(|l| l.key == line_key))?;
        vm.errors.with(|e| {
            e.get(&format!("details.{}.{}", index, field))
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> }.into_any())
        })
    }
}

/// Create/edit page for an incoming transaction
#[component]
pub fn BarangMasukForm() -> impl IntoView {
    let params = use_params_map();
    let vm = BarangMasukFormViewModel::new();

    let edit_id = params.with_untracked(|p| {
        p.get("id")
            .and_then(|raw| BarangMasukId::from_string(&raw).ok())
    });
    let is_edit = edit_id.is_some();
    if let Some(id) = edit_id {
        vm.load(id);
    }

    let lokasi_options = RwSignal::new(Vec::<LokasiRef>::new());
    let model_options = RwSignal::new(Vec::<ModelBarangRef>::new());
    spawn_local(async move {
        match lokasi_api::list().await {
            Ok(options) => lokasi_options.set(options),
            Err(e) => log::error!("Failed to load lokasi: {}", e),
        }
        match model_api::refs().await {
            Ok(options) => model_options.set(options),
            Err(e) => log::error!("Failed to load model refs: {}", e),
        }
    });

    let navigate = use_navigate();
    let on_saved = {
        let navigate = navigate.clone();
        Callback::new(move |_| navigate("/barang-masuk", Default::default()))
    };
    let handle_cancel = move |_| navigate("/barang-masuk", Default::default());

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(on_saved);
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{if is_edit { "Edit Barang Masuk" } else { "Tambah Barang Masuk" }}</h1>
                    <p class="page-header__subtitle">
                        "Catat barang yang masuk ke inventori beserta detailnya."
                    </p>
                </div>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
            {move || vm.loading.get().then(|| view! {
                <div class="loading">"Memuat data..."</div>
            })}

            <form class="card form-card" on:submit=handle_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="masuk-tanggal">"Tanggal"</label>
                        <input
                            type="date"
                            id="masuk-tanggal"
                            required
                            prop:value=move || vm.tanggal.get()
                            on:input=move |ev| vm.tanggal.set(event_target_value(&ev))
                        />
                        {field_error(vm.errors, "tanggal")}
                    </div>

                    <div class="form-group">
                        <label for="masuk-asal">"Asal Barang"</label>
                        <select
                            id="masuk-asal"
                            required
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                let parsed = if value.is_empty() {
                                    None
                                } else {
                                    LokasiId::from_string(&value).ok()
                                };
                                vm.asal_id.set(parsed);
                            }
                        >
                            <option value="" selected=move || vm.asal_id.get().is_none()>
                                "Pilih Asal Barang"
                            </option>
                            {move || lokasi_options.get().into_iter().map(|l| {
                                let id = l.id;
                                view! {
                                    <option
                                        value=id.as_string()
                                        selected=move || vm.asal_id.get() == Some(id)
                                    >
                                        {l.nama.clone()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                        {field_error(vm.errors, "asal_id")}
                    </div>
                </div>

                <div class="form-lines">
                    <div class="form-lines__header">
                        <h3>"Detail Barang"</h3>
                        <button
                            type="button"
                            class="button button--secondary"
                            on:click=move |_| vm.add_line()
                        >
                            {icon("plus")}
                            "Tambah Baris"
                        </button>
                    </div>
                    {field_error(vm.errors, "details")}

                    <For
                        each=move || vm.lines.get()
                        key=|line| line.key
                        children=move |line| {
                            let key = line.key;
                            let model_sig = line.model_barang_id;
                            let serial_sig = line.serial_number;
                            let kondisi_sig = line.kondisi;
                            view! {
                                <div class="form-line">
                                    <div class="form-group">
                                        <label>"Model Barang"</label>
                                        <select
                                            required
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                let parsed = if value.is_empty() {
                                                    None
                                                } else {
                                                    ModelBarangId::from_string(&value).ok()
                                                };
                                                model_sig.set(parsed);
                                            }
                                        >
                                            <option value="" selected=move || model_sig.get().is_none()>
                                                "Pilih Model"
                                            </option>
                                            {move || model_options.get().into_iter().map(|m| {
                                                let id = m.id;
                                                view! {
                                                    <option
                                                        value=id.as_string()
                                                        selected=move || model_sig.get() == Some(id)
                                                    >
                                                        {m.display()}
                                                    </option>
                                                }
                                            }).collect_view()}
                                        </select>
                                        {line_error(vm, key, "model_barang_id")}
                                    </div>

                                    <div class="form-group">
                                        <label>"Nomor Seri"</label>
                                        <input
                                            type="text"
                                            required
                                            prop:value=move || serial_sig.get()
                                            on:input=move |ev| serial_sig.set(event_target_value(&ev))
                                            placeholder="Contoh: SN-2025-001"
                                        />
                                        {line_error(vm, key, "serial_number")}
                                    </div>

                                    <div class="form-group">
                                        <label>"Kondisi"</label>
                                        <select
                                            on:change=move |ev| {
                                                let value = event_target_value(&ev);
                                                if let Some(kondisi) = Kondisi::from_code(&value) {
                                                    kondisi_sig.set(kondisi);
                                                }
                                            }
                                        >
                                            {Kondisi::ALL.iter().map(|k| {
                                                let k = *k;
                                                view! {
                                                    <option
                                                        value=k.code()
                                                        selected=move || kondisi_sig.get() == k
                                                    >
                                                        {k.label()}
                                                    </option>
                                                }
                                            }).collect_view()}
                                        </select>
                                    </div>

                                    <button
                                        type="button"
                                        class="button button--icon button--delete form-line__remove"
                                        title="Hapus baris"
                                        on:click=move |_| vm.remove_line(key)
                                    >
                                        {icon("delete")}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="form-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {if is_edit { "Simpan Perubahan" } else { "Simpan Barang Masuk" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=handle_cancel
                    >
                        "Batal"
                    </button>
                </div>
            </form>
        </div>
    }
}
