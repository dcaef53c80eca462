pub mod view_model;

pub use view_model::ModelBarangFormViewModel;

use contracts::domain::a001_kategori::aggregate::{KategoriId, KategoriRef};
use contracts::domain::a002_merek::aggregate::{MerekId, MerekRef};
use contracts::domain::a003_jenis_barang::aggregate::JenisBarangId;
use contracts::domain::common::AggregateId;
use contracts::shared::validation::ValidationErrors;
use leptos::prelude::*;

fn field_error(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl Fn() -> Option<AnyView> + Clone + Send + Sync + 'static {
    move || {
        errors.with(|e| {
            e.get(field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> }.into_any())
        })
    }
}

/// Inline create/edit card of the catalog page
#[component]
pub fn ModelBarangFormCard(
    vm: ModelBarangFormViewModel,
    #[prop(into)] kategori_options: Signal<Vec<KategoriRef>>,
    #[prop(into)] merek_options: Signal<Vec<MerekRef>>,
    /// Session-local label suggestion list, appended on every submit
    labels: RwSignal<Vec<String>>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.save_command(labels, on_saved);
    };

    view! {
        <div class="card form-card">
            <div class="form-card__header">
                <h2>
                    {move || if vm.is_edit_mode() { "Edit Model" } else { "Tambah Model Baru" }}
                </h2>
                <button class="button button--icon" on:click=move |_| on_cancel.run(())>
                    {crate::shared::icons::icon("x")}
                </button>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <form class="form-grid" on:submit=handle_submit>
                <div class="form-group">
                    <label for="model-nama">"Nama Model"</label>
                    <input
                        type="text"
                        id="model-nama"
                        required
                        prop:value=move || vm.form.with(|f| f.nama.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| f.nama = event_target_value(&ev));
                        }
                        placeholder="Contoh: ROG Strix G15"
                    />
                    {field_error(vm.errors, "nama")}
                </div>

                <div class="form-group">
                    <label for="model-kategori">"Kategori"</label>
                    <select
                        id="model-kategori"
                        required
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let parsed = if value.is_empty() {
                                None
                            } else {
                                KategoriId::from_string(&value).ok()
                            };
                            vm.on_kategori_changed(parsed);
                        }
                    >
                        <option value="" selected=move || vm.form.with(|f| f.kategori_id.is_none())>
                            "Pilih Kategori"
                        </option>
                        {move || kategori_options.get().into_iter().map(|k| {
                            let id = k.id;
                            view! {
                                <option
                                    value=id.as_string()
                                    selected=move || vm.form.with(|f| f.kategori_id == Some(id))
                                >
                                    {k.nama.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    {field_error(vm.errors, "kategori_id")}
                </div>

                <div class="form-group">
                    <label for="model-merek">"Merek"</label>
                    <select
                        id="model-merek"
                        required
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let parsed = if value.is_empty() {
                                None
                            } else {
                                MerekId::from_string(&value).ok()
                            };
                            vm.form.update(|f| f.merek_id = parsed);
                        }
                    >
                        <option value="" selected=move || vm.form.with(|f| f.merek_id.is_none())>
                            "Pilih Merek"
                        </option>
                        {move || merek_options.get().into_iter().map(|m| {
                            let id = m.id;
                            view! {
                                <option
                                    value=id.as_string()
                                    selected=move || vm.form.with(|f| f.merek_id == Some(id))
                                >
                                    {m.nama.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    {field_error(vm.errors, "merek_id")}
                </div>

                <div class="form-group">
                    <label for="model-jenis">
                        "Jenis Barang"
                        {move || vm.jenis.with(|s| s.loading).then(|| view! {
                            <span class="label-hint">" (memuat...)"</span>
                        })}
                        {move || vm.form.with(|f| f.kategori_id.is_none()).then(|| view! {
                            <span class="label-hint">" (pilih kategori dulu)"</span>
                        })}
                    </label>
                    <select
                        id="model-jenis"
                        disabled=move || {
                            vm.form.with(|f| f.kategori_id.is_none()) || vm.jenis.with(|s| s.loading)
                        }
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            let parsed = if value.is_empty() {
                                None
                            } else {
                                JenisBarangId::from_string(&value).ok()
                            };
                            vm.form.update(|f| f.jenis_id = parsed);
                        }
                    >
                        <option value="" selected=move || vm.form.with(|f| f.jenis_id.is_none())>
                            {move || {
                                if vm.form.with(|f| f.kategori_id.is_none()) {
                                    "-- Pilih Kategori terlebih dahulu --"
                                } else if vm.jenis.with(|s| s.options.is_empty() && !s.loading) {
                                    "Tidak ada jenis untuk kategori ini"
                                } else {
                                    "Pilih Jenis Barang"
                                }
                            }}
                        </option>
                        {move || vm.jenis.with(|s| s.options.clone()).into_iter().map(|j| {
                            let id = j.id;
                            view! {
                                <option
                                    value=id.as_string()
                                    selected=move || vm.form.with(|f| f.jenis_id == Some(id))
                                >
                                    {j.nama.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                    {field_error(vm.errors, "jenis_id")}
                </div>

                <div class="form-group form-group--wide">
                    <label for="model-label">"Label Barang"</label>
                    <input
                        type="text"
                        id="model-label"
                        list="model-label-options"
                        prop:value=move || vm.form.with(|f| f.label.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|f| {
                                f.label = if value.is_empty() { None } else { Some(value) };
                            });
                        }
                        placeholder="Pilih atau ketik label baru..."
                    />
                    <datalist id="model-label-options">
                        {move || labels.get().into_iter().map(|label| {
                            view! { <option value=label></option> }
                        }).collect_view()}
                    </datalist>
                    {field_error(vm.errors, "label")}
                </div>

                <div class="form-actions form-group--wide">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {move || if vm.is_edit_mode() { "Simpan Perubahan" } else { "Simpan Model" }}
                    </button>
                    <button
                        type="button"
                        class="button button--secondary"
                        on:click=move |_| on_cancel.run(())
                    >
                        "Batal"
                    </button>
                </div>
            </form>
        </div>
    }
}
