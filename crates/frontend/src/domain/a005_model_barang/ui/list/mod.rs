use crate::domain::a001_kategori::api as kategori_api;
use crate::domain::a002_merek::api as merek_api;
use crate::domain::a005_model_barang::api;
use crate::domain::a005_model_barang::ui::details::{ModelBarangFormCard, ModelBarangFormViewModel};
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::icons::icon;
use crate::system::auth::context::use_permissions;
use contracts::domain::a001_kategori::aggregate::KategoriRef;
use contracts::domain::a002_merek::aggregate::MerekRef;
use contracts::domain::a005_model_barang::aggregate::ModelBarangId;
use contracts::domain::a005_model_barang::dto::{ModelBarangFilter, ModelBarangRow};
use contracts::shared::pagination::{Paginated, DEFAULT_PER_PAGE};
use contracts::system::auth::permission;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

#[component]
pub fn ModelBarangPage() -> impl IntoView {
    let permissions = use_permissions();
    let can_create = permissions.can(permission::CREATE_MODEL_BARANG);
    let can_edit = permissions.can(permission::EDIT_MODEL_BARANG);
    let can_delete = permissions.can(permission::DELETE_MODEL_BARANG);

    let filter = RwSignal::new(ModelBarangFilter::default());
    let page_data = RwSignal::new(Paginated::<ModelBarangRow>::empty(DEFAULT_PER_PAGE));
    let labels = RwSignal::new(Vec::<String>::new());
    let kategori_options = RwSignal::new(Vec::<KategoriRef>::new());
    let merek_options = RwSignal::new(Vec::<MerekRef>::new());
    let show_form = RwSignal::new(false);
    let vm = ModelBarangFormViewModel::new();

    let fetch = move || {
        let current = filter.get_untracked();
        spawn_local(async move {
            match api::list(&current).await {
                Ok(page) => page_data.set(page),
                Err(e) => log::error!("Failed to load model barang: {}", e),
            }
        });
    };
    fetch();

    // Dropdown options and the initial label suggestion list, fetched once
    spawn_local(async move {
        match kategori_api::list().await {
            Ok(options) => kategori_options.set(options),
            Err(e) => log::error!("Failed to load kategori: {}", e),
        }
        match merek_api::list().await {
            Ok(options) => merek_options.set(options),
            Err(e) => log::error!("Failed to load merek: {}", e),
        }
        match api::labels().await {
            Ok(list) => labels.set(list),
            Err(e) => log::error!("Failed to load labels: {}", e),
        }
    });

    // SearchInput already debounces; commit the final value and reload
    let on_search = Callback::new(move |value: String| {
        filter.update(|f| {
            f.search = Some(value.trim().to_string()).filter(|s| !s.is_empty());
            f.page = 1;
        });
        fetch();
    });

    let on_page = Callback::new(move |page: u64| {
        filter.update(|f| f.page = page);
        fetch();
    });

    let on_saved = Callback::new(move |_| {
        show_form.set(false);
        vm.reset();
        fetch();
    });
    let on_cancel = Callback::new(move |_| {
        show_form.set(false);
        vm.reset();
    });

    let handle_create = move |_| {
        vm.reset();
        show_form.set(true);
    };
    let handle_edit = move |row: ModelBarangRow| {
        vm.load_for_edit(&row);
        show_form.set(true);
    };
    let handle_delete = move |id: ModelBarangId| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Yakin ingin menghapus model ini?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
                Err(e) => log::error!("Failed to delete model barang: {}", e),
            }
        });
    };

    let columns = vec![
        Column::new("Model Barang", |row: &ModelBarangRow| {
            view! {
                <div class="cell-strong">{format!("{} {}", row.merek, row.nama)}</div>
            }
            .into_any()
        }),
        Column::new("Kategori", |row: &ModelBarangRow| {
            view! { <span>{row.kategori.clone()}</span> }.into_any()
        }),
        Column::new("Jenis", |row: &ModelBarangRow| {
            view! { <span>{row.jenis.clone().unwrap_or_else(|| "-".to_string())}</span> }
                .into_any()
        }),
        Column::new("Label", |row: &ModelBarangRow| match row.label.clone() {
            Some(label) => view! { <span class="badge badge--primary">{label}</span> }.into_any(),
            None => view! { <span class="cell-muted">"-"</span> }.into_any(),
        }),
    ];

    let actions: CellRenderer<ModelBarangRow> = Arc::new(move |row: &ModelBarangRow| {
        let row_for_edit = row.clone();
        let id_for_delete = row.id;
        view! {
            <div class="row-actions">
                {move || can_edit.get().then(|| {
                    let row = row_for_edit.clone();
                    view! {
                        <button
                            class="button button--icon button--edit"
                            title="Edit"
                            on:click=move |_| handle_edit(row.clone())
                        >
                            {icon("edit")}
                        </button>
                    }
                })}
                {move || can_delete.get().then(|| view! {
                    <button
                        class="button button--icon button--delete"
                        title="Hapus"
                        on:click=move |_| handle_delete(id_for_delete)
                    >
                        {icon("delete")}
                    </button>
                })}
            </div>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"Model Barang"</h1>
                    <p class="page-header__subtitle">
                        "Kelola daftar model barang, kategori, dan jenis."
                    </p>
                </div>
                {move || can_create.get().then(|| view! {
                    <button class="button button--primary" on:click=handle_create>
                        {icon("plus")}
                        "Tambah Model"
                    </button>
                })}
            </div>

            {move || show_form.get().then(|| view! {
                <ModelBarangFormCard
                    vm=vm
                    kategori_options=kategori_options
                    merek_options=merek_options
                    labels=labels
                    on_saved=on_saved
                    on_cancel=on_cancel
                />
            })}

            <DataTable
                rows=Signal::derive(move || page_data.get().data)
                columns=columns
                actions=Some(actions)
                links=Signal::derive(move || page_data.get().links)
                total=Signal::derive(move || page_data.get().total)
                from=Signal::derive(move || page_data.get().from)
                to=Signal::derive(move || page_data.get().to)
                on_page=on_page
                search_value=Signal::derive(move || {
                    filter.with(|f| f.search.clone().unwrap_or_default())
                })
                on_search=on_search
                search_placeholder="Cari model..."
            />
        </div>
    }
}
