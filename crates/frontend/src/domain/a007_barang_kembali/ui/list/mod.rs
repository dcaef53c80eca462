use crate::domain::a001_kategori::api as kategori_api;
use crate::domain::a004_lokasi::api as lokasi_api;
use crate::domain::a007_barang_kembali::api;
use crate::domain::a007_barang_kembali::ui::detail_modal::BarangKembaliDetailModal;
use crate::shared::components::data_table::{CellRenderer, Column, DataTable};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::date_utils::format_tanggal;
use crate::shared::debounce::{Debouncer, FILTER_DEBOUNCE_MS};
use crate::shared::icons::icon;
use crate::shared::list_utils::kondisi_badge_class;
use crate::system::auth::context::use_permissions;
use contracts::domain::a001_kategori::aggregate::{KategoriId, KategoriRef};
use contracts::domain::a004_lokasi::aggregate::{LokasiId, LokasiRef};
use contracts::domain::a007_barang_kembali::aggregate::BarangKembaliId;
use contracts::domain::a007_barang_kembali::dto::{
    BarangKembaliFilter, BarangKembaliRow, BarangKembaliView,
};
use contracts::domain::common::AggregateId;
use contracts::shared::pagination::{Paginated, PER_PAGE_OPTIONS, DEFAULT_PER_PAGE};
use contracts::shared::sort::SortOrder;
use contracts::system::auth::permission;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use std::sync::Arc;

#[component]
pub fn BarangKembaliPage() -> impl IntoView {
    let permissions = use_permissions();
    let can_create = permissions.can(permission::CREATE_BARANG_KEMBALI);
    let can_edit = permissions.can(permission::EDIT_BARANG_KEMBALI);
    let can_delete = permissions.can(permission::DELETE_BARANG_KEMBALI);

    let filter = RwSignal::new(BarangKembaliFilter::default());
    let page_data = RwSignal::new(Paginated::<BarangKembaliRow>::empty(DEFAULT_PER_PAGE));
    let kategori_options = RwSignal::new(Vec::<KategoriRef>::new());
    let lokasi_options = RwSignal::new(Vec::<LokasiRef>::new());
    let selected_detail = RwSignal::new(None::<BarangKembaliView>);
    let is_filter_open = RwSignal::new(true);
    let debouncer = Debouncer::new();

    let fetch = move || {
        let current = filter.get_untracked();
        spawn_local(async move {
            match api::list(&current).await {
                Ok(page) => page_data.set(page),
                Err(e) => log::error!("Failed to load barang kembali: {}", e),
            }
        });
    };
    fetch();

    spawn_local(async move {
        match kategori_api::list().await {
            Ok(options) => kategori_options.set(options),
            Err(e) => log::error!("Failed to load kategori: {}", e),
        }
        match lokasi_api::list().await {
            Ok(options) => lokasi_options.set(options),
            Err(e) => log::error!("Failed to load lokasi: {}", e),
        }
    });

    // Every filter change resets to page 1 and reloads after the debounce
    // window; only the last change within the window issues a request.
    let apply_filters = move || {
        filter.update(|f| f.page = 1);
        debouncer.debounce(FILTER_DEBOUNCE_MS, move || fetch());
    };

    let on_reset = Callback::new(move |_| {
        filter.set(BarangKembaliFilter::default());
        fetch();
    });

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

    let open_detail = move |id: BarangKembaliId| {
        spawn_local(async move {
            match api::view(id).await {
                Ok(detail) => selected_detail.set(Some(detail)),
                Err(e) => log::error!("Failed to load detail barang kembali: {}", e),
            }
        });
    };
    // Closing the modal discards the fetched record
    let close_detail = Callback::new(move |_| selected_detail.set(None));

    let handle_delete = move |id: BarangKembaliId| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("Apakah Anda yakin ingin menghapus data ini?")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::delete(id).await {
                Ok(()) => fetch(),
                Err(e) => log::error!("Failed to delete barang kembali: {}", e),
            }
        });
    };

    let columns = vec![
        Column::new("Tanggal", |row: &BarangKembaliRow| {
            view! { <span>{format_tanggal(&row.tanggal)}</span> }.into_any()
        })
        .with_width("150px"),
        Column::new("Merek/Model", |row: &BarangKembaliRow| {
            let merek = row.merek.clone().unwrap_or_default();
            let model = row.model.clone().unwrap_or_else(|| "(Tidak ada barang)".to_string());
            let more = row.jumlah_detail.saturating_sub(1);
            view! {
                <div>
                    <div class="cell-strong">{format!("{} {}", merek, model)}</div>
                    {(more > 0).then(|| view! {
                        <span class="cell-muted">{format!("(+{} lainnya)", more)}</span>
                    })}
                </div>
            }
            .into_any()
        }),
        Column::new("Kategori", |row: &BarangKembaliRow| {
            view! { <span>{row.kategori.clone().unwrap_or_else(|| "-".to_string())}</span> }
                .into_any()
        }),
        Column::new("Asal Lokasi", |row: &BarangKembaliRow| {
            view! { <span>{row.lokasi.clone()}</span> }.into_any()
        }),
        Column::new("Kondisi", |row: &BarangKembaliRow| match row.kondisi {
            Some(kondisi) => view! {
                <span class=kondisi_badge_class(kondisi)>{kondisi.label()}</span>
            }
            .into_any(),
            None => view! { <span class="cell-muted">"-"</span> }.into_any(),
        }),
    ];

    let actions: CellRenderer<BarangKembaliRow> = Arc::new(move |row: &BarangKembaliRow| {
        let id = row.id;
        view! {
            <div class="row-actions">
                <button
                    class="button button--icon"
                    title="Lihat Detail"
                    on:click=move |_| open_detail(id)
                >
                    {icon("eye")}
                </button>
                {move || can_edit.get().then(|| view! {
                    <A
                        href=format!("/barang-kembali/{}/edit", id.value())
                        attr:class="button button--icon button--edit"
                        attr:title="Edit Data"
                    >
                        {icon("edit")}
                    </A>
                })}
                {move || can_delete.get().then(|| view! {
                    <button
                        class="button button--icon button--delete"
                        title="Hapus Data"
                        on:click=move |_| handle_delete(id)
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
                    <h1>"Barang Kembali"</h1>
                    <p class="page-header__subtitle">
                        "Daftar barang yang kembali ke inventori."
                    </p>
                </div>
                {move || can_create.get().then(|| view! {
                    <A href="/barang-kembali/tambah" attr:class="button button--primary">
                        {icon("plus")}
                        "Tambah Barang Kembali"
                    </A>
                })}
            </div>

            <FilterPanel
                is_expanded=is_filter_open
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
                on_reset=on_reset
            >
                    <div class="filter-grid">
                        <div class="form-group">
                            <label>"Tanggal"</label>
                            <input
                                type="date"
                                prop:value=move || filter.with(|f| f.tanggal.clone().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    filter.update(|f| {
                                        f.tanggal = Some(value).filter(|v| !v.is_empty());
                                    });
                                    apply_filters();
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Kategori"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| {
                                    f.kategori_id = if value.is_empty() {
                                        None
                                    } else {
                                        KategoriId::from_string(&value).ok()
                                    };
                                });
                                apply_filters();
                            }>
                                <option value="" selected=move || filter.with(|f| f.kategori_id.is_none())>
                                    "Semua Kategori"
                                </option>
                                {move || kategori_options.get().into_iter().map(|k| {
                                    let id = k.id;
                                    view! {
                                        <option
                                            value=id.as_string()
                                            selected=move || filter.with(|f| f.kategori_id == Some(id))
                                        >
                                            {k.nama.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Lokasi Asal"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| {
                                    f.lokasi_id = if value.is_empty() {
                                        None
                                    } else {
                                        LokasiId::from_string(&value).ok()
                                    };
                                });
                                apply_filters();
                            }>
                                <option value="" selected=move || filter.with(|f| f.lokasi_id.is_none())>
                                    "Semua Lokasi"
                                </option>
                                {move || lokasi_options.get().into_iter().map(|l| {
                                    let id = l.id;
                                    view! {
                                        <option
                                            value=id.as_string()
                                            selected=move || filter.with(|f| f.lokasi_id == Some(id))
                                        >
                                            {l.nama.clone()}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Urutkan"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                if let Some(sort) = SortOrder::from_code(&value) {
                                    filter.update(|f| f.sort = sort);
                                    apply_filters();
                                }
                            }>
                                <option value="terbaru" selected=move || filter.with(|f| f.sort == SortOrder::Terbaru)>
                                    "Terbaru"
                                </option>
                                <option value="terlama" selected=move || filter.with(|f| f.sort == SortOrder::Terlama)>
                                    "Terlama"
                                </option>
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Item per Halaman"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev).parse().unwrap_or(DEFAULT_PER_PAGE);
                                filter.update(|f| f.per_page = value);
                                apply_filters();
                            }>
                                {PER_PAGE_OPTIONS.iter().map(|&size| {
                                    view! {
                                        <option
                                            value=size.to_string()
                                            selected=move || filter.with(|f| f.per_page == size)
                                        >
                                            {format!("{} Data", size)}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>
                    </div>
            </FilterPanel>

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
                search_placeholder="Cari serial, merek, model..."
            />

            {move || selected_detail.get().map(|detail| view! {
                <BarangKembaliDetailModal detail=detail on_close=close_detail />
            })}
        </div>
    }
}
