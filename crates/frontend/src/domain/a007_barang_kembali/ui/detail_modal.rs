use crate::shared::components::modal::Modal;
use crate::shared::date_utils::format_tanggal;
use crate::shared::list_utils::kondisi_badge_class;
use contracts::domain::a007_barang_kembali::dto::BarangKembaliView;
use leptos::prelude::*;

/// Read-only overlay with the full nested record
#[component]
pub fn BarangKembaliDetailModal(
    detail: BarangKembaliView,
    on_close: Callback<()>,
) -> impl IntoView {
    let tanggal = format_tanggal(&detail.tanggal);
    let lokasi = detail.lokasi.nama.clone();
    let details = detail.details;

    view! {
        <Modal title={"Detail Barang Kembali".to_string()} on_close=on_close>
            <div class="detail-summary">
                <div class="detail-summary__item">
                    <span class="detail-summary__label">"Tanggal"</span>
                    <span>{tanggal}</span>
                </div>
                <div class="detail-summary__item">
                    <span class="detail-summary__label">"Lokasi Asal"</span>
                    <span>{lokasi}</span>
                </div>
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Model"</th>
                            <th class="table__header-cell">"Kategori"</th>
                            <th class="table__header-cell">"Jenis"</th>
                            <th class="table__header-cell">"Nomor Seri"</th>
                            <th class="table__header-cell">"Kondisi Saat Kembali"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {details.into_iter().map(|line| {
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">
                                        <div class="cell-strong">
                                            {format!("{} {}", line.merek, line.model)}
                                        </div>
                                    </td>
                                    <td class="table__cell">{line.kategori}</td>
                                    <td class="table__cell">
                                        {line.jenis.unwrap_or_else(|| "-".to_string())}
                                    </td>
                                    <td class="table__cell">{line.serial_number}</td>
                                    <td class="table__cell">
                                        <span class=kondisi_badge_class(line.kondisi)>
                                            {line.kondisi.label()}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </Modal>
    }
}
