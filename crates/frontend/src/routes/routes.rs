use crate::domain::a005_model_barang::ui::list::ModelBarangPage;
use crate::domain::a006_barang_masuk::ui::details::BarangMasukForm;
use crate::domain::a006_barang_masuk::ui::list::BarangMasukPage;
use crate::domain::a007_barang_kembali::ui::details::BarangKembaliForm;
use crate::domain::a007_barang_kembali::ui::list::BarangKembaliPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p class="not-found">"Halaman tidak ditemukan"</p> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/barang-masuk" /> } />
                    <Route path=path!("/model-barang") view=ModelBarangPage />
                    <Route path=path!("/barang-masuk") view=BarangMasukPage />
                    <Route path=path!("/barang-masuk/tambah") view=BarangMasukForm />
                    <Route path=path!("/barang-masuk/:id/edit") view=BarangMasukForm />
                    <Route path=path!("/barang-kembali") view=BarangKembaliPage />
                    <Route path=path!("/barang-kembali/tambah") view=BarangKembaliForm />
                    <Route path=path!("/barang-kembali/:id/edit") view=BarangKembaliForm />
                </Routes>
            </Shell>
        </Router>
    }
}
