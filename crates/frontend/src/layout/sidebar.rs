use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__section">"Transaksi"</div>
            <A href="/barang-masuk" attr:class="sidebar__link">
                {icon("arrow-down-circle")}
                <span>"Barang Masuk"</span>
            </A>
            <A href="/barang-kembali" attr:class="sidebar__link">
                {icon("arrow-up-circle")}
                <span>"Barang Kembali"</span>
            </A>
            <div class="sidebar__section">"Master"</div>
            <A href="/model-barang" attr:class="sidebar__link">
                {icon("package")}
                <span>"Model Barang"</span>
            </A>
        </nav>
    }
}
