use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <header class="top-header">
            <span class="top-header__title">"Inventaris"</span>
            <span class="top-header__subtitle">"Manajemen barang sekolah"</span>
        </header>
    }
}
