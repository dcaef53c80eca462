pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application shell:
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |         Content              |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <Sidebar />
                <main class="app-content">
                    {children()}
                </main>
            </div>
        </div>
    }
}
