use crate::routes::AppRoutes;
use crate::system::auth::context::provide_permissions;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Permission set is fetched once and shared with every page via context.
    provide_permissions();

    view! {
        <AppRoutes />
    }
}
