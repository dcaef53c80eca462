use crate::shared::icons::icon;
use leptos::prelude::*;

/// FilterPanel component - collapsible panel holding the listing filters
#[component]
pub fn FilterPanel(
    /// Whether the filter panel is expanded
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Number of active filters (for badge display)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Restores every filter field to its default and reloads the list
    on_reset: Callback<()>,

    /// Filter content (form fields)
    children: Children,
) -> impl IntoView {
    let toggle_expanded = move |_| {
        is_expanded.update(|e| *e = !*e);
    };

    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=toggle_expanded
                >
                    {move || {
                        if is_expanded.get() {
                            icon("chevron-up")
                        } else {
                            icon("chevron-down")
                        }
                    }}
                    {icon("filter")}
                    <span class="filter-panel__title">"Filter"</span>
                    {move || {
                        let count = active_filters_count.get();
                        if count > 0 {
                            view! {
                                <span class="badge badge--primary">{count}</span>
                            }.into_any()
                        } else {
                            view! { <></> }.into_any()
                        }
                    }}
                </div>
                <button
                    class="button button--secondary filter-panel__reset"
                    on:click=move |_| on_reset.run(())
                >
                    "Reset Filter"
                </button>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {children()}
                </div>
            </div>
        </div>
    }
}
