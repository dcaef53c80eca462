use crate::shared::list_utils::page_from_url;
use contracts::shared::pagination::PageLink;
use leptos::prelude::*;

/// Renders the server-provided pagination link set unmodified.
///
/// Links without a url (disabled prev/next, ellipsis) render as inert spans;
/// the rest navigate by extracting the `page` parameter from the link url.
#[component]
pub fn PaginationLinks(
    #[prop(into)] links: Signal<Vec<PageLink>>,
    on_navigate: Callback<u64>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            {move || links.get().into_iter().map(|link| {
                match link.url.as_deref().and_then(page_from_url) {
                    Some(page) => {
                        let label = link.label.clone();
                        let class = if link.active {
                            "pagination__link pagination__link--active"
                        } else {
                            "pagination__link"
                        };
                        view! {
                            <button
                                class=class
                                on:click=move |_| on_navigate.run(page)
                            >
                                {label}
                            </button>
                        }.into_any()
                    }
                    None => view! {
                        <span class="pagination__link pagination__link--disabled">
                            {link.label.clone()}
                        </span>
                    }.into_any(),
                }
            }).collect_view()}
        </nav>
    }
}
