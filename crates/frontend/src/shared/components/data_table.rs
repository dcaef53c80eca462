use crate::shared::components::pagination_links::PaginationLinks;
use crate::shared::list_utils::SearchInput;
use contracts::shared::pagination::PageLink;
use leptos::prelude::*;
use std::sync::Arc;

/// Renders one cell of a row
pub type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

/// Column descriptor: header label plus a cell renderer
#[derive(Clone)]
pub struct Column<T> {
    pub header: &'static str,
    pub width: Option<&'static str>,
    cell: CellRenderer<T>,
}

impl<T> Column<T> {
    pub fn new(
        header: &'static str,
        cell: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            header,
            width: None,
            cell: Arc::new(cell),
        }
    }

    pub fn with_width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(&self, row: &T) -> AnyView {
        (self.cell)(row)
    }
}

/// Generic paginated data table.
///
/// Columns are static descriptors; rows, counts and the pagination link set
/// come from the listing response. The actions renderer, when given, adds a
/// trailing column (the caller decides per permission set what to put there).
#[component]
pub fn DataTable<T>(
    #[prop(into)] rows: Signal<Vec<T>>,
    columns: Vec<Column<T>>,
    /// Trailing actions column; `None` hides it entirely
    actions: Option<CellRenderer<T>>,
    #[prop(into)] links: Signal<Vec<PageLink>>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] from: Signal<Option<u64>>,
    #[prop(into)] to: Signal<Option<u64>>,
    on_page: Callback<u64>,
    #[prop(into)] search_value: Signal<String>,
    on_search: Callback<String>,
    #[prop(optional, into)] search_placeholder: String,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
{
    let has_actions = actions.is_some();
    let column_count = columns.len() + usize::from(has_actions);
    let columns = StoredValue::new(columns);
    let actions = StoredValue::new(actions);

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <SearchInput
                    value=search_value
                    on_change=on_search
                    placeholder=search_placeholder
                />
            </div>

            <div class="table-container">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {columns.with_value(|cols| cols.iter().map(|col| {
                                let style = col.width.map(|w| format!("width: {};", w));
                                view! {
                                    <th class="table__header-cell" style=style>
                                        {col.header}
                                    </th>
                                }
                            }).collect_view())}
                            {has_actions.then(|| view! {
                                <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let items = rows.get();
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td class="table__cell table__cell--empty" colspan=column_count>
                                            "Tidak ada data untuk ditampilkan"
                                        </td>
                                    </tr>
                                }.into_any()
                            } else {
                                items.into_iter().map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            {columns.with_value(|cols| cols.iter().map(|col| {
                                                view! {
                                                    <td class="table__cell">{col.render(&row)}</td>
                                                }
                                            }).collect_view())}
                                            {actions.with_value(|a| a.as_ref().map(|render| {
                                                view! {
                                                    <td class="table__cell table__cell--actions">
                                                        {render(&row)}
                                                    </td>
                                                }
                                            }))}
                                        </tr>
                                    }
                                }).collect_view().into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="data-table__footer">
                <span class="data-table__count">
                    {move || match (from.get(), to.get()) {
                        (Some(from), Some(to)) => {
                            format!("Menampilkan {}-{} dari {} data", from, to, total.get())
                        }
                        _ => format!("Total {} data", total.get()),
                    }}
                </span>
                <PaginationLinks links=links on_navigate=on_page />
            </div>
        </div>
    }
}
