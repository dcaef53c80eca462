//! Utilities shared by the listing pages (search box, pagination helpers)

use crate::shared::debounce::FILTER_DEBOUNCE_MS;
use contracts::enums::kondisi::Kondisi;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Extract the `page` parameter from a pagination-link url ("?search=x&page=3")
pub fn page_from_url(url: &str) -> Option<u64> {
    let query = url.rsplit('?').next().unwrap_or(url);
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("page=").and_then(|v| v.parse().ok()))
}

/// Badge style of a condition value
pub fn kondisi_badge_class(kondisi: Kondisi) -> &'static str {
    match kondisi {
        Kondisi::Bagus => "badge badge--success",
        Kondisi::Rusak => "badge badge--danger",
        Kondisi::Hilang => "badge badge--muted",
    }
}

/// Search box with trailing-edge debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the final text after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounced commit
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Follow external changes to the committed value (e.g. reset filter)
    Effect::new(move |_| {
        set_input_value.set(value.get());
    });

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        // Cancel the previous timer if it has not fired yet
        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = web_sys::window().expect("no window");
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref::<js_sys::Function>(),
                FILTER_DEBOUNCE_MS as i32,
            )
            .expect("setTimeout failed");

        closure.forget();
        debounce_timeout.set_value(Some(timeout_id));
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Bersihkan"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_url() {
        assert_eq!(page_from_url("?page=3"), Some(3));
        assert_eq!(page_from_url("?search=asus&page=12"), Some(12));
        assert_eq!(page_from_url("?sort=terbaru&per_page=25&page=2"), Some(2));
        assert_eq!(page_from_url("?search=asus"), None);
        assert_eq!(page_from_url(""), None);
    }

    #[test]
    fn test_page_from_url_ignores_similar_keys() {
        assert_eq!(page_from_url("?per_page=25"), None);
    }
}
