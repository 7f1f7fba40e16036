/// Shared list helpers (sort, search input component)
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;

/// Trait for row types that support sorting
pub trait Sortable {
    /// Compare two rows by the named field
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list in place by the named field
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Sort indicator for a column header
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

const DEBOUNCE_MS: u32 = 300;

/// Terms shorter than 3 characters are not sent to the server
pub fn is_active_search(value: &str) -> bool {
    value.trim().len() >= 3
}

/// Search input with debounce and a clear button.
///
/// The callback fires 300ms after the last keystroke; list screens push the
/// value into their query state, which triggers the server round trip.
#[component]
pub fn SearchInput(
    /// Current filter value (for the active-state styling)
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    // Local state for the input (before debounce)
    let (input_value, set_input_value) = signal(String::new());
    // Generation counter; only the latest pending edit fires the callback
    let generation = StoredValue::new(0u64);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let my_gen = generation.get_value() + 1;
        generation.set_value(my_gen);

        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == my_gen {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || is_active_search(&value.get())
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
                        title="Clear"
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

    struct Row {
        name: String,
        price: f64,
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
                "price" => self
                    .price
                    .partial_cmp(&other.price)
                    .unwrap_or(Ordering::Equal),
                _ => Ordering::Equal,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Kraft paper".into(), price: 120.0 },
            Row { name: "Bubble wrap".into(), price: 80.0 },
            Row { name: "Tape".into(), price: 20.0 },
        ]
    }

    #[test]
    fn test_sort_list() {
        let mut items = rows();
        sort_list(&mut items, "price", true);
        assert_eq!(items[0].name, "Tape");
        sort_list(&mut items, "price", false);
        assert_eq!(items[0].name, "Kraft paper");
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("name", "name", true), " ▲");
        assert_eq!(get_sort_indicator("name", "name", false), " ▼");
        assert_eq!(get_sort_indicator("name", "price", true), " ⇅");
    }

    #[test]
    fn test_active_search_threshold() {
        assert!(is_active_search("box"));
        assert!(is_active_search("  box  "));
        assert!(!is_active_search("bo"));
        assert!(!is_active_search("  b  "));
    }
}
