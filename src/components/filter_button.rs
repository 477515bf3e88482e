//! Filter Button Component
//!
//! Toggle-style button for one list filter.

use leptos::prelude::*;

use crate::models::Filter;

/// Button selecting one filter
///
/// # Arguments
/// * `filter` - Filter this button selects
/// * `is_pressed` - Whether `filter` is the active one (exposed as `aria-pressed`)
/// * `set_filter` - Callback invoked with `filter` on click
#[component]
pub fn FilterButton(
    filter: Filter,
    #[prop(into)] is_pressed: Signal<bool>,
    #[prop(into)] set_filter: Callback<Filter>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="btn toggle-btn"
            aria-pressed=move || is_pressed.get().to_string()
            on:click=move |_| set_filter.run(filter)
        >
            <span class="visually-hidden">"Show "</span>
            <span>{filter.name()}</span>
            <span class="visually-hidden">" tasks"</span>
        </button>
    }
}
