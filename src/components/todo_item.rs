//! Todo Item Component
//!
//! One task row. Renders either the view template or the editing template
//! and moves focus when the row switches between them.

use leptos::prelude::*;

use crate::lagged::Previous;
use crate::row_state::{focus_after_render, FocusTarget, RowMode, RowState};

/// A single task row
///
/// The checkbox is seeded from `completed` each time the view template is
/// built and is not bound to it afterwards.
#[component]
pub fn TodoItem(
    id: String,
    #[prop(into)] name: Signal<String>,
    #[prop(into)] completed: Signal<bool>,
    #[prop(into)] toggle_task_completed: Callback<String>,
    #[prop(into)] delete_task: Callback<String>,
    #[prop(into)] edit_task: Callback<(String, String)>,
) -> impl IntoView {
    let id = StoredValue::new(id);
    let (row, set_row) = signal(RowState::new());
    let mode = Memo::new(move |_| row.with(|r| r.mode()));

    let edit_field_ref = NodeRef::<leptos::html::Input>::new();
    let edit_button_ref = NodeRef::<leptos::html::Button>::new();

    // Focus follows mode transitions, compared against the previous pass
    let prev_mode = StoredValue::new(Previous::<RowMode>::new());
    Effect::new(move |_| {
        let now = mode.get();
        let was = prev_mode.try_update_value(|prev| prev.replace(now)).flatten();
        match focus_after_render(was, now) {
            Some(FocusTarget::EditField) => {
                if let Some(input) = edit_field_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            Some(FocusTarget::EditButton) => {
                if let Some(button) = edit_button_ref.get_untracked() {
                    let _ = button.focus();
                }
            }
            None => {}
        }
    });

    let save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_name = set_row.try_update(|r| r.save()).unwrap_or_default();
        log::debug!("[ROW] save {}", id.get_value());
        edit_task.run((id.get_value(), new_name));
    };

    let editing_template = move || {
        view! {
            <form class="stack-small" on:submit=save>
                <div class="form-group">
                    <label class="todo-label" for=id.get_value()>
                        "New name for " {move || name.get()}
                    </label>
                    <input
                        id=id.get_value()
                        class="todo-text"
                        type="text"
                        node_ref=edit_field_ref
                        prop:value=move || row.with(|r| r.draft().to_string())
                        on:input=move |ev| {
                            let text = event_target_value(&ev);
                            set_row.update(|r| r.set_draft(text));
                        }
                    />
                </div>
                <div class="btn-group">
                    <button
                        type="button"
                        class="btn todo-cancel"
                        on:click=move |_| set_row.update(|r| r.cancel())
                    >
                        "Cancel"
                        <span class="visually-hidden">"renaming " {move || name.get()}</span>
                    </button>
                    <button type="submit" class="btn btn__primary todo-edit">
                        "Save"
                        <span class="visually-hidden">"new name for " {move || name.get()}</span>
                    </button>
                </div>
            </form>
        }
    };

    let view_template = move || {
        view! {
            <div class="stack-small">
                <div class="c-cb">
                    <input
                        id=id.get_value()
                        type="checkbox"
                        checked=completed.get_untracked()
                        on:change=move |_| toggle_task_completed.run(id.get_value())
                    />
                    <label class="todo-label" for=id.get_value()>
                        {move || name.get()}
                    </label>
                </div>
                <div class="btn-group">
                    <button
                        type="button"
                        class="btn"
                        node_ref=edit_button_ref
                        on:click=move |_| set_row.update(|r| r.begin_edit())
                    >
                        "Edit " <span class="visually-hidden">{move || name.get()}</span>
                    </button>
                    <button
                        type="button"
                        class="btn btn__danger"
                        on:click=move |_| delete_task.run(id.get_value())
                    >
                        "Delete " <span class="visually-hidden">{move || name.get()}</span>
                    </button>
                </div>
            </div>
        }
    };

    view! {
        <li class="todo">
            {move || match mode.get() {
                RowMode::Viewing => view_template().into_any(),
                RowMode::Editing => editing_template().into_any(),
            }}
        </li>
    }
}
