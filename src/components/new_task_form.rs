//! New Task Form Component
//!
//! Form for adding a task to the end of the list.

use leptos::prelude::*;

/// Form for creating new tasks. Submits whatever is typed, empty included.
#[component]
pub fn NewTaskForm(#[prop(into)] add_task: Callback<String>) -> impl IntoView {
    let (name, set_name) = signal(String::new());

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        add_task.run(name.get_untracked());
        set_name.set(String::new());
    };

    view! {
        <form on:submit=submit>
            <h2 class="label-wrapper">
                <label for="new-todo-input" class="label__lg">
                    "What needs to be done?"
                </label>
            </h2>
            <input
                type="text"
                id="new-todo-input"
                class="input input__lg"
                name="text"
                autocomplete="off"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn__primary btn__lg">
                "Add"
            </button>
        </form>
    }
}
