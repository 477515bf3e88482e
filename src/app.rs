//! TodoMatic App
//!
//! Root component. Owns the task list and the active filter; rows and filter
//! buttons only get snapshots and callbacks.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterButton, NewTaskForm, TodoItem};
use crate::lagged::{count_decreased, Previous};
use crate::models::{Filter, Task};
use crate::store::{
    store_add_task, store_delete_task, store_edit_task, store_set_filter, store_toggle_task,
    TodoState, TodoStateStoreFields, TodoStore,
};
use crate::tasks::{filter_tasks, heading_text};

#[component]
pub fn App(tasks: Vec<Task>, #[prop(into)] title: String) -> impl IntoView {
    log::info!("[APP] starting with {} tasks", tasks.len());

    // State
    let store: TodoStore = Store::new(TodoState::new(tasks));
    let list_heading_ref = NodeRef::<leptos::html::H2>::new();

    // Mutation callbacks handed to children
    let add_task = Callback::new(move |name: String| store_add_task(&store, &name));
    let toggle_task_completed =
        Callback::new(move |id: String| store_toggle_task(&store, &id));
    let edit_task = Callback::new(move |(id, name): (String, String)| {
        store_edit_task(&store, &id, &name)
    });
    let delete_task = Callback::new(move |id: String| store_delete_task(&store, &id));
    let set_filter = Callback::new(move |filter: Filter| store_set_filter(&store, filter));

    let visible = Memo::new(move |_| {
        let filter = store.filter().get();
        filter_tasks(&store.tasks().read(), filter)
    });
    let heading = move || visible.with(|tasks| heading_text(tasks.len()));

    // Focus the heading whenever the total count drops
    let prev_len = StoredValue::new(Previous::<usize>::new());
    Effect::new(move |_| {
        let len = store.tasks().read().len();
        let was = prev_len.try_update_value(|prev| prev.replace(len)).flatten();
        if count_decreased(was, len) {
            if let Some(heading) = list_heading_ref.get_untracked() {
                let _ = heading.focus();
            }
        }
    });

    view! {
        <div class="todoapp stack-large">
            <h1>{title}</h1>

            <NewTaskForm add_task=add_task />

            <div class="filters btn-group stack-exception">
                {Filter::ALL
                    .into_iter()
                    .map(|filter| {
                        let is_pressed = Signal::derive(move || store.filter().get() == filter);
                        view! {
                            <FilterButton filter=filter is_pressed=is_pressed set_filter=set_filter />
                        }
                    })
                    .collect_view()}
            </div>

            <h2 id="list-heading" tabindex="-1" node_ref=list_heading_ref>
                {heading}
            </h2>

            <ul
                role="list"
                class="todo-list stack-large stack-exception"
                aria-labelledby="list-heading"
            >
                <For
                    each=move || visible.get()
                    key=|task| task.id.clone()
                    children=move |task: Task| {
                        let name = task_field(store, task.id.clone(), |t| t.name.clone());
                        let completed = task_field(store, task.id.clone(), |t| t.completed);
                        view! {
                            <TodoItem
                                id=task.id
                                name=name
                                completed=completed
                                toggle_task_completed=toggle_task_completed
                                delete_task=delete_task
                                edit_task=edit_task
                            />
                        }
                    }
                />
            </ul>
        </div>
    }
}

/// Track one field of the task with `id`. Rows are keyed by id, so this is
/// how a kept row sees renames and toggles.
fn task_field<T>(store: TodoStore, id: String, field: fn(&Task) -> T) -> Signal<T>
where
    T: Clone + Default + Send + Sync + 'static,
{
    Signal::derive(move || {
        store
            .tasks()
            .read()
            .iter()
            .find(|t| t.id == id)
            .map(field)
            .unwrap_or_default()
    })
}
