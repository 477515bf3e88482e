//! Todo State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only the root
//! component writes here; every write replaces the collection wholesale.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Filter, Task};
use crate::tasks;

/// Root-owned list state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// All tasks, in insertion order
    pub tasks: Vec<Task>,
    /// Active filter
    pub filter: Filter,
}

impl TodoState {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            filter: Filter::All,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_add_task(store: &TodoStore, name: &str) {
    let next = tasks::add_task(&store.tasks().read(), name);
    log::debug!("[STORE] added task, {} total", next.len());
    store.tasks().set(next);
}

pub fn store_toggle_task(store: &TodoStore, id: &str) {
    let next = tasks::toggle_task_completed(&store.tasks().read(), id);
    log::debug!("[STORE] toggled {}", id);
    store.tasks().set(next);
}

pub fn store_edit_task(store: &TodoStore, id: &str, new_name: &str) {
    let next = tasks::edit_task(&store.tasks().read(), id, new_name);
    log::debug!("[STORE] renamed {}", id);
    store.tasks().set(next);
}

pub fn store_delete_task(store: &TodoStore, id: &str) {
    let next = tasks::delete_task(&store.tasks().read(), id);
    log::debug!("[STORE] deleted {}, {} left", id, next.len());
    store.tasks().set(next);
}

pub fn store_set_filter(store: &TodoStore, filter: Filter) {
    log::debug!("[STORE] filter -> {}", filter);
    store.filter().set(filter);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TodoStore {
        Store::new(TodoState::new(vec![
            Task::new("todo-0", "Eat", true),
            Task::new("todo-1", "Sleep", false),
            Task::new("todo-2", "Repeat", false),
        ]))
    }

    fn ids(store: &TodoStore) -> Vec<String> {
        store.tasks().get_untracked().into_iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_store_delete_and_filter() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();

            store_delete_task(&store, "todo-1");
            assert_eq!(ids(&store), ["todo-0", "todo-2"]);
            assert_eq!(store.filter().get_untracked(), Filter::All);

            store_delete_task(&store, "todo-9");
            assert_eq!(ids(&store), ["todo-0", "todo-2"]);

            store_set_filter(&store, Filter::Completed);
            assert_eq!(store.filter().get_untracked(), Filter::Completed);
            assert_eq!(store.tasks().get_untracked().len(), 2);
        });
    }

    #[test]
    fn test_store_add_toggle_edit() {
        let owner = Owner::new();
        owner.with(|| {
            let store = seeded();

            store_add_task(&store, "Buy milk");
            store_toggle_task(&store, "todo-1");
            store_edit_task(&store, "todo-2", "Repeat again");

            let tasks = store.tasks().get_untracked();
            assert_eq!(tasks.len(), 4);
            assert_eq!(tasks[0], Task::new("todo-0", "Eat", true));
            assert_eq!(tasks[1], Task::new("todo-1", "Sleep", true));
            assert_eq!(tasks[2], Task::new("todo-2", "Repeat again", false));
            assert_eq!(tasks[3].name, "Buy milk");
            assert!(!tasks[3].completed);
        });
    }
}
