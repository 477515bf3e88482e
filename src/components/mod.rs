//! UI Components
//!
//! Leptos components rendered under the root `App`.

mod filter_button;
mod new_task_form;
mod todo_item;

pub use filter_button::FilterButton;
pub use new_task_form::NewTaskForm;
pub use todo_item::TodoItem;
