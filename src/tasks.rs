//! Task List Operations
//!
//! Copy-on-write helpers over the task collection. Every function returns a
//! fresh `Vec`; an id that is not present leaves the contents unchanged.

use uuid::Uuid;

use crate::models::{Filter, Task};

/// Fresh `todo-` prefixed id
pub fn new_task_id() -> String {
    format!("todo-{}", Uuid::new_v4().simple())
}

/// Append a new, not completed task. The name is taken as-is.
pub fn add_task(tasks: &[Task], name: &str) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(Task::new(new_task_id(), name, false));
    next
}

pub fn toggle_task_completed(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    completed: !task.completed,
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

pub fn edit_task(tasks: &[Task], id: &str, new_name: &str) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id == id {
                Task {
                    name: new_name.to_string(),
                    ..task.clone()
                }
            } else {
                task.clone()
            }
        })
        .collect()
}

pub fn delete_task(tasks: &[Task], id: &str) -> Vec<Task> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Tasks matching `filter`, in original order
pub fn filter_tasks(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

pub fn remaining_noun(count: usize) -> &'static str {
    if count == 1 {
        "task"
    } else {
        "tasks"
    }
}

/// List heading, e.g. "2 tasks remaining"
pub fn heading_text(count: usize) -> String {
    format!("{} {} remaining", count, remaining_noun(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("todo-0", "Eat", true),
            Task::new("todo-1", "Sleep", false),
            Task::new("todo-2", "Repeat", false),
        ]
    }

    #[test]
    fn test_add_task() {
        let tasks = add_task(&[], "Buy milk");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].name, "Buy milk");
        assert!(!tasks[0].completed);
        assert!(tasks[0].id.starts_with("todo-"));
        assert!(tasks[0].id.len() > "todo-".len());
    }

    #[test]
    fn test_add_task_appends_with_unique_id() {
        let tasks = add_task(&sample(), "");
        assert_eq!(tasks.len(), 4);
        assert_eq!(tasks[3].name, "");
        assert_eq!(&tasks[..3], &sample()[..]);

        let again = add_task(&tasks, "");
        assert_ne!(again[3].id, again[4].id);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let original = sample();
        let once = toggle_task_completed(&original, "todo-1");
        assert!(once[1].completed);
        assert_eq!(once[0], original[0]);
        assert_eq!(once[2], original[2]);

        let twice = toggle_task_completed(&once, "todo-1");
        assert_eq!(twice, original);
    }

    #[test]
    fn test_edit_preserves_identity() {
        let tasks = edit_task(&sample(), "todo-0", "Eat lunch");
        assert_eq!(tasks[0], Task::new("todo-0", "Eat lunch", true));
        assert_eq!(&tasks[1..], &sample()[1..]);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let original = sample();
        assert_eq!(edit_task(&original, "todo-9", "x"), original);
        assert_eq!(toggle_task_completed(&original, "todo-9"), original);
        assert_eq!(delete_task(&original, "todo-9"), original);
    }

    #[test]
    fn test_delete_removes_only_target() {
        let tasks = delete_task(&sample(), "todo-1");
        let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["todo-0", "todo-2"]);
    }

    #[test]
    fn test_filter_tasks() {
        let tasks = vec![
            Task::new("a", "A", false),
            Task::new("b", "B", true),
            Task::new("c", "C", false),
            Task::new("d", "D", true),
        ];
        let ids = |filter| -> Vec<String> {
            filter_tasks(&tasks, filter).into_iter().map(|t| t.id).collect()
        };
        assert_eq!(ids(Filter::All), ["a", "b", "c", "d"]);
        assert_eq!(ids(Filter::Active), ["a", "c"]);
        assert_eq!(ids(Filter::Completed), ["b", "d"]);
    }

    #[test]
    fn test_heading_text() {
        assert_eq!(heading_text(0), "0 tasks remaining");
        assert_eq!(heading_text(1), "1 task remaining");
        assert_eq!(heading_text(2), "2 tasks remaining");
        assert_eq!(heading_text(11), "11 tasks remaining");
    }
}
