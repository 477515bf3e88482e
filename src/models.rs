//! Frontend Models
//!
//! Task record and the fixed set of list filters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Task data structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            completed,
        }
    }
}

/// Named predicate selecting which tasks are shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// All filters, in button order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn name(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_predicates() {
        let open = Task::new("todo-0", "Eat", false);
        let done = Task::new("todo-1", "Sleep", true);

        assert!(Filter::All.matches(&open) && Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&done));
        assert!(Filter::Completed.matches(&done));
        assert!(!Filter::Completed.matches(&open));
    }

    #[test]
    fn test_filter_names_in_button_order() {
        let names: Vec<_> = Filter::ALL.iter().map(|f| f.to_string()).collect();
        assert_eq!(names, ["All", "Active", "Completed"]);
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn test_task_deserialize() {
        let task: Task = serde_json::from_str(r#"{"id":"todo-7","name":"Repeat"}"#).unwrap();
        assert_eq!(task, Task::new("todo-7", "Repeat", false));

        let filter: Filter = serde_json::from_str(r#""Completed""#).unwrap();
        assert_eq!(filter, Filter::Completed);
    }
}
