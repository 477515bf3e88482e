//! Lagged Snapshots
//!
//! Holds the value seen at the end of the previous render pass so effects
//! can react to transitions instead of absolute values.

/// One-slot snapshot of a value from the previous render pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Previous<T> {
    value: Option<T>,
}

impl<T> Previous<T> {
    pub fn new() -> Self {
        Self { value: None }
    }

    /// Store `current` for the next pass and return the one it replaces.
    pub fn replace(&mut self, current: T) -> Option<T> {
        self.value.replace(current)
    }
}

/// True only when a previous count exists and the current one is smaller
pub fn count_decreased(previous: Option<usize>, current: usize) -> bool {
    previous.is_some_and(|prev| current < prev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_returns_prior_snapshot() {
        let mut prev = Previous::new();
        assert_eq!(prev.replace(3), None);
        assert_eq!(prev.replace(2), Some(3));
        assert_eq!(prev.replace(2), Some(2));
    }

    #[test]
    fn test_focus_on_delete_not_on_add() {
        // Mirrors the heading effect: one observation per render pass
        let mut prev = Previous::new();
        let mut fired = Vec::new();
        for count in [3, 2, 3, 3, 0] {
            fired.push(count_decreased(prev.replace(count), count));
        }
        assert_eq!(fired, [false, true, false, false, true]);
    }

    #[test]
    fn test_first_pass_never_decreases() {
        assert!(!count_decreased(None, 0));
        assert!(!count_decreased(Some(0), 0));
        assert!(count_decreased(Some(1), 0));
    }
}
