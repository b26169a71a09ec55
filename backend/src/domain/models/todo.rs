use serde::{Deserialize, Serialize};

/// A single todo item as owned by a storage backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Todo {
    /// Backend-assigned decimal id; empty until the todo has been stored
    pub id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl Todo {
    /// Build a todo that has not been stored yet
    pub fn new(title: impl Into<String>, description: impl Into<String>, completed: bool) -> Self {
        Self {
            id: String::new(),
            title: title.into(),
            description: description.into(),
            completed,
        }
    }

    /// Render a numeric id the way backends store it
    pub fn format_id(value: u64) -> String {
        value.to_string()
    }

    /// Numeric value of the id, if it is a decimal integer
    pub fn numeric_id(&self) -> Option<u64> {
        self.id.parse::<u64>().ok()
    }

    /// Next id for a collection holding `todos`.
    ///
    /// Equals `count + 1` while no todo has been deleted; never hands out an
    /// id that is already taken once deletions have left gaps. `None` once the
    /// highest stored id is `u64::MAX`.
    pub fn next_id(todos: &[Todo]) -> Option<String> {
        let highest = todos.iter().filter_map(Todo::numeric_id).max().unwrap_or(0);
        let count = todos.len() as u64;
        highest.max(count).checked_add(1).map(Self::format_id)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TodoValidationError {
    #[error("body: required field 'title' missing")]
    EmptyTitle,
    #[error("body: required field 'description' missing")]
    EmptyDescription,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(id: &str) -> Todo {
        Todo {
            id: id.to_string(),
            ..Todo::new("t", "d", false)
        }
    }

    #[test]
    fn test_next_id_on_empty_collection() {
        assert_eq!(Todo::next_id(&[]).as_deref(), Some("1"));
    }

    #[test]
    fn test_next_id_is_count_plus_one_without_gaps() {
        let todos = vec![stored("1"), stored("2"), stored("3")];
        assert_eq!(Todo::next_id(&todos).as_deref(), Some("4"));
    }

    #[test]
    fn test_next_id_skips_ids_left_after_deletion() {
        // "2" was deleted; count + 1 would collide with "3"
        let todos = vec![stored("1"), stored("3")];
        assert_eq!(Todo::next_id(&todos).as_deref(), Some("4"));
    }

    #[test]
    fn test_next_id_ignores_non_numeric_ids() {
        let todos = vec![stored("abc")];
        assert_eq!(Todo::next_id(&todos).as_deref(), Some("2"));
    }

    #[test]
    fn test_next_id_is_none_when_ids_are_exhausted() {
        let todos = vec![stored("1"), stored(&u64::MAX.to_string())];
        assert_eq!(Todo::next_id(&todos), None);
    }
}
