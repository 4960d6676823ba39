//! Task-creation defaults.
//!
//! # Responsibility
//! - Carry the default priority/category applied to fresh drafts.
//! - Name the stock category suggestion set.
//!
//! Settings persistence is out of scope; these values only shape the
//! create path for the current session.

use crate::model::task::Priority;
use serde::{Deserialize, Serialize};

/// Stock category suggestions offered on the create path.
///
/// `Task::category` stays free-form; this set is advisory only.
pub const SUGGESTED_CATEGORIES: [&str; 5] =
    ["Work", "Personal", "Health", "Learning", "Administrative"];

/// Default field values applied to new task drafts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDefaults {
    pub priority: Priority,
    pub category: String,
}

impl Default for TaskDefaults {
    fn default() -> Self {
        Self {
            priority: Priority::Medium,
            category: "Work".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskDefaults, SUGGESTED_CATEGORIES};
    use crate::model::task::Priority;

    #[test]
    fn stock_defaults_match_creation_form() {
        let defaults = TaskDefaults::default();
        assert_eq!(defaults.priority, Priority::Medium);
        assert_eq!(defaults.category, "Work");
    }

    #[test]
    fn default_category_is_suggested() {
        let defaults = TaskDefaults::default();
        assert!(SUGGESTED_CATEGORIES.contains(&defaults.category.as_str()));
    }
}
