//! Static sample collection.
//!
//! # Responsibility
//! - Provide the deterministic task set the dashboard, list and stats
//!   views are seeded with for a fresh session.
//!
//! Ids and dates are fixed so derived views stay reproducible in tests.

use crate::model::task::{Priority, Task};
use chrono::NaiveDate;
use uuid::Uuid;

/// Returns the stock ten-task sample collection in insertion order.
pub fn sample_tasks() -> Vec<Task> {
    vec![
        seed_task(
            1,
            "Complete project proposal",
            "Draft and finalize the Q1 project proposal for the new client",
            false,
            Priority::High,
            date(2024, 1, 20),
            "Work",
            date(2024, 1, 15),
        ),
        seed_task(
            2,
            "Review team presentations",
            "Go through all team member presentations and provide feedback",
            true,
            Priority::Medium,
            date(2024, 1, 18),
            "Work",
            date(2024, 1, 14),
        ),
        seed_task(
            3,
            "Buy groceries for dinner",
            "Get ingredients for tonight's dinner party",
            false,
            Priority::Low,
            date(2024, 1, 19),
            "Personal",
            date(2024, 1, 16),
        ),
        seed_task(
            4,
            "Schedule dentist appointment",
            "Book routine cleaning appointment for next week",
            false,
            Priority::Medium,
            date(2024, 1, 22),
            "Health",
            date(2024, 1, 15),
        ),
        seed_task(
            5,
            "Finish reading the Rust book",
            "Work through the ownership and trait chapters",
            true,
            Priority::High,
            date(2024, 1, 17),
            "Learning",
            date(2024, 1, 12),
        ),
        seed_task(
            6,
            "Plan weekend trip",
            "Research and book accommodation for the mountain trip",
            false,
            Priority::Low,
            date(2024, 1, 25),
            "Personal",
            date(2024, 1, 16),
        ),
        seed_task(
            7,
            "Update portfolio website",
            "Add recent projects and update the design",
            false,
            Priority::High,
            date(2024, 1, 21),
            "Work",
            date(2024, 1, 13),
        ),
        seed_task(
            8,
            "Call insurance company",
            "Discuss policy renewal and coverage options",
            true,
            Priority::Medium,
            date(2024, 1, 16),
            "Administrative",
            date(2024, 1, 10),
        ),
        seed_task(
            9,
            "Organize home office",
            "",
            true,
            Priority::Low,
            date(2024, 1, 14),
            "Personal",
            date(2024, 1, 11),
        ),
        seed_task(
            10,
            "Prepare monthly report",
            "",
            false,
            Priority::High,
            date(2024, 1, 23),
            "Work",
            date(2024, 1, 17),
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seed_task(
    id: u128,
    title: &str,
    description: &str,
    completed: bool,
    priority: Priority,
    due_date: NaiveDate,
    category: &str,
    created_at: NaiveDate,
) -> Task {
    Task {
        id: Uuid::from_u128(id),
        title: title.to_string(),
        description: description.to_string(),
        completed,
        priority,
        due_date,
        category: category.to_string(),
        created_at,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("static seed date is valid")
}

#[cfg(test)]
mod tests {
    use super::sample_tasks;
    use std::collections::HashSet;

    #[test]
    fn sample_ids_are_unique_and_titles_valid() {
        let tasks = sample_tasks();
        assert_eq!(tasks.len(), 10);

        let ids: HashSet<_> = tasks.iter().map(|task| task.id).collect();
        assert_eq!(ids.len(), tasks.len());

        for task in &tasks {
            assert!(task.validate().is_ok());
        }
    }

    #[test]
    fn sample_has_four_completed_tasks() {
        let completed = sample_tasks().iter().filter(|task| task.completed).count();
        assert_eq!(completed, 4);
    }
}
