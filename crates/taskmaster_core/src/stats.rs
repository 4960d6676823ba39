//! Pure aggregation over the task collection.
//!
//! # Responsibility
//! - Compute the statistics and dashboard views from the current
//!   collection and an explicit reference date.
//!
//! # Invariants
//! - Same collection and same reference date always produce the same
//!   output; there is no wall-clock access and no hidden state.
//! - All rates are 0 for an empty collection (never NaN or a panic).

use crate::model::task::{Priority, Task};
use chrono::{Datelike, Days, NaiveDate};

/// Number of tasks shown in the dashboard recent-tasks card.
pub const RECENT_TASKS_LIMIT: usize = 5;

/// Count and share-of-total for one priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrioritySlice {
    pub count: usize,
    /// Rounded percentage of the whole collection; 0 when it is empty.
    pub percentage: u32,
}

/// Per-priority task distribution.
///
/// The three counts always sum to the collection size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub high: PrioritySlice,
    pub medium: PrioritySlice,
    pub low: PrioritySlice,
}

impl PriorityBreakdown {
    pub fn total(&self) -> usize {
        self.high.count + self.medium.count + self.low.count
    }
}

/// Count and share-of-total for one category label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySlice {
    pub category: String,
    pub count: usize,
    pub percentage: u32,
}

/// Full statistics view over the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStatistics {
    pub total_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    /// Rounded completed/total percentage; 0 for an empty collection.
    pub completion_rate: u32,
    pub priority_breakdown: PriorityBreakdown,
    /// Grouped by category label in first-seen order.
    pub category_breakdown: Vec<CategorySlice>,
    /// Pending tasks whose due date is before the reference date.
    pub overdue_count: usize,
    /// Tasks due between the reference date and the upcoming Sunday,
    /// both inclusive.
    pub due_this_week_count: usize,
    /// Category with the most completed tasks; ties go to the label seen
    /// first. `None` when nothing is completed (rendered as "N/A").
    pub most_productive_category: Option<String>,
    /// 0-100 blend of completion rate and timeliness; 0 for an empty
    /// collection.
    pub productivity_score: u32,
}

/// Dashboard overview counters plus the recent-tasks card content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_count: usize,
    pub completed_count: usize,
    pub pending_count: usize,
    pub completion_rate: u32,
    /// Pending tasks due exactly on the reference date.
    pub due_today_count: usize,
    /// High-priority tasks still open.
    pub high_priority_pending_count: usize,
    /// First [`RECENT_TASKS_LIMIT`] tasks in insertion order.
    pub recent_tasks: Vec<Task>,
}

/// Computes the statistics view for the given reference date.
pub fn compute_statistics(tasks: &[Task], today: NaiveDate) -> TaskStatistics {
    let total_count = tasks.len();
    let completed_count = tasks.iter().filter(|task| task.completed).count();
    let pending_count = total_count - completed_count;
    let completion_rate = percentage(completed_count, total_count);

    let overdue_count = tasks.iter().filter(|task| task.is_overdue(today)).count();

    let end = week_end(today);
    let due_this_week_count = tasks
        .iter()
        .filter(|task| task.due_date >= today && task.due_date <= end)
        .count();

    // The score blends the rounded completion rate with the unrounded
    // overdue rate.
    let productivity_score = if total_count == 0 {
        0
    } else {
        let overdue_rate = overdue_count as f64 / total_count as f64 * 100.0;
        ((f64::from(completion_rate) + (100.0 - overdue_rate)) / 2.0).round() as u32
    };

    TaskStatistics {
        total_count,
        completed_count,
        pending_count,
        completion_rate,
        priority_breakdown: priority_breakdown(tasks),
        category_breakdown: category_breakdown(tasks),
        overdue_count,
        due_this_week_count,
        most_productive_category: most_productive_category(tasks),
        productivity_score,
    }
}

/// Computes the dashboard view for the given reference date.
pub fn dashboard_summary(tasks: &[Task], today: NaiveDate) -> DashboardSummary {
    let total_count = tasks.len();
    let completed_count = tasks.iter().filter(|task| task.completed).count();

    DashboardSummary {
        total_count,
        completed_count,
        pending_count: total_count - completed_count,
        completion_rate: percentage(completed_count, total_count),
        due_today_count: tasks
            .iter()
            .filter(|task| !task.completed && task.due_date == today)
            .count(),
        high_priority_pending_count: tasks
            .iter()
            .filter(|task| task.priority == Priority::High && !task.completed)
            .count(),
        recent_tasks: tasks.iter().take(RECENT_TASKS_LIMIT).cloned().collect(),
    }
}

/// Returns the Sunday that closes the week of `today`.
///
/// When `today` is itself a Sunday, that same day is returned, so the
/// `today..=week_end(today)` window never reaches into the next week.
pub fn week_end(today: NaiveDate) -> NaiveDate {
    let days_left = u64::from(7 - today.weekday().number_from_monday());
    today
        .checked_add_days(Days::new(days_left))
        .unwrap_or(NaiveDate::MAX)
}

fn priority_breakdown(tasks: &[Task]) -> PriorityBreakdown {
    let total = tasks.len();
    let count_of = |priority: Priority| {
        let count = tasks.iter().filter(|task| task.priority == priority).count();
        PrioritySlice {
            count,
            percentage: percentage(count, total),
        }
    };

    PriorityBreakdown {
        high: count_of(Priority::High),
        medium: count_of(Priority::Medium),
        low: count_of(Priority::Low),
    }
}

fn category_breakdown(tasks: &[Task]) -> Vec<CategorySlice> {
    let total = tasks.len();
    let mut slices: Vec<CategorySlice> = Vec::new();

    // Linear scan keeps first-seen label order, which the view relies on.
    for task in tasks {
        match slices
            .iter_mut()
            .find(|slice| slice.category == task.category)
        {
            Some(slice) => slice.count += 1,
            None => slices.push(CategorySlice {
                category: task.category.clone(),
                count: 1,
                percentage: 0,
            }),
        }
    }

    for slice in &mut slices {
        slice.percentage = percentage(slice.count, total);
    }
    slices
}

fn most_productive_category(tasks: &[Task]) -> Option<String> {
    let mut completed_by_category: Vec<(&str, usize)> = Vec::new();
    for task in tasks.iter().filter(|task| task.completed) {
        match completed_by_category
            .iter_mut()
            .find(|(category, _)| *category == task.category)
        {
            Some((_, count)) => *count += 1,
            None => completed_by_category.push((task.category.as_str(), 1)),
        }
    }

    // Strict comparison keeps the first-seen label on ties.
    let mut best: Option<(&str, usize)> = None;
    for (category, count) in completed_by_category {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.to_string())
}

fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::{percentage, week_end};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn week_end_of_sunday_is_that_sunday() {
        let sunday = date(2024, 1, 21);
        assert_eq!(week_end(sunday), sunday);
    }

    #[test]
    fn week_end_of_monday_is_six_days_later() {
        assert_eq!(week_end(date(2024, 1, 15)), date(2024, 1, 21));
    }

    #[test]
    fn week_end_crosses_month_boundary() {
        assert_eq!(week_end(date(2024, 1, 30)), date(2024, 2, 4));
    }

    #[test]
    fn percentage_rounds_half_up_and_guards_zero_total() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(0, 0), 0);
    }
}
