//! CLI probe for the task core.
//!
//! # Responsibility
//! - Seed the in-memory store with the sample collection and render the
//!   dashboard and statistics views as text.
//! - Keep output deterministic apart from the reference date.

use chrono::Local;
use taskmaster_core::{
    compute_statistics, core_version, dashboard_summary, sample_tasks, InMemoryTaskRepository,
    TaskService,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("taskmaster: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let repo = InMemoryTaskRepository::with_tasks(sample_tasks())
        .map_err(|err| format!("failed to seed sample tasks: {err}"))?;
    let service = TaskService::new(repo);
    let tasks = service.list_tasks();
    let today = Local::now().date_naive();

    println!("taskmaster_core version={}", core_version());
    println!("reference date: {today}");
    println!();

    let summary = dashboard_summary(&tasks, today);
    println!("== dashboard ==");
    println!(
        "total={} completed={} pending={} completion_rate={}%",
        summary.total_count, summary.completed_count, summary.pending_count, summary.completion_rate
    );
    println!(
        "due_today={} high_priority_pending={}",
        summary.due_today_count, summary.high_priority_pending_count
    );
    println!("recent:");
    for task in &summary.recent_tasks {
        let mark = if task.completed { "x" } else { " " };
        println!(
            "  [{mark}] {} ({} / due {})",
            task.title, task.category, task.due_date
        );
    }
    println!();

    let stats = compute_statistics(&tasks, today);
    println!("== statistics ==");
    println!(
        "completion_rate={}% overdue={} due_this_week={}",
        stats.completion_rate, stats.overdue_count, stats.due_this_week_count
    );
    println!(
        "priority: high={} ({}%) medium={} ({}%) low={} ({}%)",
        stats.priority_breakdown.high.count,
        stats.priority_breakdown.high.percentage,
        stats.priority_breakdown.medium.count,
        stats.priority_breakdown.medium.percentage,
        stats.priority_breakdown.low.count,
        stats.priority_breakdown.low.percentage
    );
    println!("categories:");
    for slice in &stats.category_breakdown {
        println!(
            "  {}: {} tasks ({}%)",
            slice.category, slice.count, slice.percentage
        );
    }
    println!(
        "most_productive_category={}",
        stats.most_productive_category.as_deref().unwrap_or("N/A")
    );
    println!("productivity_score={}/100", stats.productivity_score);

    Ok(())
}
