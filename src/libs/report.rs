//! Task and user overview reports.
//!
//! Both reports are pure functions of a snapshot and the current date; they
//! are rebuilt on every request and never cached. Percentages are 0 whenever
//! their denominator is 0. Tasks whose due date cannot be parsed are never
//! counted as overdue.

use super::task::Task;
use super::user::User;
use chrono::NaiveDate;
use serde::Serialize;

/// `part / whole * 100`, or 0 for an empty whole.
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskReport {
    pub total: usize,
    pub completed: usize,
    pub incomplete: usize,
    pub overdue: usize,
    pub completed_pct: f64,
    pub incomplete_pct: f64,
    pub overdue_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserStats {
    pub username: String,
    pub task_count: usize,
    /// This user's share of every tracked task.
    pub share_pct: f64,
    pub completed: usize,
    pub incomplete: usize,
    pub overdue: usize,
    pub completed_pct: f64,
    pub incomplete_pct: f64,
    pub overdue_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserReport {
    pub total_users: usize,
    pub total_tasks: usize,
    pub users: Vec<UserStats>,
}

struct Counts {
    total: usize,
    completed: usize,
    overdue: usize,
}

fn count<'a>(tasks: impl Iterator<Item = &'a Task>, today: NaiveDate) -> Counts {
    let mut counts = Counts { total: 0, completed: 0, overdue: 0 };
    for task in tasks {
        counts.total += 1;
        if task.is_complete() {
            counts.completed += 1;
        } else if task.is_overdue(today) {
            counts.overdue += 1;
        }
    }
    counts
}

pub fn build_task_report(tasks: &[Task], today: NaiveDate) -> TaskReport {
    let Counts { total, completed, overdue } = count(tasks.iter(), today);
    let incomplete = total - completed;

    TaskReport {
        total,
        completed,
        incomplete,
        overdue,
        completed_pct: percentage(completed, total),
        incomplete_pct: percentage(incomplete, total),
        overdue_pct: percentage(overdue, total),
    }
}

pub fn build_user_report(users: &[User], tasks: &[Task], today: NaiveDate) -> UserReport {
    let stats = users
        .iter()
        .map(|user| {
            let Counts { total, completed, overdue } =
                count(tasks.iter().filter(|t| t.owner == user.username), today);
            let incomplete = total - completed;

            UserStats {
                username: user.username.clone(),
                task_count: total,
                share_pct: percentage(total, tasks.len()),
                completed,
                incomplete,
                overdue,
                completed_pct: percentage(completed, total),
                incomplete_pct: percentage(incomplete, total),
                overdue_pct: percentage(overdue, total),
            }
        })
        .collect();

    UserReport {
        total_users: users.len(),
        total_tasks: tasks.len(),
        users: stats,
    }
}
