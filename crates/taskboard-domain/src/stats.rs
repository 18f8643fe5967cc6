//! Statistics aggregation over the task collection
//!
//! A single-pass, pure reduction: given the full task list and a reference
//! instant, produce the dashboard report. Deterministic except for the
//! injected `now`, which only affects the pending-task figures.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Task;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Aggregate completion statistics for a snapshot of the task list.
///
/// Percentages are `None` for an empty list: an explicit no-data marker
/// rather than a NaN or a zero that silently reads as "nothing done".
/// `average_completion_time` stays `0.0` when no task is finished; that
/// asymmetry matches the behavior the dashboard was built around.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatistics {
    /// Count of all tasks considered
    pub total_tasks: usize,
    /// Tasks with status `finished`
    pub completed_tasks: usize,
    /// Tasks with status `pending`
    pub pending_tasks: usize,
    /// Share of finished tasks in [0, 100], two-decimal rounded
    pub completed_percentage: Option<f64>,
    /// Complement of `completed_percentage`; the pair sums to exactly 100
    pub pending_percentage: Option<f64>,
    /// Hours elapsed since start, summed over pending tasks (not clamped:
    /// a future start contributes negatively)
    pub pending_time_lapsed: f64,
    /// Hours from `now` to the estimated end, floored at zero per task,
    /// summed over pending tasks
    pub pending_time_remaining: f64,
    /// Mean completion hours over finished tasks, `0.0` when none exist
    pub average_completion_time: f64,
    /// Count of tasks whose end precedes their start. Their negative
    /// durations flow into the sums unclamped; this surfaces the anomaly.
    pub inverted_windows: usize,
}

/// Round to two decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn hours(duration: Duration) -> f64 {
    duration.num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Compute the statistics report for `tasks` as of `now`.
///
/// Never panics: the empty list yields the no-data markers, and bad time
/// windows degrade numerically instead of failing the request.
pub fn compute(tasks: &[Task], now: DateTime<Utc>) -> TaskStatistics {
    let total_tasks = tasks.len();

    let mut completed_tasks = 0usize;
    let mut completed_time_sum = 0.0f64;
    let mut pending_time_lapsed = 0.0f64;
    let mut pending_time_remaining = 0.0f64;
    let mut inverted_windows = 0usize;

    for task in tasks {
        if task.has_inverted_window() {
            inverted_windows += 1;
        }

        if task.status().is_finished() {
            completed_tasks += 1;
            completed_time_sum += hours(task.end_time() - task.start_time());
        } else {
            pending_time_lapsed += hours(now - task.start_time());
            pending_time_remaining += hours(task.end_time() - now).max(0.0);
        }
    }

    let pending_tasks = total_tasks - completed_tasks;

    // Pending is the complement of completed so the pair always sums to
    // exactly 100 regardless of rounding.
    let (completed_percentage, pending_percentage) = if total_tasks == 0 {
        (None, None)
    } else {
        let completed = round2(100.0 * completed_tasks as f64 / total_tasks as f64);
        (Some(completed), Some(round2(100.0 - completed)))
    };

    let average_completion_time = if completed_tasks > 0 {
        round2(completed_time_sum / completed_tasks as f64)
    } else {
        0.0
    };

    TaskStatistics {
        total_tasks,
        completed_tasks,
        pending_tasks,
        completed_percentage,
        pending_percentage,
        pending_time_lapsed: round2(pending_time_lapsed),
        pending_time_remaining: round2(pending_time_remaining),
        average_completion_time,
        inverted_windows,
    }
}
