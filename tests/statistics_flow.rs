//! End-to-end statistics flow: repository snapshot -> aggregation
//!
//! Exercises the same path the statistics endpoint takes (load every task
//! from the store, reduce with a fixed reference instant) plus property
//! checks over the aggregation itself.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use taskboard_domain::{stats, Priority, Task, TaskRepository, TaskStatus};
use taskboard_persistence::InMemoryTaskRepository;

fn task(status: TaskStatus, start: DateTime<Utc>, end: DateTime<Utc>) -> Task {
    Task::new(
        "tracked work".to_string(),
        start,
        end,
        Priority::new(3).unwrap(),
        status,
    )
    .unwrap()
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn report_over_mixed_store_contents() {
    let repo = InMemoryTaskRepository::new();
    let now = fixed_now();

    // Two finished (2h and 4h), one pending started 1h ago with 3h left
    repo.save(&task(
        TaskStatus::Finished,
        now - Duration::hours(10),
        now - Duration::hours(8),
    ))
    .await
    .unwrap();
    repo.save(&task(
        TaskStatus::Finished,
        now - Duration::hours(10),
        now - Duration::hours(6),
    ))
    .await
    .unwrap();
    repo.save(&task(
        TaskStatus::Pending,
        now - Duration::hours(1),
        now + Duration::hours(3),
    ))
    .await
    .unwrap();

    let snapshot = repo.find_all().await.unwrap();
    let report = stats::compute(&snapshot, now);

    assert_eq!(report.total_tasks, 3);
    assert_eq!(report.completed_tasks, 2);
    assert_eq!(report.pending_tasks, 1);
    assert_eq!(report.completed_percentage, Some(66.67));
    assert_eq!(report.pending_percentage, Some(33.33));
    assert_eq!(report.average_completion_time, 3.0);
    assert_eq!(report.pending_time_lapsed, 1.0);
    assert_eq!(report.pending_time_remaining, 3.0);
}

#[tokio::test]
async fn report_reflects_store_mutations() {
    let repo = InMemoryTaskRepository::new();
    let now = fixed_now();

    let mut tracked = task(
        TaskStatus::Pending,
        now - Duration::hours(2),
        now + Duration::hours(2),
    );
    repo.save(&tracked).await.unwrap();

    let before = stats::compute(&repo.find_all().await.unwrap(), now);
    assert_eq!(before.completed_percentage, Some(0.0));

    tracked.set_status(TaskStatus::Finished);
    repo.save(&tracked).await.unwrap();

    let after = stats::compute(&repo.find_all().await.unwrap(), now);
    assert_eq!(after.completed_percentage, Some(100.0));
    assert_eq!(after.total_tasks, 1);
}

#[tokio::test]
async fn empty_store_produces_no_data_markers() {
    let repo = InMemoryTaskRepository::new();
    let report = stats::compute(&repo.find_all().await.unwrap(), fixed_now());

    assert_eq!(report.total_tasks, 0);
    assert_eq!(report.completed_percentage, None);
    assert_eq!(report.pending_percentage, None);
    assert_eq!(report.average_completion_time, 0.0);
}

proptest! {
    #[test]
    fn prop_partition_counts_cover_the_list(
        statuses in prop::collection::vec(prop::bool::ANY, 0..60),
    ) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let tasks: Vec<Task> = statuses
            .iter()
            .map(|&finished| {
                let status = if finished {
                    TaskStatus::Finished
                } else {
                    TaskStatus::Pending
                };
                task(status, start, start + Duration::hours(1))
            })
            .collect();

        let report = stats::compute(&tasks, fixed_now());
        prop_assert_eq!(report.completed_tasks + report.pending_tasks, report.total_tasks);
        if report.total_tasks > 0 {
            let sum = report.completed_percentage.unwrap()
                + report.pending_percentage.unwrap();
            prop_assert!((sum - 100.0).abs() < 1e-9);
        } else {
            prop_assert_eq!(report.completed_percentage, None);
        }
    }

    #[test]
    fn prop_report_is_deterministic(
        finished_count in 0usize..20,
        pending_count in 0usize..20,
    ) {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let mut tasks = Vec::new();
        for _ in 0..finished_count {
            tasks.push(task(TaskStatus::Finished, start, start + Duration::minutes(90)));
        }
        for _ in 0..pending_count {
            tasks.push(task(TaskStatus::Pending, start, start + Duration::hours(6)));
        }

        let now = fixed_now();
        prop_assert_eq!(stats::compute(&tasks, now), stats::compute(&tasks, now));
    }
}
