//! Dashboard read models derived from a user's tasks and record.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::domain::{AchievementRecord, Task};

/// Number of daily buckets in [`WeeklyActivity`].
pub const WEEKLY_ACTIVITY_DAYS: usize = 7;

/// Summary counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub points: u64,
    pub streak: u32,
}

/// Completions counted on one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyCompletions {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub completed: u64,
}

/// Seven daily buckets, oldest first, ending today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyActivity {
    pub days: Vec<DailyCompletions>,
}

impl WeeklyActivity {
    /// Total completions across the window.
    pub fn total(&self) -> u64 {
        self.days.iter().map(|day| day.completed).sum()
    }
}

/// Count tasks by completion state and copy the scoring totals.
///
/// A missing record reports zero points and no streak.
pub fn compute_dashboard_stats(
    tasks: &[Task],
    record: Option<&AchievementRecord>,
) -> DashboardStats {
    let total_tasks = tasks.len() as u64;
    let completed_tasks = tasks.iter().filter(|task| task.completed()).count() as u64;
    DashboardStats {
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks - completed_tasks,
        points: record.map_or(0, AchievementRecord::points),
        streak: record.map_or(0, AchievementRecord::current_streak),
    }
}

/// Bucket completions of `tasks` into the seven days ending on `today` (UTC
/// calendar days). Pending tasks and completions outside the window are
/// ignored.
pub fn compute_weekly_activity(tasks: &[Task], today: NaiveDate) -> WeeklyActivity {
    let span = WEEKLY_ACTIVITY_DAYS as i64 - 1;
    let first = today - Duration::days(span);
    let mut days: Vec<DailyCompletions> = first
        .iter_days()
        .take(WEEKLY_ACTIVITY_DAYS)
        .map(|date| DailyCompletions {
            date,
            weekday: date.weekday(),
            completed: 0,
        })
        .collect();

    for completed_on in tasks
        .iter()
        .filter_map(|task| task.completed_at())
        .map(|at| at.date_naive())
    {
        let offset = (completed_on - first).num_days();
        if !(0..=span).contains(&offset) {
            continue;
        }
        if let Some(bucket) = usize::try_from(offset)
            .ok()
            .and_then(|index| days.get_mut(index))
        {
            bucket.completed += 1;
        }
    }

    WeeklyActivity { days }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for dashboard projections.

    use chrono::{DateTime, TimeZone, Utc};
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::{TaskDraft, UserId};

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn task(owner: &UserId, completed_at: Option<DateTime<Utc>>) -> Task {
        let mut draft = TaskDraft::pending(owner.clone(), "task", None, None, at(1, 0));
        draft.completed_at = completed_at;
        Task::restore(draft, completed_at.is_some()).expect("valid task")
    }

    #[fixture]
    fn owner() -> UserId {
        UserId::random()
    }

    #[rstest]
    fn stats_count_completed_and_pending(owner: UserId) {
        let tasks = vec![
            task(&owner, Some(at(2, 9))),
            task(&owner, None),
            task(&owner, Some(at(3, 9))),
        ];
        let record = AchievementRecord::restore(owner, 20, 2, 2, None);

        let stats = compute_dashboard_stats(&tasks, Some(&record));

        assert_eq!(
            stats,
            DashboardStats {
                total_tasks: 3,
                completed_tasks: 2,
                pending_tasks: 1,
                points: 20,
                streak: 2,
            }
        );
    }

    #[rstest]
    fn missing_record_reports_zero_scores(owner: UserId) {
        let stats = compute_dashboard_stats(&[task(&owner, None)], None);
        assert_eq!(stats.points, 0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.total_tasks, 1);
        assert_eq!(stats.pending_tasks, 1);
    }

    #[rstest]
    fn empty_task_list_is_all_zero() {
        assert_eq!(compute_dashboard_stats(&[], None), DashboardStats::default());
    }

    #[rstest]
    fn weekly_activity_spans_seven_days_ending_today(owner: UserId) {
        let today = at(10, 0).date_naive();
        let tasks = vec![
            task(&owner, Some(at(10, 8))),
            task(&owner, Some(at(10, 20))),
            task(&owner, Some(at(4, 12))),
            task(&owner, Some(at(3, 23))),
            task(&owner, None),
        ];

        let activity = compute_weekly_activity(&tasks, today);

        assert_eq!(activity.days.len(), WEEKLY_ACTIVITY_DAYS);
        assert_eq!(activity.days.first().map(|d| d.date), Some(at(4, 0).date_naive()));
        assert_eq!(activity.days.last().map(|d| d.date), Some(today));
        assert_eq!(
            activity.days.iter().map(|d| d.completed).collect::<Vec<_>>(),
            vec![1, 0, 0, 0, 0, 0, 2]
        );
        assert_eq!(activity.total(), 3);
    }

    #[rstest]
    fn weekday_labels_follow_dates() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 15).expect("valid date");
        let activity = compute_weekly_activity(&[], today);
        assert_eq!(activity.days.last().map(|d| d.weekday), Some(Weekday::Sun));
        assert_eq!(activity.days.first().map(|d| d.weekday), Some(Weekday::Mon));
    }
}
