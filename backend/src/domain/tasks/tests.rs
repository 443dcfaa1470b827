//! Regression coverage for task domain types.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::{TASK_TITLE_MAX, Task, TaskDraft, TaskId, TaskValidationError};
use crate::domain::UserId;

#[fixture]
fn draft() -> TaskDraft {
    let created_at = Utc
        .with_ymd_and_hms(2026, 3, 2, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    TaskDraft::pending(
        UserId::random(),
        "  Write weekly report  ",
        Some("  include metrics ".to_owned()),
        NaiveDate::from_ymd_opt(2026, 3, 6),
        created_at,
    )
}

#[rstest]
fn task_trims_title_and_description(draft: TaskDraft) {
    let task = Task::new(draft).expect("valid task");
    assert_eq!(task.title(), "Write weekly report");
    assert_eq!(task.description(), Some("include metrics"));
    assert!(!task.completed());
}

#[rstest]
#[case("")]
#[case("    ")]
fn task_rejects_blank_title(mut draft: TaskDraft, #[case] title: &str) {
    draft.title = title.to_owned();
    assert_eq!(Task::new(draft), Err(TaskValidationError::EmptyTitle));
}

#[rstest]
fn task_rejects_overlong_title(mut draft: TaskDraft) {
    draft.title = "x".repeat(TASK_TITLE_MAX + 1);
    assert_eq!(
        Task::new(draft),
        Err(TaskValidationError::TitleTooLong {
            max: TASK_TITLE_MAX
        })
    );
}

#[rstest]
fn blank_description_is_stored_as_absent(mut draft: TaskDraft) {
    draft.description = Some("   ".to_owned());
    let task = Task::new(draft).expect("valid task");
    assert!(task.description().is_none());
}

#[rstest]
fn restore_rejects_completed_flag_without_timestamp(draft: TaskDraft) {
    assert_eq!(
        Task::restore(draft, true),
        Err(TaskValidationError::CompletedWithoutTimestamp)
    );
}

#[rstest]
fn restore_rejects_timestamp_on_pending_task(mut draft: TaskDraft) {
    draft.completed_at = Some(draft.created_at + Duration::hours(1));
    assert_eq!(
        Task::restore(draft, false),
        Err(TaskValidationError::TimestampWithoutCompletion)
    );
}

#[rstest]
fn completion_flag_tracks_timestamp(draft: TaskDraft) {
    let at = draft.created_at + Duration::minutes(30);
    let mut task = Task::new(draft).expect("valid task");

    task.mark_completed(at);
    assert!(task.completed());
    assert_eq!(task.completed_at(), Some(at));

    task.mark_pending();
    assert!(!task.completed());
    assert!(task.completed_at().is_none());
}

#[rstest]
fn task_id_parses_from_string() {
    let id = TaskId::random();
    let parsed: TaskId = id.to_string().parse().expect("valid task id");
    assert_eq!(parsed, id);
}
