//! Scoring engine: turns task lifecycle events into achievement updates.
//!
//! Every operation here is synchronous and side-effect free apart from the
//! `&mut` inputs it is handed. Callers are responsible for loading inputs,
//! serialising updates per user, and persisting the results.

use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

use crate::domain::{AchievementRecord, StreakChange, Task, TaskId, UserId};


/// Points awarded for each completion under the default policy.
pub const DEFAULT_POINTS_PER_COMPLETION: u64 = 10;
/// Leaderboard length under the default policy.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// Tunable scoring constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringPolicy {
    pub points_per_completion: u64,
    pub leaderboard_limit: usize,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            points_per_completion: DEFAULT_POINTS_PER_COMPLETION,
            leaderboard_limit: DEFAULT_LEADERBOARD_LIMIT,
        }
    }
}

/// The lifecycle state a transition required but did not find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedTaskState {
    Pending,
    Completed,
}

impl std::fmt::Display for ExpectedTaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Completed => f.write_str("completed"),
        }
    }
}

/// Errors raised when an engine call violates its preconditions.
///
/// Inputs are left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// The task was not in the state the transition starts from.
    #[error("task {task_id} must be {expected} for this transition")]
    PreconditionViolation {
        task_id: TaskId,
        expected: ExpectedTaskState,
    },
    /// The achievement record belongs to someone other than the task owner.
    #[error("achievement record of {record_owner} cannot score task owned by {task_owner}")]
    OwnerMismatch {
        task_owner: UserId,
        record_owner: UserId,
    },
}

/// What a successful completion changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub points_awarded: u64,
    pub streak_change: StreakChange,
    pub completed_on: NaiveDate,
}

/// Applies the scoring rules of a [`ScoringPolicy`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use streakboard::domain::{AchievementRecord, ScoringEngine, Task, TaskDraft, UserId};
///
/// let owner = UserId::random();
/// let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
/// let mut task = Task::new(TaskDraft::pending(owner.clone(), "Stretch", None, None, now))?;
/// let mut record = AchievementRecord::new(owner);
///
/// let outcome = ScoringEngine::default()
///     .complete_task(&mut task, &mut record, now)
///     .expect("pending task completes");
/// assert_eq!(outcome.points_awarded, 10);
/// assert_eq!(record.points(), 10);
/// assert_eq!(record.current_streak(), 1);
/// # Ok::<(), streakboard::domain::TaskValidationError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Mark `task` completed at `now` and score it on `record`.
    ///
    /// The streak uses the UTC calendar date of `now`.
    pub fn complete_task(
        &self,
        task: &mut Task,
        record: &mut AchievementRecord,
        now: DateTime<Utc>,
    ) -> Result<CompletionOutcome, ScoringError> {
        ensure_same_owner(task, record)?;
        if task.completed() {
            return Err(ScoringError::PreconditionViolation {
                task_id: task.id(),
                expected: ExpectedTaskState::Pending,
            });
        }

        let today = now.date_naive();
        task.mark_completed(now);
        record.award_points(self.policy.points_per_completion);
        record.count_completion();
        let streak_change = record.advance_streak(today);

        Ok(CompletionOutcome {
            points_awarded: self.policy.points_per_completion,
            streak_change,
            completed_on: today,
        })
    }

    /// Return a completed `task` to pending.
    ///
    /// Points are kept and the streak is not recomputed; only the
    /// completion count drops (never below zero).
    pub fn uncomplete_task(
        &self,
        task: &mut Task,
        record: &mut AchievementRecord,
    ) -> Result<(), ScoringError> {
        ensure_same_owner(task, record)?;
        if !task.completed() {
            return Err(ScoringError::PreconditionViolation {
                task_id: task.id(),
                expected: ExpectedTaskState::Completed,
            });
        }

        task.mark_pending();
        record.release_completion();
        Ok(())
    }

    /// Account for the deletion of `task`.
    ///
    /// Returns whether `record` changed: only completed tasks hold a place in
    /// the completion count.
    pub fn release_deleted_task(
        &self,
        task: &Task,
        record: &mut AchievementRecord,
    ) -> Result<bool, ScoringError> {
        ensure_same_owner(task, record)?;
        if !task.completed() {
            return Ok(false);
        }
        record.release_completion();
        Ok(true)
    }
}

fn ensure_same_owner(task: &Task, record: &AchievementRecord) -> Result<(), ScoringError> {
    if task.owner() == record.owner() {
        Ok(())
    } else {
        Err(ScoringError::OwnerMismatch {
            task_owner: task.owner().clone(),
            record_owner: record.owner().clone(),
        })
    }
}
