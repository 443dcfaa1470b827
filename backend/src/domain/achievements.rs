//! Per-user achievement record: points, completion count and streak.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Aggregate of a user's scoring state.
///
/// Records are created zero-initialised the first time a user scores and are
/// only adjusted through the scoring engine afterwards.
///
/// # Examples
///
/// ```
/// use streakboard::domain::{AchievementRecord, UserId};
///
/// let record = AchievementRecord::new(UserId::random());
/// assert_eq!(record.points(), 0);
/// assert_eq!(record.current_streak(), 0);
/// assert!(record.last_completion_date().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    owner: UserId,
    points: u64,
    tasks_completed: u64,
    current_streak: u32,
    last_completion_date: Option<NaiveDate>,
}

/// How a completion on a given day moved the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First completion ever.
    Started,
    /// Completion on the day after the last one.
    Extended,
    /// Another completion on an already counted day.
    Unchanged,
    /// At least one day was skipped; the chain restarts at one.
    Reset,
}

impl AchievementRecord {
    /// Zero-initialised record for `owner`.
    pub fn new(owner: UserId) -> Self {
        Self {
            owner,
            points: 0,
            tasks_completed: 0,
            current_streak: 0,
            last_completion_date: None,
        }
    }

    /// Rebuild a record from stored values.
    pub fn restore(
        owner: UserId,
        points: u64,
        tasks_completed: u64,
        current_streak: u32,
        last_completion_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            owner,
            points,
            tasks_completed,
            current_streak,
            last_completion_date,
        }
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn points(&self) -> u64 {
        self.points
    }

    pub fn tasks_completed(&self) -> u64 {
        self.tasks_completed
    }

    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    pub fn last_completion_date(&self) -> Option<NaiveDate> {
        self.last_completion_date
    }

    pub(crate) fn award_points(&mut self, points: u64) {
        self.points = self.points.saturating_add(points);
    }

    pub(crate) fn count_completion(&mut self) {
        self.tasks_completed = self.tasks_completed.saturating_add(1);
    }

    pub(crate) fn release_completion(&mut self) {
        self.tasks_completed = self.tasks_completed.saturating_sub(1);
    }

    /// Apply a completion on `today` to the streak.
    ///
    /// A day earlier than the last recorded completion counts as the same
    /// day: the chain is neither extended nor broken and the last completion
    /// date never moves backwards.
    pub(crate) fn advance_streak(&mut self, today: NaiveDate) -> StreakChange {
        let change = match self.last_completion_date {
            None => {
                self.current_streak = 1;
                StreakChange::Started
            }
            Some(last) => match (today - last).num_days() {
                1 => {
                    self.current_streak = self.current_streak.saturating_add(1);
                    StreakChange::Extended
                }
                days if days <= 0 => {
                    self.current_streak = self.current_streak.max(1);
                    StreakChange::Unchanged
                }
                _ => {
                    self.current_streak = 1;
                    StreakChange::Reset
                }
            },
        };

        self.last_completion_date = Some(
            self.last_completion_date
                .map_or(today, |last| last.max(today)),
        );
        change
    }
}
