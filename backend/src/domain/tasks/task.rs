//! Task entity, identifier and draft payload.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::UserId;

use super::{TASK_TITLE_MAX, TaskValidationError};

/// Opaque task identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value).map(Self)
    }
}

/// Input payload for [`Task::new`].
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub id: TaskId,
    pub owner: UserId,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl TaskDraft {
    /// Draft for a freshly created, pending task.
    pub fn pending(
        owner: UserId,
        title: impl Into<String>,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TaskId::random(),
            owner,
            title: title.into(),
            description,
            due_date,
            completed_at: None,
            created_at,
        }
    }
}

/// A user's task.
///
/// `completed` is derived from `completed_at`, which makes the
/// "timestamp present iff completed" rule hold by construction.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use streakboard::domain::{Task, TaskDraft, UserId};
///
/// let task = Task::new(TaskDraft::pending(
///     UserId::random(),
///     "Water the plants",
///     None,
///     None,
///     Utc::now(),
/// ))?;
/// assert!(!task.completed());
/// assert!(task.completed_at().is_none());
/// # Ok::<(), streakboard::domain::TaskValidationError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    owner: UserId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a validated task.
    ///
    /// The title is trimmed and must be non-empty; a blank description is
    /// stored as absent.
    pub fn new(draft: TaskDraft) -> Result<Self, TaskValidationError> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if title.chars().count() > TASK_TITLE_MAX {
            return Err(TaskValidationError::TitleTooLong {
                max: TASK_TITLE_MAX,
            });
        }

        let description = draft
            .description
            .map(|text| text.trim().to_owned())
            .filter(|text| !text.is_empty());

        Ok(Self {
            id: draft.id,
            owner: draft.owner,
            title: title.to_owned(),
            description,
            due_date: draft.due_date,
            completed_at: draft.completed_at,
            created_at: draft.created_at,
        })
    }

    /// Rebuilds a task from stored columns, checking the completion
    /// invariant against the stored flag.
    pub fn restore(draft: TaskDraft, completed: bool) -> Result<Self, TaskValidationError> {
        match (completed, draft.completed_at.is_some()) {
            (true, false) => Err(TaskValidationError::CompletedWithoutTimestamp),
            (false, true) => Err(TaskValidationError::TimestampWithoutCompletion),
            _ => Self::new(draft),
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Whether the task is currently completed.
    pub fn completed(&self) -> bool {
        self.completed_at.is_some()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn mark_completed(&mut self, at: DateTime<Utc>) {
        self.completed_at = Some(at);
    }

    pub(crate) fn mark_pending(&mut self) {
        self.completed_at = None;
    }
}
