//! Task aggregate root and related value types.

use super::{TaskDomainError, TaskId};
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Task has been created but work has not started.
    Pending,
    /// Task is being worked on.
    InProgress,
    /// Task has been completed.
    Done,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Done => "done",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses an edit-menu selector into a status.
    ///
    /// `1` through `4` map to Pending, `InProgress`, Done, and Cancelled
    /// respectively. Any other input, including blank, yields `None` so the
    /// caller keeps the current status.
    #[must_use]
    pub fn parse_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(Self::Pending),
            "2" => Some(Self::InProgress),
            "3" => Some(Self::Done),
            "4" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Estimated task difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Quick or trivial work.
    Easy,
    /// Moderate effort.
    Medium,
    /// Substantial effort.
    Hard,
}

impl Difficulty {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Maps a creation-time selector to a difficulty.
    ///
    /// `2` selects Medium and `3` selects Hard; anything else, including
    /// blank input, defaults to Easy.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim() {
            "2" => Self::Medium,
            "3" => Self::Hard,
            _ => Self::Easy,
        }
    }

    /// Parses an edit-menu selector into a difficulty.
    ///
    /// `1` through `3` map to Easy, Medium, and Hard. Any other input yields
    /// `None` so the caller keeps the current difficulty.
    #[must_use]
    pub fn parse_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(Self::Easy),
            "2" => Some(Self::Medium),
            "3" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Status filter applied by task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task, regardless of status.
    All,
    /// Only tasks with the given status.
    Only(TaskStatus),
}

impl StatusFilter {
    /// Parses a view-menu selector into a filter.
    ///
    /// `1` lists everything; `2` through `4` narrow to Pending,
    /// `InProgress`, and Done. Cancelled tasks are only reachable through
    /// the full listing. Unknown selectors yield `None`.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        match selector.trim() {
            "1" => Some(Self::All),
            "2" => Some(Self::Only(TaskStatus::Pending)),
            "3" => Some(Self::Only(TaskStatus::InProgress)),
            "4" => Some(Self::Only(TaskStatus::Done)),
            _ => None,
        }
    }

    /// Returns whether a task with the given status passes the filter.
    #[must_use]
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Validated field values for a task about to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    title: String,
    description: String,
    due_date: Option<NaiveDate>,
    difficulty: Difficulty,
}

impl TaskDetails {
    /// Creates task details with the required title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] if the title is empty after
    /// trimming.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: normalized_title.to_owned(),
            description: String::new(),
            due_date: None,
            difficulty: Difficulty::Easy,
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        self.description = value.trim().to_owned();
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Sets the difficulty.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// Field overrides collected by an edit session.
///
/// Absent fields keep the stored value. A title or description override is
/// recorded only when the supplied text is non-blank, so the stored title
/// can never be blanked out through an edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    title: Option<String>,
    description: Option<String>,
    status: Option<TaskStatus>,
    difficulty: Option<Difficulty>,
}

impl TaskEdit {
    /// Creates an empty edit that keeps every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the title when the input is non-blank.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let value = title.into();
        let normalized = value.trim();
        self.title = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Overrides the description when the input is non-blank.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let value = description.into();
        let normalized = value.trim();
        self.description = (!normalized.is_empty()).then(|| normalized.to_owned());
        self
    }

    /// Overrides the status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Overrides the difficulty.
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Returns whether the edit overrides no field at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.difficulty.is_none()
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    status: TaskStatus,
    difficulty: Difficulty,
    due_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    last_edited_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new pending task from validated details.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title: details.title,
            description: details.description,
            status: TaskStatus::Pending,
            difficulty: details.difficulty,
            due_date: details.due_date,
            created_at: timestamp,
            last_edited_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task difficulty.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the timestamp of the most recent edit.
    #[must_use]
    pub const fn last_edited_at(&self) -> DateTime<Utc> {
        self.last_edited_at
    }

    /// Applies an edit to this task.
    ///
    /// Fields absent from the edit keep their stored values. The last-edited
    /// timestamp advances unconditionally, even for an edit that overrides
    /// nothing: completing an edit session counts as an edit.
    pub fn apply_edit(&mut self, edit: TaskEdit, clock: &impl Clock) {
        if let Some(title) = edit.title {
            self.title = title;
        }
        if let Some(description) = edit.description {
            self.description = description;
        }
        if let Some(status) = edit.status {
            self.status = status;
        }
        if let Some(difficulty) = edit.difficulty {
            self.difficulty = difficulty;
        }
        self.last_edited_at = clock.utc();
    }
}
