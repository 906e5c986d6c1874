//! Service layer for task creation, listing, search, and editing.

use crate::task::{
    domain::{
        Difficulty, StatusFilter, Task, TaskDetails, TaskDomainError, TaskEdit, TaskId,
        parse_due_date,
    },
    store::TaskStore,
};
use log::{debug, info};
use mockable::Clock;
use thiserror::Error;

/// Request payload for creating a task from raw prompt input.
///
/// All fields arrive as the user typed them; interpretation (trimming,
/// selector mapping, due-date parsing) happens at creation time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    due_date_text: String,
    difficulty_selector: String,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            due_date_text: String::new(),
            difficulty_selector: String::new(),
        }
    }

    /// Sets the description text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the raw due-date text (`YYYY-MM-DD` expected).
    #[must_use]
    pub fn with_due_date_text(mut self, due_date_text: impl Into<String>) -> Self {
        self.due_date_text = due_date_text.into();
        self
    }

    /// Sets the raw difficulty selector (`2` Medium, `3` Hard, else Easy).
    #[must_use]
    pub fn with_difficulty_selector(mut self, selector: impl Into<String>) -> Self {
        self.difficulty_selector = selector.into();
        self
    }
}

/// Service-level errors for tracker operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Domain-operations facade over the task store.
///
/// Owns the store and the clock for the session. Listings and searches hand
/// out snapshots (cloned tasks); edits address the canonical stored record
/// through its [`TaskId`].
#[derive(Debug)]
pub struct TaskTracker<C: Clock> {
    store: TaskStore,
    clock: C,
}

impl<C: Clock> TaskTracker<C> {
    /// Creates a tracker with an empty store.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            store: TaskStore::new(),
            clock,
        }
    }

    /// Creates a new task and appends it to the store.
    ///
    /// The created task is Pending with creation and last-edited timestamps
    /// taken from the clock. A blank difficulty selector defaults to Easy;
    /// unparsable due-date text downgrades silently to no due date.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::Domain`] when the title is empty after
    /// trimming.
    pub fn create(&mut self, request: CreateTaskRequest) -> TrackerResult<&Task> {
        let details = TaskDetails::new(request.title)?
            .with_description(request.description)
            .with_due_date(parse_due_date(&request.due_date_text))
            .with_difficulty(Difficulty::from_selector(&request.difficulty_selector));

        let task = Task::new(details, &self.clock);
        let id = task.id();
        info!(
            "event=task_created id={id} difficulty={} due_date_set={}",
            task.difficulty().as_str(),
            task.due_date().is_some()
        );
        self.store.insert(task);
        self.store
            .get(id)
            .ok_or(TrackerError::NotFound(id))
    }

    /// Lists tasks matching a view-menu selector, in insertion order.
    ///
    /// `1` lists every task, `2` through `4` narrow to Pending,
    /// `InProgress`, and Done; any other selector yields an empty listing.
    /// The returned tasks are a snapshot: callers may sort or drop them
    /// without affecting store order.
    #[must_use]
    pub fn list_by_selector(&self, selector: &str) -> Vec<Task> {
        StatusFilter::from_selector(selector).map_or_else(Vec::new, |filter| {
            self.store
                .iter()
                .filter(|task| filter.matches(task.status()))
                .cloned()
                .collect()
        })
    }

    /// Searches task titles for a case-insensitive substring match.
    ///
    /// Insertion order is preserved. An empty query matches every task.
    #[must_use]
    pub fn search_by_title(&self, query: &str) -> Vec<Task> {
        let needle = query.to_lowercase();
        let results: Vec<Task> = self
            .store
            .iter()
            .filter(|task| task.title().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        debug!("event=title_search hits={}", results.len());
        results
    }

    /// Returns the canonical stored task for the given identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.store.get(id)
    }

    /// Applies an edit to the canonical stored task.
    ///
    /// The last-edited timestamp advances even when the edit overrides no
    /// field.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when no task has the identifier.
    pub fn edit(&mut self, id: TaskId, edit: TaskEdit) -> TrackerResult<&Task> {
        let task = self
            .store
            .get_mut(id)
            .ok_or(TrackerError::NotFound(id))?;
        task.apply_edit(edit, &self.clock);
        info!("event=task_edited id={id}");
        self.store.get(id).ok_or(TrackerError::NotFound(id))
    }

    /// Returns the number of stored tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

/// Sorts a task snapshot alphabetically by title, ascending.
///
/// Comparison is case-insensitive over Unicode lowercase; the underlying
/// stable sort keeps insertion order between equal titles. Only snapshots
/// are sorted — store order is never rearranged.
pub fn sort_by_title(tasks: &mut [Task]) {
    tasks.sort_by_cached_key(|task| task.title().to_lowercase());
}
