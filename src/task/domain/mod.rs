//! Domain model for the task tracker.
//!
//! The task domain models task creation with defaults, status and difficulty
//! selection, due-date parsing, and in-place editing, while keeping all I/O
//! concerns outside of the domain boundary.

mod due_date;
mod error;
mod ids;
mod task;

pub use due_date::parse_due_date;
pub use error::TaskDomainError;
pub use ids::TaskId;
pub use task::{Difficulty, StatusFilter, Task, TaskDetails, TaskEdit, TaskStatus};
