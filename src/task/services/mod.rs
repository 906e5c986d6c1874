//! Orchestration services for the task tracker.

mod tracker;

pub use tracker::{CreateTaskRequest, TaskTracker, TrackerError, TrackerResult, sort_by_title};
