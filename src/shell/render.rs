//! Presentation helpers for the interactive shell.
//!
//! Every function here is a pure string producer; printing is the menu
//! loop's job.

use crate::task::domain::{Difficulty, Task, TaskStatus};
use chrono::{DateTime, NaiveDate, Utc};

/// Placeholder shown for tasks without a due date.
pub const NO_DUE_DATE: &str = "Sin Vencimiento";

/// Renders a difficulty as its star glyph.
#[must_use]
pub const fn difficulty_glyph(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "★☆☆",
        Difficulty::Medium => "★★☆",
        Difficulty::Hard => "★★★",
    }
}

/// Renders a status as its user-facing label.
#[must_use]
pub const fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "Pendiente",
        TaskStatus::InProgress => "En Progreso",
        TaskStatus::Done => "Completada",
        TaskStatus::Cancelled => "Cancelada",
    }
}

/// Renders an optional due date as a calendar-date string.
#[must_use]
pub fn format_due_date(due_date: Option<NaiveDate>) -> String {
    due_date.map_or_else(
        || NO_DUE_DATE.to_owned(),
        |date| date.format("%d/%m/%Y").to_string(),
    )
}

/// Renders a timestamp as a calendar date with minutes.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Renders one listing line: `[index] title (glyph) - status`.
///
/// The index is 1-based, matching the selection the listing screen accepts.
#[must_use]
pub fn list_line(index: usize, task: &Task) -> String {
    format!(
        "[{index}] {} ({}) - {}",
        task.title(),
        difficulty_glyph(task.difficulty()),
        status_label(task.status())
    )
}

/// Renders the full field-by-field detail view of a task.
#[must_use]
pub fn detail_lines(task: &Task) -> Vec<String> {
    vec![
        format!("Título: {}", task.title()),
        format!("Descripción: {}", task.description()),
        format!("Estado: {}", status_label(task.status())),
        format!("Dificultad: {}", difficulty_glyph(task.difficulty())),
        format!("Vencimiento: {}", format_due_date(task.due_date())),
        format!("Creada: {}", format_timestamp(task.created_at())),
        format!("Última edición: {}", format_timestamp(task.last_edited_at())),
    ]
}
