//! Menu state machine for the interactive shell.
//!
//! Each screen is an explicit loop over one outstanding prompt. Invalid
//! input never raises an error: the current screen is redisplayed with a
//! notice, per the shell's recovery model.

use crate::shell::console::{Console, ShellResult};
use crate::shell::render::{detail_lines, list_line};
use crate::task::{
    domain::{Difficulty, StatusFilter, Task, TaskEdit, TaskId, TaskStatus},
    services::{CreateTaskRequest, TaskTracker, sort_by_title},
};
use log::{info, warn};
use mockable::Clock;
use std::io::{BufRead, Write};

const INVALID_OPTION: &str = "Opción inválida, intente nuevamente.";
const TASK_NOT_FOUND: &str = "Tarea no encontrada.";
const EMPTY_TITLE: &str = "El título no puede estar vacío.";

/// Runs the interactive session until the user selects exit.
///
/// Selecting `0` at the main menu returns immediately with no further I/O;
/// the process then terminates normally.
///
/// # Errors
///
/// Returns [`crate::shell::ShellError`] when the console streams fail or
/// the input closes mid-prompt.
pub fn run<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    info!("event=shell_started");
    loop {
        console.blank()?;
        console.say("=== Agenda de Tareas ===")?;
        console.say("1. Ver tareas")?;
        console.say("2. Buscar tarea")?;
        console.say("3. Agregar tarea")?;
        console.say("0. Salir")?;
        let choice = console.prompt("Seleccione una opción: ")?;
        match choice.trim() {
            "1" => view_menu(tracker, console)?,
            "2" => search_task(tracker, console)?,
            "3" => add_task(tracker, console)?,
            "0" => break,
            _ => console.say(INVALID_OPTION)?,
        }
    }
    info!("event=shell_stopped tasks={}", tracker.len());
    Ok(())
}

/// Status-filtered listing entry screen.
fn view_menu<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    loop {
        console.blank()?;
        console.say("--- Ver Tareas ---")?;
        console.say("1. Todas")?;
        console.say("2. Pendientes")?;
        console.say("3. En progreso")?;
        console.say("4. Completadas")?;
        console.say("0. Volver")?;
        let choice = console.prompt("Seleccione una opción: ")?;
        let selector = choice.trim();
        if selector == "0" {
            return Ok(());
        }
        if StatusFilter::from_selector(selector).is_some() {
            let mut tasks = tracker.list_by_selector(selector);
            sort_by_title(&mut tasks);
            return list_results(tracker, console, &tasks);
        }
        console.say(INVALID_OPTION)?;
    }
}

/// Displays a result snapshot and resolves a 1-based selection.
///
/// Invalid selections redisplay the same snapshot without re-querying the
/// store. A valid selection opens the detail screen and the flow then
/// returns to the main menu.
fn list_results<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
    tasks: &[Task],
) -> ShellResult<()> {
    loop {
        console.blank()?;
        console.say("--- Tareas ---")?;
        if tasks.is_empty() {
            console.say("No hay tareas para mostrar.")?;
        }
        for (position, task) in tasks.iter().enumerate() {
            console.say(&list_line(position + 1, task))?;
        }
        let choice = console.prompt("Seleccione una tarea (0 para volver): ")?;
        let trimmed = choice.trim();
        if trimmed == "0" {
            return Ok(());
        }
        let selected = trimmed
            .parse::<usize>()
            .ok()
            .filter(|number| (1..=tasks.len()).contains(number))
            .and_then(|number| tasks.get(number - 1));
        match selected {
            Some(task) => return task_detail(tracker, console, task.id()),
            None => console.say(TASK_NOT_FOUND)?,
        }
    }
}

/// Full field view of one task, with an edit escape hatch.
///
/// Viewing alone never mutates the task; only entering the edit screen
/// does. After an edit the updated record is redisplayed.
fn task_detail<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
    id: TaskId,
) -> ShellResult<()> {
    loop {
        let Some(task) = tracker.get(id) else {
            console.say(TASK_NOT_FOUND)?;
            return Ok(());
        };
        let lines = detail_lines(task);
        console.blank()?;
        console.say("--- Detalle de Tarea ---")?;
        for line in &lines {
            console.say(line)?;
        }
        let choice = console.prompt("Presione 'e' para editar o Enter para volver: ")?;
        if choice.trim().eq_ignore_ascii_case("e") {
            edit_task(tracker, console, id)?;
        } else {
            return Ok(());
        }
    }
}

/// Field-by-field edit session over the canonical stored record.
fn edit_task<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
    id: TaskId,
) -> ShellResult<()> {
    let Some(task) = tracker.get(id) else {
        console.say(TASK_NOT_FOUND)?;
        return Ok(());
    };
    let current_title = task.title().to_owned();
    let current_description = task.description().to_owned();

    console.blank()?;
    console.say("--- Editar Tarea ---")?;
    let title_input = console.prompt(&format!("Título [{current_title}]: "))?;
    let description_input = console.prompt(&format!("Descripción [{current_description}]: "))?;
    console.say("Nuevo estado: 1. Pendiente 2. En progreso 3. Completada 4. Cancelada")?;
    let status_input = console.prompt("Estado (Enter para mantener): ")?;
    console.say("Nueva dificultad: 1. Fácil 2. Media 3. Difícil")?;
    let difficulty_input = console.prompt("Dificultad (Enter para mantener): ")?;

    let mut edit = TaskEdit::new()
        .with_title(title_input)
        .with_description(description_input);
    if let Some(status) = TaskStatus::parse_selector(&status_input) {
        edit = edit.with_status(status);
    }
    if let Some(difficulty) = Difficulty::parse_selector(&difficulty_input) {
        edit = edit.with_difficulty(difficulty);
    }

    match tracker.edit(id, edit) {
        Ok(_) => console.say("Tarea actualizada.")?,
        Err(err) => {
            warn!("event=edit_failed id={id} error={err}");
            console.say(TASK_NOT_FOUND)?;
        }
    }
    Ok(())
}

/// Sequential creation prompts; a blank title restarts the screen.
fn add_task<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    loop {
        console.blank()?;
        console.say("--- Agregar Tarea ---")?;
        let title = console.prompt("Título: ")?;
        if title.trim().is_empty() {
            console.say(EMPTY_TITLE)?;
            continue;
        }
        let description = console.prompt("Descripción: ")?;
        let due_date_text = console.prompt("Fecha de vencimiento (AAAA-MM-DD): ")?;
        let difficulty_selector = console.prompt("Dificultad (1. Fácil 2. Media 3. Difícil): ")?;

        let request = CreateTaskRequest::new(title)
            .with_description(description)
            .with_due_date_text(due_date_text)
            .with_difficulty_selector(difficulty_selector);
        match tracker.create(request) {
            Ok(task) => {
                let confirmation = format!("Tarea agregada: {}", task.title());
                console.say(&confirmation)?;
                return Ok(());
            }
            Err(err) => {
                // Backstop for the domain check; the blank-title guard above
                // already catches this in practice.
                warn!("event=create_rejected error={err}");
                console.say(EMPTY_TITLE)?;
            }
        }
    }
}

/// Title substring search; empty result sets fall back to the main menu.
fn search_task<C: Clock, R: BufRead, W: Write>(
    tracker: &mut TaskTracker<C>,
    console: &mut Console<R, W>,
) -> ShellResult<()> {
    console.blank()?;
    console.say("--- Buscar Tarea ---")?;
    let query = console.prompt("Buscar por título: ")?;
    let results = tracker.search_by_title(&query);
    if results.is_empty() {
        console.say("No se encontraron tareas.")?;
        return Ok(());
    }
    list_results(tracker, console, &results)
}
