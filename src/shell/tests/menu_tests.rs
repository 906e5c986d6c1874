//! Scripted-session tests for the menu state machine.
//!
//! Each test feeds a complete input script through the shell and inspects
//! the rendered transcript and the tracker state left behind.

use crate::shell::{Console, ShellError, run};
use crate::task::domain::{Difficulty, TaskStatus};
use crate::task::services::{CreateTaskRequest, TaskTracker};
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use std::io::Cursor;

type TestTracker = TaskTracker<DefaultClock>;

#[fixture]
fn tracker() -> TestTracker {
    TaskTracker::new(DefaultClock)
}

/// Runs a full session script and returns the rendered transcript.
fn run_session(tracker: &mut TestTracker, script: &str) -> String {
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new(script.as_bytes().to_vec()), &mut output);
    run(tracker, &mut console).expect("session should run to completion");
    String::from_utf8(output).expect("transcript should be valid UTF-8")
}

fn seed(tracker: &mut TestTracker, titles: &[&str]) {
    for title in titles {
        tracker
            .create(CreateTaskRequest::new(*title))
            .expect("seed task creation should succeed");
    }
}

#[rstest]
fn exit_option_terminates_with_no_further_prompts(mut tracker: TestTracker) {
    let transcript = run_session(&mut tracker, "0\n");

    assert_eq!(transcript.matches("=== Agenda de Tareas ===").count(), 1);
    assert!(transcript.ends_with("Seleccione una opción: "));
    assert!(tracker.is_empty());
}

#[rstest]
fn invalid_main_option_redisplays_the_menu(mut tracker: TestTracker) {
    let transcript = run_session(&mut tracker, "9\n0\n");

    assert!(transcript.contains("Opción inválida"));
    assert_eq!(transcript.matches("=== Agenda de Tareas ===").count(), 2);
}

#[rstest]
fn added_task_appears_in_the_full_listing(mut tracker: TestTracker) {
    let script = "3\nComprar leche\ndiario\n2026-09-05\n2\n1\n1\n0\n0\n";
    let transcript = run_session(&mut tracker, script);

    assert!(transcript.contains("Tarea agregada: Comprar leche"));
    assert!(transcript.contains("[1] Comprar leche (★★☆) - Pendiente"));
    assert_eq!(tracker.len(), 1);
    let created = &tracker.list_by_selector("1")[0];
    assert_eq!(created.difficulty(), Difficulty::Medium);
    assert!(created.due_date().is_some());
}

#[rstest]
fn blank_title_restarts_the_add_screen(mut tracker: TestTracker) {
    let script = "3\n   \nTarea real\n\n\n\n0\n";
    let transcript = run_session(&mut tracker, script);

    assert!(transcript.contains("El título no puede estar vacío."));
    assert_eq!(transcript.matches("--- Agregar Tarea ---").count(), 2);
    assert_eq!(tracker.len(), 1);
    assert_eq!(tracker.list_by_selector("1")[0].title(), "Tarea real");
}

#[rstest]
fn view_menu_rejects_unknown_selector(mut tracker: TestTracker) {
    let transcript = run_session(&mut tracker, "1\n7\n0\n0\n");

    assert!(transcript.contains("Opción inválida"));
    assert_eq!(transcript.matches("--- Ver Tareas ---").count(), 2);
}

#[rstest]
fn listing_is_sorted_alphabetically_by_title(mut tracker: TestTracker) {
    seed(&mut tracker, &["zanahorias", "Almuerzo", "banco"]);
    let transcript = run_session(&mut tracker, "1\n1\n0\n0\n");

    assert!(transcript.contains("[1] Almuerzo"));
    assert!(transcript.contains("[2] banco"));
    assert!(transcript.contains("[3] zanahorias"));
}

#[rstest]
fn out_of_range_selection_redisplays_the_same_results(mut tracker: TestTracker) {
    seed(&mut tracker, &["única"]);
    let transcript = run_session(&mut tracker, "1\n1\n5\n0\n0\n");

    assert!(transcript.contains("Tarea no encontrada."));
    assert_eq!(transcript.matches("--- Tareas ---").count(), 2);
    assert_eq!(transcript.matches("[1] única").count(), 2);
}

#[rstest]
fn search_without_matches_returns_to_the_main_menu(mut tracker: TestTracker) {
    seed(&mut tracker, &["una tarea"]);
    let transcript = run_session(&mut tracker, "2\nxyz\n0\n");

    assert!(transcript.contains("No se encontraron tareas."));
    assert_eq!(transcript.matches("=== Agenda de Tareas ===").count(), 2);
}

#[rstest]
fn search_lists_substring_matches_only(mut tracker: TestTracker) {
    seed(&mut tracker, &["Buy Milk", "milkshake ideas", "juice"]);
    let transcript = run_session(&mut tracker, "2\nmilk\n0\n0\n");

    assert!(transcript.contains("[1] Buy Milk"));
    assert!(transcript.contains("[2] milkshake ideas"));
    assert!(!transcript.contains("juice"));
}

#[rstest]
fn viewing_a_detail_and_leaving_never_mutates(mut tracker: TestTracker) {
    seed(&mut tracker, &["intacta"]);
    let before = tracker.list_by_selector("1")[0].last_edited_at();

    let transcript = run_session(&mut tracker, "1\n1\n1\n\n0\n");

    assert!(transcript.contains("--- Detalle de Tarea ---"));
    assert!(transcript.contains("Título: intacta"));
    let after = tracker.list_by_selector("1")[0].last_edited_at();
    assert_eq!(before, after);
}

#[rstest]
fn edit_with_blank_inputs_keeps_fields_and_touches_timestamp(mut tracker: TestTracker) {
    seed(&mut tracker, &["sin cambios"]);
    let before = tracker.list_by_selector("1")[0].last_edited_at();

    let script = "1\n1\n1\ne\n\n\n\n\n\n0\n";
    let transcript = run_session(&mut tracker, script);

    assert!(transcript.contains("Tarea actualizada."));
    let task = &tracker.list_by_selector("1")[0];
    assert_eq!(task.title(), "sin cambios");
    assert_eq!(task.status(), TaskStatus::Pending);
    assert!(task.last_edited_at() >= before);
}

#[rstest]
fn edit_updates_status_and_redisplays_the_detail(mut tracker: TestTracker) {
    seed(&mut tracker, &["avanzando"]);

    let script = "1\n1\n1\ne\n\n\n2\n\n\n0\n";
    let transcript = run_session(&mut tracker, script);

    assert!(transcript.contains("Tarea actualizada."));
    assert_eq!(transcript.matches("--- Detalle de Tarea ---").count(), 2);
    assert!(transcript.contains("Estado: En Progreso"));
    let task = &tracker.list_by_selector("1")[0];
    assert_eq!(task.status(), TaskStatus::InProgress);
    assert_eq!(task.title(), "avanzando");
}

#[rstest]
fn edit_prompts_show_current_values_in_brackets(mut tracker: TestTracker) {
    tracker
        .create(CreateTaskRequest::new("Vieja").with_description("detalle"))
        .expect("seed task creation should succeed");

    let script = "1\n1\n1\ne\nNueva\n\n\n\n\n0\n";
    let transcript = run_session(&mut tracker, script);

    assert!(transcript.contains("Título [Vieja]: "));
    assert!(transcript.contains("Descripción [detalle]: "));
    assert_eq!(tracker.list_by_selector("1")[0].title(), "Nueva");
    assert_eq!(tracker.list_by_selector("1")[0].description(), "detalle");
}

#[rstest]
fn closed_input_mid_prompt_is_an_error(mut tracker: TestTracker) {
    let mut output = Vec::new();
    let mut console = Console::new(Cursor::new(Vec::new()), &mut output);

    let result = run(&mut tracker, &mut console);
    assert!(matches!(result, Err(ShellError::InputClosed)));
}
