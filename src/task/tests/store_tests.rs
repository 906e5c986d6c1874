//! Behavioural tests for the in-memory task store.

use crate::task::domain::{Task, TaskDetails, TaskEdit, TaskStatus};
use crate::task::store::TaskStore;
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn task(title: &str, clock: &DefaultClock) -> Task {
    Task::new(TaskDetails::new(title).expect("valid details"), clock)
}

#[rstest]
fn insertion_order_is_preserved(clock: DefaultClock) {
    let mut store = TaskStore::new();
    store.insert(task("zanahorias", &clock));
    store.insert(task("Almuerzo", &clock));
    store.insert(task("banco", &clock));

    let titles: Vec<&str> = store.iter().map(Task::title).collect();
    assert_eq!(titles, vec!["zanahorias", "Almuerzo", "banco"]);
}

#[rstest]
fn duplicate_titles_are_permitted(clock: DefaultClock) {
    let mut store = TaskStore::new();
    let first = task("Llamar al médico", &clock);
    let second = task("Llamar al médico", &clock);
    let first_id = first.id();
    let second_id = second.id();

    store.insert(first);
    store.insert(second);

    assert_eq!(store.len(), 2);
    assert_ne!(first_id, second_id);
    assert!(store.get(first_id).is_some());
    assert!(store.get(second_id).is_some());
}

#[rstest]
fn get_mut_edits_are_visible_through_get(clock: DefaultClock) {
    let mut store = TaskStore::new();
    let stored = task("Ordenar el garaje", &clock);
    let id = stored.id();
    store.insert(stored);

    let record = store.get_mut(id).expect("stored task");
    record.apply_edit(TaskEdit::new().with_status(TaskStatus::Done), &clock);

    let found = store.get(id).expect("stored task");
    assert_eq!(found.status(), TaskStatus::Done);
}

#[rstest]
fn get_returns_none_for_unknown_id(clock: DefaultClock) {
    let mut store = TaskStore::new();
    store.insert(task("Única tarea", &clock));

    let unknown = task("No insertada", &clock);
    assert!(store.get(unknown.id()).is_none());
}

#[rstest]
fn empty_store_reports_empty() {
    let store = TaskStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert_eq!(store.iter().count(), 0);
}
