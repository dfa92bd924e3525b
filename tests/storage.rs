use chrono::{Local, NaiveDate};
use std::fs;
use tasque::model::{Task, TaskKind, TaskList};
use tasque::storage::LocalStorage;
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn sample_list() -> TaskList {
    let mut done_deadline = Task::deadline("Submit report", date("2024-03-01"));
    done_deadline.mark_done();
    TaskList::new(vec![
        Task::todo("read book"),
        done_deadline,
        Task::event("team lunch", date("2021-12-02")),
    ])
}

#[test]
fn save_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deeply").join("nested").join("tasque.txt");
    let storage = LocalStorage::new(&path);

    storage.save(&sample_list()).unwrap();

    assert!(path.exists());
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T | 0 | read book\n\
         D | 1 | Submit report | 2024-03-01\n\
         E | 0 | team lunch | 2021-12-02\n"
    );
}

#[test]
fn saved_lists_round_trip() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().join("tasque.txt"));
    let original = sample_list();

    storage.save(&original).unwrap();
    let loaded = storage.load().unwrap();

    let original: Vec<&Task> = original.iter().collect();
    let loaded: Vec<&Task> = loaded.iter().collect();
    assert_eq!(loaded, original);
}

#[test]
fn missing_file_loads_an_empty_list() {
    let dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(dir.path().join("tasque.txt"));
    assert!(storage.load().unwrap().is_empty());
}

#[test]
fn corrupt_stored_date_becomes_today() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasque.txt");
    fs::write(&path, "D | 0 | pay rent | not-a-date\n").unwrap();

    let loaded = LocalStorage::new(&path).load().unwrap();
    let task = loaded.iter().next().unwrap();
    assert_eq!(task.description(), "pay rent");
    assert_eq!(
        *task.kind(),
        TaskKind::Deadline {
            by: Local::now().date_naive()
        }
    );
}

#[test]
fn unknown_type_tag_aborts_the_whole_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasque.txt");
    fs::write(&path, "T | 0 | fine\nZ | 1 | strange\n").unwrap();

    let err = LocalStorage::new(&path).load().unwrap_err();
    assert!(err.to_string().contains("corrupt data file"));
}

#[test]
fn save_rewrites_rather_than_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasque.txt");
    let storage = LocalStorage::new(&path);

    storage.save(&sample_list()).unwrap();
    storage
        .save(&TaskList::new(vec![Task::todo("only one left")]))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "T | 0 | only one left\n"
    );
}

#[test]
fn blank_lines_are_ignored_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tasque.txt");
    fs::write(&path, "T | 1 | read book\n\n").unwrap();

    let loaded = LocalStorage::new(&path).load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert!(loaded.iter().next().unwrap().is_done());
}
