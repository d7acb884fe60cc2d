//! Testing utilities for the ProfBook workspace
//!
//! Shared fixtures, path shorthands and tracing setup.

#![allow(missing_docs)]

use chrono::NaiveDateTime;
use profbook_model::sample::sample_root;
use profbook_model::{Deadline, Group, Name, Student, Task};
use profbook_path::{AbsolutePath, GroupId, RelativePath, StudentId};
use profbook_state::State;
use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

pub fn abs(text: &str) -> AbsolutePath {
    text.parse().unwrap()
}

pub fn rel(text: &str) -> RelativePath {
    text.parse().unwrap()
}

pub fn group(id: &str, name: &str) -> Group {
    Group::new(Name::new(name).unwrap(), GroupId::parse(id).unwrap())
}

pub fn student(id: &str, name: &str) -> Student {
    Student::new(Name::new(name).unwrap(), StudentId::parse(id).unwrap())
}

pub fn todo(description: &str) -> Task {
    Task::todo(description).unwrap()
}

pub fn due(text: &str) -> NaiveDateTime {
    Deadline::parse_due(text).unwrap()
}

pub fn deadline(description: &str, due_text: &str) -> Task {
    Task::deadline(description, due(due_text)).unwrap()
}

/// Empty tree at the root
pub fn empty_state() -> State {
    init_tracing();
    State::new()
}

/// Sample tree (`grp-001`, `grp-002`) at the root
pub fn sample_state() -> State {
    init_tracing();
    State::with_root(sample_root().unwrap())
}
